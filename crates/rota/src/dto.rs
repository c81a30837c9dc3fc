//! Wire types for the scheduling service.

use chrono::{Local, NaiveDate, NaiveDateTime};
use rota_core::{RuleSet, RuleSetId, Schedule, Shift, ShiftType};
use serde::{Deserialize, Serialize};

use crate::scheduler::ScheduleParameters;

/// A request for a new roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub rule_set_id: RuleSetId,
    /// Defaults to today.
    #[serde(default = "today")]
    pub start_date: NaiveDate,
    pub days: i64,
    /// How many of the active employees to draw.
    #[serde(alias = "numberOfEmployees")]
    pub employee_count: i64,
    pub team_size: i64,
    #[serde(default)]
    pub min_shifts_per_cycle: i64,
    #[serde(default = "default_start_hour")]
    pub start_hour: i64,
    #[serde(default = "default_shift_hours")]
    pub shift_hours: i64,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn default_start_hour() -> i64 {
    7
}

fn default_shift_hours() -> i64 {
    12
}

impl ScheduleRequest {
    /// A request starting today with a 07:00 start and twelve hour shifts.
    pub fn new(rule_set_id: RuleSetId, days: i64, employee_count: i64, team_size: i64) -> Self {
        Self {
            rule_set_id,
            start_date: today(),
            days,
            employee_count,
            team_size,
            min_shifts_per_cycle: 0,
            start_hour: default_start_hour(),
            shift_hours: default_shift_hours(),
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_min_shifts_per_cycle(mut self, min_shifts: i64) -> Self {
        self.min_shifts_per_cycle = min_shifts;
        self
    }

    pub fn with_shift_window(mut self, start_hour: i64, shift_hours: i64) -> Self {
        self.start_hour = start_hour;
        self.shift_hours = shift_hours;
        self
    }

    /// Scheduler parameters for this request.
    pub fn parameters(&self, max_solutions: i64) -> ScheduleParameters {
        ScheduleParameters::new(self.start_date, self.days, self.team_size)
            .with_min_shifts_per_cycle(self.min_shifts_per_cycle)
            .with_shift_window(self.start_hour, self.shift_hours)
            .with_max_solutions(max_solutions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftDto {
    pub id: i64,
    /// Display name of the employee.
    pub employee: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
}

impl From<&Shift> for ShiftDto {
    fn from(shift: &Shift) -> Self {
        Self {
            id: shift.id,
            employee: shift.employee.display_name(),
            start_date: shift.start,
            end_date: shift.end,
            shift_type: shift.shift_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub shifts: Vec<ShiftDto>,
    /// Diagnostic text of the solve that produced the schedule.
    pub statistics: String,
}

impl ScheduleDto {
    pub fn from_schedule(schedule: &Schedule, statistics: impl Into<String>) -> Self {
        Self {
            id: schedule.id,
            name: schedule.name.clone(),
            start_date: schedule.start_date,
            end_date: schedule.end_date,
            days: schedule.days(),
            shifts: schedule.shifts.iter().map(ShiftDto::from).collect(),
            statistics: statistics.into(),
        }
    }
}

/// Service answer: one schedule, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub schedule: Option<ScheduleDto>,
    pub statistics: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSetDto {
    pub id: RuleSetId,
    pub name: String,
}

impl From<&RuleSet> for RuleSetDto {
    fn from(rule_set: &RuleSet) -> Self {
        Self {
            id: rule_set.id,
            name: rule_set.name.clone(),
        }
    }
}
