//! Materialized schedules.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use super::{Employee, ShiftType};

/// One shift of one employee on one day.
///
/// Created only by the materializer and never mutated afterwards. The
/// employee is shared with the caller's roster, not copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    /// Per-schedule counter starting at 1, in (employee, day) order.
    pub id: i64,
    pub employee: Arc<Employee>,
    pub shift_type: ShiftType,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Shift {
    /// Calendar day the shift starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }
}

/// A complete roster for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Solution number, in discovery order starting at 1.
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub shifts: Vec<Shift>,
}

impl Schedule {
    /// Cycle length, derived from the date range.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Shifts starting on `date`.
    pub fn shifts_on(&self, date: NaiveDate) -> impl Iterator<Item = &Shift> + '_ {
        self.shifts.iter().filter(move |s| s.start_date() == date)
    }

    /// Shifts of the employee with `employee_id`, in day order.
    pub fn shifts_for(&self, employee_id: i64) -> impl Iterator<Item = &Shift> + '_ {
        self.shifts
            .iter()
            .filter(move |s| s.employee.id == employee_id)
    }
}
