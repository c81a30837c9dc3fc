//! Invariant checks for materialized schedules.

use std::collections::BTreeSet;

use chrono::Duration;
use rota_core::{Automaton, Schedule, ShiftType, ShiftWindow};

/// Expected shape of a schedule.
#[derive(Debug, Clone)]
pub struct Expectation<'a> {
    pub automaton: &'a Automaton,
    pub employees: usize,
    pub days: i64,
    pub team_size: usize,
    pub min_shifts_per_cycle: usize,
    pub window: ShiftWindow,
}

/// Every way `schedule` departs from `expected`, as readable messages.
///
/// An empty list means the schedule is valid.
pub fn schedule_violations(schedule: &Schedule, expected: &Expectation<'_>) -> Vec<String> {
    let mut violations = Vec::new();

    if schedule.days() != expected.days {
        violations.push(format!("days {} != {}", schedule.days(), expected.days));
    }
    if schedule.end_date != schedule.start_date + Duration::days(expected.days) {
        violations.push("end date is not start date + days".to_string());
    }
    let cells = expected.employees * expected.days as usize;
    if schedule.shifts.len() != cells {
        violations.push(format!("{} shifts, expected {}", schedule.shifts.len(), cells));
    }

    for (i, shift) in schedule.shifts.iter().enumerate() {
        if shift.id != i as i64 + 1 {
            violations.push(format!("shift #{} has id {}", i + 1, shift.id));
        }
        let day = i as i64 % expected.days;
        let date = schedule.start_date + Duration::days(day);
        let (start, end) = expected.window.span(date, shift.shift_type);
        if shift.start != start || shift.end != end {
            violations.push(format!("shift {} has wrong times", shift.id));
        }
    }

    for day in 0..expected.days {
        let date = schedule.start_date + Duration::days(day);
        let on_day: Vec<_> = schedule.shifts_on(date).collect();
        let count = |kind| on_day.iter().filter(|s| s.shift_type == kind).count();
        let off = expected
            .team_size
            .checked_mul(2)
            .and_then(|working| expected.employees.checked_sub(working));
        if count(ShiftType::Day) != expected.team_size
            || count(ShiftType::Night) != expected.team_size
            || Some(count(ShiftType::Off)) != off
        {
            violations.push(format!("day {} has wrong headcount", day + 1));
        }
        let distinct: BTreeSet<_> = on_day.iter().map(|s| s.employee.id).collect();
        if distinct.len() != on_day.len() || on_day.len() != expected.employees {
            violations.push(format!("day {} does not cover every employee once", day + 1));
        }
    }

    let ids: BTreeSet<_> = schedule.shifts.iter().map(|s| s.employee.id).collect();
    for id in ids {
        let row: Vec<_> = schedule.shifts_for(id).map(|s| s.shift_type).collect();
        if !expected.automaton.accepts_sequence(&row) {
            violations.push(format!("employee {} breaks the rule set", id));
        }
        let worked = row.iter().filter(|s| s.is_worked()).count();
        if worked < expected.min_shifts_per_cycle {
            violations.push(format!("employee {} works only {} shifts", id, worked));
        }
    }

    violations
}
