//! Turns bound grids into dated schedules.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use rota_core::{Employee, Schedule, Shift, ShiftWindow};
use rota_solver::{AssignmentGrid, ConstraintModel};

/// Converts solutions of one model into [`Schedule`]s.
///
/// Cheap to clone; the roster is shared.
#[derive(Debug, Clone)]
pub struct Materializer {
    employees: Arc<[Arc<Employee>]>,
    start_date: NaiveDate,
    days: usize,
    team_size: usize,
    window: ShiftWindow,
}

impl Materializer {
    /// Row `i` of every grid belongs to `employees[i]`.
    pub fn new(
        employees: &[Arc<Employee>],
        start_date: NaiveDate,
        model: &ConstraintModel,
    ) -> Self {
        Self {
            employees: employees.into(),
            start_date,
            days: model.days(),
            team_size: model.team_size(),
            window: model.window(),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Duration::days(self.days as i64)
    }

    pub fn schedule_name(&self) -> String {
        format!(
            "Schedule for {}-{} for {} employees, team size {}",
            self.start_date,
            self.end_date(),
            self.employees.len(),
            self.team_size
        )
    }

    /// Builds schedule `id` from `grid`.
    ///
    /// Shift ids count from 1 in (employee, day) order.
    pub fn materialize(&self, id: i64, grid: &AssignmentGrid) -> Schedule {
        let mut shifts = Vec::with_capacity(self.employees.len() * self.days);
        let mut next_id = 1;

        for (row, employee) in self.employees.iter().enumerate().take(grid.employees()) {
            for (day, &shift_type) in grid.row(row).iter().enumerate() {
                let date = self.start_date + Duration::days(day as i64);
                let (start, end) = self.window.span(date, shift_type);
                shifts.push(Shift {
                    id: next_id,
                    employee: Arc::clone(employee),
                    shift_type,
                    start,
                    end,
                });
                next_id += 1;
            }
        }

        Schedule {
            id,
            name: self.schedule_name(),
            start_date: self.start_date,
            end_date: self.end_date(),
            shifts,
        }
    }
}
