//! Human-readable solve report.
//!
//! The report is built alongside the search and always handed back to the
//! caller, whether or not a schedule was found.

use std::fmt::Write;
use std::sync::Arc;

use rota_core::{Employee, ShiftType};
use rota_solver::{AssignmentGrid, SearchStats};

/// Error text returned when a well-formed problem yields no schedule.
pub const NO_SOLUTION_MESSAGE: &str = "There's no solution in the model for your input.";

/// Accumulates the diagnostic text of one solve.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    text: String,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Problem summary written before searching.
    pub fn header(&mut self, employees: usize, days: usize, team_size: usize, min_shifts: usize) {
        self.text.push_str("Starting to solve a new schedule\n\n");
        let _ = writeln!(
            self.text,
            "This is a schedule for {} employees in {} days",
            employees, days
        );
        let _ = write!(
            self.text,
            "Shift team size: {}, minimum shifts per employee: {}\n\n",
            team_size, min_shifts
        );
    }

    /// One roster line per employee followed by the daily headcount table.
    pub fn solution(&mut self, grid: &AssignmentGrid, employees: &[Arc<Employee>]) {
        for (row, employee) in employees.iter().enumerate().take(grid.employees()) {
            let _ = write!(self.text, "Employee #{:<2}: ", row + 1);
            for shift in grid.row(row) {
                let _ = write!(self.text, "{} ", shift.tag());
            }
            let _ = write!(self.text, " #Total days: {:>2}", grid.worked_days(row));
            for shift in ShiftType::ALL {
                let _ = write!(
                    self.text,
                    "  {}:{}",
                    shift.tag(),
                    grid.count_for_employee(row, shift)
                );
            }
            let _ = writeln!(self.text, "\t- {}", employee.display_name());
        }
        self.text.push('\n');

        self.text.push_str("Daily Statistics\nDay\t\td n o\n");
        for day in 0..grid.days() {
            let _ = write!(self.text, "Day #{:>2}: \t", day + 1);
            for shift in ShiftType::ALL {
                let _ = write!(self.text, "{} ", grid.count_on_day(day, shift));
            }
            self.text.push('\n');
        }
        self.text.push('\n');
    }

    /// Search counters and the closing lines.
    pub fn summary(&mut self, stats: &SearchStats) {
        let _ = write!(self.text, "\nSolutions: {}", stats.solutions);
        let _ = write!(self.text, "\nFailures: {}", stats.failures);
        let _ = write!(self.text, "\nBranches: {} ", stats.branches);
        let _ = write!(self.text, "\nWallTime: {}ms", stats.elapsed().as_millis());
        self.text.push_str("\n\nFinished solving the schedule.");
        if stats.solutions == 0 {
            let _ = write!(self.text, "\n\n{}", NO_SOLUTION_MESSAGE);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}
