//! Constraint model builder.

use std::sync::Arc;

use rota_core::{Automaton, Result, RotaError, ShiftWindow};
use tracing::debug;

use super::{Constraint, ConstraintModel, TransitionTable};
use crate::propagation::{CountConstraint, DistributionConstraint, SequenceConstraint};

/// Translates business parameters into a [`ConstraintModel`].
///
/// Raw integers are accepted so that out-of-range input is reported as a
/// validation error naming the parameter, before any search starts.
///
/// # Example
///
/// ```
/// use rota_core::{Automaton, ShiftType};
/// use rota_solver::ModelBuilder;
///
/// let automaton = Automaton::new(1, [1], ShiftType::ALL.map(|s| (1, s, 1))).unwrap();
///
/// let model = ModelBuilder::new()
///     .automaton(Some(&automaton))
///     .employees(4)
///     .days(7)
///     .team_size(1)
///     .min_shifts_per_cycle(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(model.cell_count(), 28);
/// assert_eq!(model.off_quota(), 2);
///
/// let err = ModelBuilder::new().employees(4).build().unwrap_err();
/// assert_eq!(err.to_string(), "Rule set is empty.");
/// ```
#[derive(Debug, Clone)]
pub struct ModelBuilder<'a> {
    automaton: Option<&'a Automaton>,
    employees: i64,
    days: i64,
    team_size: i64,
    min_shifts_per_cycle: i64,
    start_hour: i64,
    shift_hours: i64,
}

impl Default for ModelBuilder<'_> {
    fn default() -> Self {
        Self {
            automaton: None,
            employees: 0,
            days: 0,
            team_size: 0,
            min_shifts_per_cycle: 0,
            start_hour: 7,
            shift_hours: 12,
        }
    }
}

impl<'a> ModelBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn automaton(mut self, automaton: Option<&'a Automaton>) -> Self {
        self.automaton = automaton;
        self
    }

    pub fn employees(mut self, employees: i64) -> Self {
        self.employees = employees;
        self
    }

    pub fn days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    pub fn team_size(mut self, team_size: i64) -> Self {
        self.team_size = team_size;
        self
    }

    pub fn min_shifts_per_cycle(mut self, min_shifts: i64) -> Self {
        self.min_shifts_per_cycle = min_shifts;
        self
    }

    pub fn shift_window(mut self, start_hour: i64, shift_hours: i64) -> Self {
        self.start_hour = start_hour;
        self.shift_hours = shift_hours;
        self
    }

    /// Validates the parameters and builds the model.
    ///
    /// A team that cannot fit the roster (`employees < 2 * team_size`,
    /// including a `2 * team_size` past `i64::MAX`) is not an error here:
    /// the distribution constraints make the model unsatisfiable and the
    /// search reports zero solutions.
    pub fn build(self) -> Result<ConstraintModel> {
        let automaton = self.automaton.ok_or(RotaError::MissingRuleSet)?;
        if self.employees < 1 {
            return Err(RotaError::out_of_range(
                "employees",
                "Employee collection is empty.",
            ));
        }
        if self.days < 1 {
            return Err(RotaError::out_of_range(
                "days",
                "Invalid number for days in a cycle.",
            ));
        }
        if self.team_size < 1 {
            return Err(RotaError::out_of_range(
                "team_size",
                "Invalid number for employees in each shift.",
            ));
        }
        if self.min_shifts_per_cycle < 0 {
            return Err(RotaError::out_of_range(
                "min_shifts_per_cycle",
                "Invalid number for minimum shifts per cycle.",
            ));
        }
        let window = ShiftWindow::new(self.start_hour, self.shift_hours)?;
        if self.employees.checked_mul(self.days).is_none() {
            return Err(RotaError::out_of_range(
                "days",
                "Invalid number for days in a cycle.",
            ));
        }

        let employees = self.employees as usize;
        let days = self.days as usize;
        let team_size = self.team_size as usize;
        let min_shifts = self.min_shifts_per_cycle as usize;

        let table = Arc::new(TransitionTable::compile(automaton));
        let mut constraints = Vec::with_capacity(employees.saturating_mul(2).saturating_add(days));
        for employee in 0..employees {
            constraints.push(Constraint::Sequence(SequenceConstraint::new(
                employee,
                days,
                Arc::clone(&table),
            )));
            constraints.push(Constraint::Count(CountConstraint::new(
                employee, days, min_shifts,
            )));
        }

        let off = off_demand(self.employees, self.team_size);
        for day in 0..days {
            constraints.push(Constraint::Distribution(DistributionConstraint::new(
                day,
                employees,
                days,
                [self.team_size, self.team_size, off],
            )));
        }

        debug!(
            employees,
            days,
            team_size,
            min_shifts,
            states = table.state_count(),
            constraints = constraints.len(),
            "Built constraint model"
        );

        Ok(ConstraintModel::new(
            employees,
            days,
            team_size,
            min_shifts,
            window,
            constraints,
        ))
    }
}

/// Off headcount left once both working shifts are staffed. Overflow maps
/// to `-1`, which no day can meet.
pub(crate) fn off_demand(employees: i64, team_size: i64) -> i64 {
    team_size
        .checked_mul(2)
        .and_then(|working| employees.checked_sub(working))
        .unwrap_or(-1)
}
