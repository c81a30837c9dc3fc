//! Constraint model over the assignment grid.
//!
//! One model is built per solve. It holds:
//! - a sequence constraint per employee (row must walk the automaton)
//! - a count constraint per employee (minimum worked shifts)
//! - a distribution constraint per day (exact headcount per shift kind)
//!
//! plus, for every cell, the constraints that watch it.

mod builder;
mod table;

use std::fmt;

use rota_core::ShiftWindow;

use crate::grid::{AssignmentGrid, GridDomains};
use crate::propagation::{
    Conflict, CountConstraint, DistributionConstraint, SequenceConstraint,
};

pub use builder::ModelBuilder;
pub use table::TransitionTable;

/// A constraint over part of the grid.
#[derive(Debug, Clone)]
pub enum Constraint {
    Sequence(SequenceConstraint),
    Count(CountConstraint),
    Distribution(DistributionConstraint),
}

impl Constraint {
    /// Narrows `domains` to values this constraint still supports.
    ///
    /// Every cell whose domain shrank is pushed onto `changed`.
    pub fn propagate(
        &self,
        domains: &mut GridDomains,
        changed: &mut Vec<usize>,
    ) -> Result<(), Conflict> {
        match self {
            Constraint::Sequence(c) => c.propagate(domains, changed),
            Constraint::Count(c) => c.propagate(domains, changed),
            Constraint::Distribution(c) => c.propagate(domains, changed),
        }
    }

    /// Checks a bound grid against this constraint.
    pub fn is_satisfied_by(&self, grid: &AssignmentGrid) -> bool {
        match self {
            Constraint::Sequence(c) => c.is_satisfied_by(grid),
            Constraint::Count(c) => c.is_satisfied_by(grid),
            Constraint::Distribution(c) => c.is_satisfied_by(grid),
        }
    }

    /// Cells this constraint ranges over.
    pub fn scope(&self, employees: usize, days: usize) -> Vec<usize> {
        match self {
            Constraint::Sequence(SequenceConstraint { employee, .. })
            | Constraint::Count(CountConstraint { employee, .. }) => {
                (0..days).map(|d| employee * days + d).collect()
            }
            Constraint::Distribution(DistributionConstraint { day, .. }) => {
                (0..employees).map(|e| e * days + day).collect()
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Sequence(c) => write!(f, "sequence(employee {})", c.employee),
            Constraint::Count(c) => write!(
                f,
                "count(employee {}, min worked {})",
                c.employee, c.min_worked
            ),
            Constraint::Distribution(c) => write!(f, "distribution(day {})", c.day),
        }
    }
}

/// The complete constraint model of one solve.
#[derive(Debug, Clone)]
pub struct ConstraintModel {
    employees: usize,
    days: usize,
    team_size: usize,
    min_shifts_per_cycle: usize,
    window: ShiftWindow,
    constraints: Vec<Constraint>,
    watchers: Vec<Vec<usize>>,
}

impl ConstraintModel {
    pub(crate) fn new(
        employees: usize,
        days: usize,
        team_size: usize,
        min_shifts_per_cycle: usize,
        window: ShiftWindow,
        constraints: Vec<Constraint>,
    ) -> Self {
        let mut watchers = vec![Vec::new(); employees * days];
        for (id, constraint) in constraints.iter().enumerate() {
            for cell in constraint.scope(employees, days) {
                watchers[cell].push(id);
            }
        }

        Self {
            employees,
            days,
            team_size,
            min_shifts_per_cycle,
            window,
            constraints,
            watchers,
        }
    }

    pub fn employees(&self) -> usize {
        self.employees
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn team_size(&self) -> usize {
        self.team_size
    }

    pub fn min_shifts_per_cycle(&self) -> usize {
        self.min_shifts_per_cycle
    }

    /// Timing of the working shifts, validated with the rest of the model.
    pub fn window(&self) -> ShiftWindow {
        self.window
    }

    /// Required off headcount per day. Negative when the team cannot fit.
    pub fn off_quota(&self) -> i64 {
        match (i64::try_from(self.employees), i64::try_from(self.team_size)) {
            (Ok(employees), Ok(team_size)) => builder::off_demand(employees, team_size),
            _ => -1,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.employees * self.days
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Ids of the constraints ranging over `cell`.
    pub fn watchers(&self, cell: usize) -> &[usize] {
        &self.watchers[cell]
    }

    /// Fresh domains for the start of a search.
    pub fn initial_domains(&self) -> GridDomains {
        GridDomains::full(self.employees, self.days)
    }

    /// Re-verifies every constraint on a bound grid.
    pub fn is_satisfied_by(&self, grid: &AssignmentGrid) -> bool {
        grid.employees() == self.employees
            && grid.days() == self.days
            && self.constraints.iter().all(|c| c.is_satisfied_by(grid))
    }
}
