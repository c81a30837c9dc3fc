//! Automaton walk per employee (regular constraint).

use std::sync::Arc;

use rota_core::ShiftType;

use super::Conflict;
use crate::grid::{AssignmentGrid, GridDomains, ShiftDomain};
use crate::model::TransitionTable;

/// An employee's row must walk the automaton from its initial state to an
/// accepting state.
///
/// Propagation unrolls the automaton over the row: a forward pass collects
/// the states reachable before each day, a backward pass the states from
/// which an accepting state is still reachable. A value survives at a day
/// only if it links a forward state to a backward state. One pass leaves
/// every remaining value supported by a full accepted walk.
#[derive(Debug, Clone)]
pub struct SequenceConstraint {
    pub(crate) employee: usize,
    pub(crate) days: usize,
    pub(crate) table: Arc<TransitionTable>,
}

impl SequenceConstraint {
    pub fn new(employee: usize, days: usize, table: Arc<TransitionTable>) -> Self {
        Self {
            employee,
            days,
            table,
        }
    }

    pub fn employee(&self) -> usize {
        self.employee
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    pub(crate) fn propagate(
        &self,
        domains: &mut GridDomains,
        changed: &mut Vec<usize>,
    ) -> Result<(), Conflict> {
        let table = &*self.table;
        let states = table.state_count();
        let row = domains.row(self.employee);
        let days = row.len();

        // forward[d][s]: s reachable from the initial state after d days
        let mut forward = vec![vec![false; states]; days + 1];
        forward[0][table.initial()] = true;
        for (day, domain) in row.iter().enumerate() {
            for state in 0..states {
                if !forward[day][state] {
                    continue;
                }
                for shift in domain.iter() {
                    if let Some(to) = table.next(state, shift) {
                        forward[day + 1][to] = true;
                    }
                }
            }
        }

        // backward[d][s]: s reachable after d days and still able to accept
        let mut backward = vec![vec![false; states]; days + 1];
        for state in 0..states {
            backward[days][state] = forward[days][state] && table.is_accepting(state);
        }
        if !backward[days].iter().any(|&b| b) {
            return Err(Conflict);
        }

        let mut supported = vec![ShiftDomain::EMPTY; days];
        for day in (0..days).rev() {
            for state in 0..states {
                if !forward[day][state] {
                    continue;
                }
                for shift in row[day].iter() {
                    if table
                        .next(state, shift)
                        .is_some_and(|to| backward[day + 1][to])
                    {
                        backward[day][state] = true;
                        supported[day] = supported[day].with(shift);
                    }
                }
            }
        }

        let first = self.employee * self.days;
        for (day, domain) in supported.into_iter().enumerate() {
            if domains.restrict(first + day, domain)? {
                changed.push(first + day);
            }
        }
        Ok(())
    }

    pub(crate) fn is_satisfied_by(&self, grid: &AssignmentGrid) -> bool {
        self.table.accepts_row(grid.row(self.employee))
    }

    /// Whether `row` is an accepted walk.
    pub fn accepts(&self, row: &[ShiftType]) -> bool {
        self.table.accepts_row(row)
    }
}
