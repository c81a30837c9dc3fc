//! Depth-first backtracking search with propagation.

use rota_config::{ValueSelection, VariableSelection};
use rota_core::ShiftType;
use tracing::trace;

use crate::grid::{AssignmentGrid, GridDomains};
use crate::heuristic::{select_cell, value_stack};
use crate::model::ConstraintModel;
use crate::propagation::{propagate, propagate_all};
use crate::scope::SearchScope;
use crate::termination::Termination;

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEnd {
    /// The whole search tree was explored.
    Exhausted,
    /// A termination condition stopped the run early.
    Terminated,
}

/// A choice point: the domains before the decision, the cell decided and
/// the values not yet tried there.
struct Frame {
    domains: GridDomains,
    cell: usize,
    untried: Vec<ShiftType>,
}

/// Searches `model` for complete assignments, handing each to
/// `on_solution` in discovery order.
///
/// Each decision binds one cell to one value and propagates. Sibling
/// decisions bind the same cell to different values, so no assignment is
/// ever produced twice.
pub fn backtrack<T, F>(
    model: &ConstraintModel,
    termination: &T,
    scope: &mut SearchScope,
    variable_selection: VariableSelection,
    value_selection: ValueSelection,
    mut on_solution: F,
) -> SearchEnd
where
    T: Termination + ?Sized,
    F: FnMut(AssignmentGrid),
{
    let mut root = model.initial_domains();
    match propagate_all(model, &mut root) {
        Ok(runs) => scope.stats_mut().record_propagations(runs),
        Err(_) => {
            scope.stats_mut().record_failure();
            trace!("Root propagation failed");
            return SearchEnd::Exhausted;
        }
    }

    let mut stack: Vec<Frame> = Vec::new();
    let mut current = Some(root);

    loop {
        if scope.is_terminate_early() || termination.is_terminated(scope) {
            return SearchEnd::Terminated;
        }

        if let Some(domains) = current.take() {
            match select_cell(&domains, variable_selection) {
                Some(cell) => {
                    let untried = value_stack(domains.get(cell), value_selection, scope.rng());
                    stack.push(Frame {
                        domains,
                        cell,
                        untried,
                    });
                }
                None => match domains.to_grid() {
                    Some(grid) => {
                        scope.stats_mut().record_solution();
                        on_solution(grid);
                    }
                    None => scope.stats_mut().record_failure(),
                },
            }
            continue;
        }

        let Some(frame) = stack.last_mut() else {
            return SearchEnd::Exhausted;
        };
        let Some(value) = frame.untried.pop() else {
            stack.pop();
            continue;
        };

        let cell = frame.cell;
        let mut next = frame.domains.clone();
        scope.stats_mut().record_branch();
        let outcome = next
            .assign(cell, value)
            .and_then(|_| propagate(model, &mut next, model.watchers(cell).iter().copied()));
        match outcome {
            Ok(runs) => {
                scope.stats_mut().record_propagations(runs);
                current = Some(next);
            }
            Err(_) => {
                scope.stats_mut().record_failure();
                trace!(cell, value = %value, "Branch refuted");
            }
        }
    }
}
