//! Constraint propagation.
//!
//! Each constraint removes values that cannot appear in any solution of
//! that constraint alone. [`propagate`] runs constraints from a work queue
//! until no domain changes (fixpoint) or some cell runs out of values.

mod count;
mod distribution;
mod sequence;

use std::collections::VecDeque;

use tracing::trace;

use crate::grid::GridDomains;
use crate::model::ConstraintModel;

pub use count::CountConstraint;
pub use distribution::DistributionConstraint;
pub use sequence::SequenceConstraint;

/// A cell lost its last value, or a constraint cannot be met.
///
/// Not an error: the search backtracks on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict;

/// Runs the constraints in `seeds`, and every constraint watching a cell
/// they change, to a fixpoint.
///
/// Returns the number of constraint runs performed.
pub fn propagate(
    model: &ConstraintModel,
    domains: &mut GridDomains,
    seeds: impl IntoIterator<Item = usize>,
) -> Result<u64, Conflict> {
    let constraints = model.constraints();
    let mut queued = vec![false; constraints.len()];
    let mut queue = VecDeque::new();
    for id in seeds {
        if !queued[id] {
            queued[id] = true;
            queue.push_back(id);
        }
    }

    let mut changed = Vec::new();
    let mut runs = 0;
    while let Some(id) = queue.pop_front() {
        queued[id] = false;
        runs += 1;

        changed.clear();
        if let Err(conflict) = constraints[id].propagate(domains, &mut changed) {
            trace!(constraint = %constraints[id], "Propagation conflict");
            return Err(conflict);
        }

        for &cell in &changed {
            for &watcher in model.watchers(cell) {
                if !queued[watcher] {
                    queued[watcher] = true;
                    queue.push_back(watcher);
                }
            }
        }
    }

    Ok(runs)
}

/// Propagates every constraint of the model.
pub fn propagate_all(model: &ConstraintModel, domains: &mut GridDomains) -> Result<u64, Conflict> {
    propagate(model, domains, 0..model.constraints().len())
}
