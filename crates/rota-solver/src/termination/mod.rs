//! Termination conditions for the search.
//!
//! Checked before every branch, so a time budget overshoots by at most one
//! propagation pass.

mod branch_count;
mod composite;
mod external;
mod solution_count;
mod time;

use std::fmt::Debug;

use crate::scope::SearchScope;

pub use branch_count::BranchCountTermination;
pub use composite::{AndTermination, OrTermination};
pub use external::ExternalTermination;
pub use solution_count::SolutionCountTermination;
pub use time::TimeTermination;

/// Trait for determining when to stop searching.
pub trait Termination: Send + Debug {
    /// Returns true if the search should stop.
    fn is_terminated(&self, scope: &SearchScope) -> bool;
}

/// An absent termination never fires.
impl<T: Termination> Termination for Option<T> {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        self.as_ref().is_some_and(|t| t.is_terminated(scope))
    }
}
