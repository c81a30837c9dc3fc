//! Branch count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates when a maximum number of branches have been explored.
///
/// # Example
///
/// ```
/// use rota_solver::termination::BranchCountTermination;
///
/// // Give up after 100,000 decisions
/// let termination = BranchCountTermination::new(100_000);
/// ```
#[derive(Debug, Clone)]
pub struct BranchCountTermination {
    limit: u64,
}

impl BranchCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for BranchCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.stats().branches >= self.limit
    }
}
