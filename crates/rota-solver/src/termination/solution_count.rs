//! Solution count termination.

use super::Termination;
use crate::scope::SearchScope;

/// Terminates once `limit` solutions have been found.
///
/// This is the solution cap of a solve.
#[derive(Debug, Clone)]
pub struct SolutionCountTermination {
    limit: u64,
}

impl SolutionCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Termination for SolutionCountTermination {
    fn is_terminated(&self, scope: &SearchScope) -> bool {
        scope.stats().solutions >= self.limit
    }
}
