//! Data-access boundary.
//!
//! The scheduler never owns staff or rule-set storage. A service reads
//! fully materialized values through these traits before a solve starts.

use std::future::Future;

use crate::domain::{Employee, RuleSet, RuleSetId};
use crate::error::Result;

/// Source of the staff roster.
pub trait EmployeeRepository: Send + Sync {
    /// All employees currently marked active.
    fn active_employees(&self) -> impl Future<Output = Result<Vec<Employee>>> + Send;
}

/// Source of persisted rule sets.
pub trait RuleSetRepository: Send + Sync {
    /// The rule set with `id`, if it exists and is active.
    fn find_active(&self, id: RuleSetId) -> impl Future<Output = Result<Option<RuleSet>>> + Send;

    /// All active rule sets.
    fn active_rule_sets(&self) -> impl Future<Output = Result<Vec<RuleSet>>> + Send;
}
