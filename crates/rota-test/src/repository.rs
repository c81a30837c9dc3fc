//! In-memory repository implementations.

use rota_core::{Employee, EmployeeRepository, Result, RuleSet, RuleSetId, RuleSetRepository};

use crate::employees::demo_employees;
use crate::rule_sets::demo_rule_sets;

/// Employee repository over a fixed list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeRepository {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// The thirty demo employees.
    pub fn demo() -> Self {
        Self::new(demo_employees())
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn active_employees(&self) -> Result<Vec<Employee>> {
        Ok(self
            .employees
            .iter()
            .filter(|e| e.is_active)
            .cloned()
            .collect())
    }
}

/// Rule-set repository over a fixed list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleSetRepository {
    rule_sets: Vec<RuleSet>,
}

impl InMemoryRuleSetRepository {
    pub fn new(rule_sets: Vec<RuleSet>) -> Self {
        Self { rule_sets }
    }

    /// The built-in demo rule sets.
    pub fn demo() -> Self {
        Self::new(demo_rule_sets())
    }
}

impl RuleSetRepository for InMemoryRuleSetRepository {
    async fn find_active(&self, id: RuleSetId) -> Result<Option<RuleSet>> {
        Ok(self
            .rule_sets
            .iter()
            .find(|r| r.id == id && r.is_active)
            .cloned())
    }

    async fn active_rule_sets(&self) -> Result<Vec<RuleSet>> {
        Ok(self
            .rule_sets
            .iter()
            .filter(|r| r.is_active)
            .cloned()
            .collect())
    }
}
