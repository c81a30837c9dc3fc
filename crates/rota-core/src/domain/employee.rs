//! Staff members.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Employee identifier, assigned by the external repository.
pub type EmployeeId = i64;

/// A staff member who can be placed on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub family_name: String,
    pub is_active: bool,
}

impl Employee {
    /// Creates an active employee.
    pub fn new(id: EmployeeId, name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            family_name: family_name.into(),
            is_active: true,
        }
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// `"{name} {family_name}"`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.family_name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.family_name)
    }
}
