//! Named, persisted automata.

use super::Automaton;
use crate::error::Result;

/// Rule-set identifier, assigned by the external repository.
pub type RuleSetId = i64;

/// A named sequencing rule as stored by the rule-set repository.
///
/// The persisted text and the parsed automaton are kept side by side; both
/// constructors guarantee they describe the same automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub id: RuleSetId,
    pub name: String,
    pub is_active: bool,
    rule_set_string: String,
    automaton: Automaton,
}

impl RuleSet {
    /// Builds an active rule set from an automaton, generating its text form.
    pub fn from_automaton(
        id: RuleSetId,
        name: impl Into<String>,
        automaton: Automaton,
    ) -> Result<Self> {
        let rule_set_string = automaton.to_rule_set_string()?;
        Ok(Self {
            id,
            name: name.into(),
            is_active: true,
            rule_set_string,
            automaton,
        })
    }

    /// Builds an active rule set by parsing its persisted text.
    pub fn from_rule_set_string(
        id: RuleSetId,
        name: impl Into<String>,
        rule_set_string: impl Into<String>,
    ) -> Result<Self> {
        let rule_set_string = rule_set_string.into();
        let automaton = Automaton::from_rule_set_string(&rule_set_string)?;
        Ok(Self {
            id,
            name: name.into(),
            is_active: true,
            rule_set_string,
            automaton,
        })
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn rule_set_string(&self) -> &str {
        &self.rule_set_string
    }
}
