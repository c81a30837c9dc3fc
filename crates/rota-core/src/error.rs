//! Error types for rota

use thiserror::Error;

/// Main error type for rota operations.
///
/// Every variant is a structural failure: the caller supplied something
/// malformed. A well-formed problem that has no solution is not an error
/// and is reported through the scheduler outcome instead.
#[derive(Debug, Error)]
pub enum RotaError {
    /// No rule set (automaton) was supplied
    #[error("Rule set is empty.")]
    MissingRuleSet,

    /// A solve parameter is outside its accepted range
    #[error("Parameter `{parameter}` out of range: {message}")]
    OutOfRange {
        parameter: &'static str,
        message: String,
    },

    /// The persisted rule-set text could not be parsed
    #[error("Rule set parse error: {0}")]
    RuleSetParse(String),

    /// The rule-set text parsed but does not describe a valid automaton
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(String),

    /// A referenced entity does not exist or is inactive
    #[error("Not found: {0}")]
    NotFound(String),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RotaError {
    /// Creates an [`RotaError::OutOfRange`] for the named parameter.
    pub fn out_of_range(parameter: &'static str, message: impl Into<String>) -> Self {
        RotaError::OutOfRange {
            parameter,
            message: message.into(),
        }
    }

    /// Name of the offending parameter, for range errors.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            RotaError::OutOfRange { parameter, .. } => Some(parameter),
            RotaError::MissingRuleSet => Some("rule_set"),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RotaError {
    fn from(err: serde_json::Error) -> Self {
        RotaError::RuleSetParse(err.to_string())
    }
}

/// Result type alias for rota operations
pub type Result<T> = std::result::Result<T, RotaError>;
