//! Configuration system for rota.
//!
//! Load solver configuration from TOML or YAML files to control the time
//! budget, solution cap, seeding and search heuristics without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use rota_config::{SolverConfig, ValueSelection};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     environment_mode = "reproducible"
//!     random_seed = 7
//!     value_selection = "ascending"
//!
//!     [termination]
//!     millis_spent_limit = 250
//!     solution_count_limit = 3
//! "#).unwrap();
//!
//! assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
//! assert_eq!(config.solution_limit(), 3);
//! assert_eq!(config.value_selection, ValueSelection::Ascending);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use rota_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Time budget applied when no limit is configured.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(1000);

/// Solution cap applied when no limit is configured.
pub const DEFAULT_SOLUTION_LIMIT: usize = 5;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting reproducibility.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,

    /// Which unbound cell the search branches on next.
    #[serde(default)]
    pub variable_selection: VariableSelection,

    /// In which order a cell's remaining values are tried.
    #[serde(default)]
    pub value_selection: ValueSelection,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects limits that would stop the search before it starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(termination) = &self.termination {
            if termination.solution_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "solution_count_limit must be at least 1".to_string(),
                ));
            }
            if termination.branch_count_limit == Some(0) {
                return Err(ConfigError::Invalid(
                    "branch_count_limit must be at least 1".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the termination time limit in milliseconds.
    pub fn with_time_limit_millis(mut self, millis: u64) -> Self {
        self.termination = Some(TerminationConfig {
            millis_spent_limit: Some(millis),
            seconds_spent_limit: None,
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination time limit in seconds.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            millis_spent_limit: None,
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the solution cap.
    pub fn with_solution_limit(mut self, limit: usize) -> Self {
        self.termination = Some(TerminationConfig {
            solution_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    pub fn with_variable_selection(mut self, selection: VariableSelection) -> Self {
        self.variable_selection = selection;
        self
    }

    pub fn with_value_selection(mut self, selection: ValueSelection) -> Self {
        self.value_selection = selection;
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Time limit, falling back to [`DEFAULT_TIME_LIMIT`].
    pub fn effective_time_limit(&self) -> Duration {
        self.time_limit().unwrap_or(DEFAULT_TIME_LIMIT)
    }

    /// Solution cap, falling back to [`DEFAULT_SOLUTION_LIMIT`].
    pub fn solution_limit(&self) -> usize {
        self.termination
            .as_ref()
            .and_then(|t| t.solution_count_limit)
            .unwrap_or(DEFAULT_SOLUTION_LIMIT)
    }

    /// Branch cap, if configured.
    pub fn branch_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.branch_count_limit)
    }

    /// Seed fixed by this configuration.
    ///
    /// An explicit `random_seed` always wins. Reproducible mode without one
    /// uses seed 0. `None` means the caller should derive a fresh seed.
    pub fn fixed_seed(&self) -> Option<u64> {
        match (self.random_seed, self.environment_mode) {
            (Some(seed), _) => Some(seed),
            (None, EnvironmentMode::Reproducible) => Some(0),
            (None, EnvironmentMode::NonReproducible) => None,
        }
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Time-seeded search; runs differ.
    #[default]
    NonReproducible,

    /// Deterministic search for a given seed.
    Reproducible,
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum milliseconds to spend solving.
    pub millis_spent_limit: Option<u64>,

    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Stop after this many solutions.
    pub solution_count_limit: Option<usize>,

    /// Stop after this many branches.
    pub branch_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_mul(1000)
            .saturating_add(self.millis_spent_limit.unwrap_or(0));
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }
}

/// Variable (cell) selection heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableSelection {
    /// Smallest remaining domain first; ties go to the lowest cell index.
    #[default]
    MostConstrained,

    /// Row-major grid order.
    InputOrder,
}

/// Value ordering heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSelection {
    /// Seeded random order.
    #[default]
    Random,

    /// Day, Night, Off.
    Ascending,
}
