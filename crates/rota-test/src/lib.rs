//! Shared test fixtures for rota crates.
//!
//! This crate provides demo data, in-memory repositories and schedule
//! checks. It depends only on `rota-core`, so every other crate can use it.
//!
//! - [`employees`] - demo staff roster
//! - [`rule_sets`] - built-in sequencing rules
//! - [`repository`] - in-memory repository implementations
//! - [`checks`] - invariant checks for materialized schedules
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! rota-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use rota_test::rule_sets::two_shifts_two_days_off;
//! use rota_test::employees::staff;
//! ```

pub mod checks;
pub mod employees;
pub mod repository;
pub mod rule_sets;

// Re-export commonly used items at crate root for convenience
pub use checks::schedule_violations;
pub use employees::{demo_employees, staff};
pub use repository::{InMemoryEmployeeRepository, InMemoryRuleSetRepository};
pub use rule_sets::{two_shifts_two_days_off, unrestricted};
