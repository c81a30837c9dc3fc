//! Rota Core - Core types and traits for shift roster generation
//!
//! This crate provides the fundamental abstractions for rota:
//! - Shift kinds and the automaton that sequences them per employee
//! - Employee and rule-set entities owned by the external repositories
//! - Schedule and shift records produced by the materializer
//! - Repository traits the scheduling service reads from
//! - The shared error type

pub mod domain;
pub mod error;
pub mod repository;

pub use domain::{
    Automaton, Employee, EmployeeId, RuleSet, RuleSetId, Schedule, Shift, ShiftType, ShiftWindow,
    State,
};
pub use error::{Result, RotaError};
pub use repository::{EmployeeRepository, RuleSetRepository};
