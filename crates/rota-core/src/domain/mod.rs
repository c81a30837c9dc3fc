//! Domain model for shift rosters
//!
//! - `ShiftType`: the three legal symbols of a roster cell
//! - `Automaton`: per-employee sequencing rule over shift symbols
//! - `RuleSet`: a named, persisted automaton
//! - `Employee`: a staff member, owned by the external repository
//! - `Schedule` / `Shift`: materialized output of one solution
//! - `ShiftWindow`: start hour and length of the working shifts

mod automaton;
mod employee;
mod rule_set;
mod schedule;
mod shift;
mod window;

pub use automaton::{Automaton, State};
pub use employee::{Employee, EmployeeId};
pub use rule_set::{RuleSet, RuleSetId};
pub use schedule::{Schedule, Shift};
pub use shift::ShiftType;
pub use window::ShiftWindow;

#[cfg(test)]
mod tests;
