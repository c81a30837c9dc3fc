//! Rota - Rotating Staff Shift Rosters
//!
//! Builds rosters in which every employee follows a sequencing rule set and
//! every day is staffed with a fixed number of day and night workers.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use rota::prelude::*;
//!
//! // Any sequence of shifts is allowed.
//! let automaton = Automaton::new(1, [1], ShiftType::ALL.map(|s| (1, s, 1))).unwrap();
//! let staff: Vec<Arc<Employee>> = (1..=4)
//!     .map(|i| Arc::new(Employee::new(i, "Employee", i.to_string())))
//!     .collect();
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let params = ScheduleParameters::new(start, 7, 1).with_max_solutions(2);
//!
//! let outcome = ShiftScheduler::new()
//!     .create_schedules(Some(&automaton), &staff, &params)
//!     .unwrap();
//!
//! assert_eq!(outcome.schedules.len(), 2);
//! assert_eq!(outcome.schedules[0].shifts.len(), 4 * 7);
//! ```

pub mod diagnostics;
pub mod dto;
pub mod materialize;
pub mod scheduler;
pub mod service;

pub use diagnostics::{Diagnostics, NO_SOLUTION_MESSAGE};
pub use dto::{RuleSetDto, ScheduleDto, ScheduleRequest, ScheduleResponse, ShiftDto};
pub use materialize::Materializer;
pub use scheduler::{ScheduleOutcome, ScheduleParameters, ShiftScheduler, DEFAULT_MAX_SOLUTIONS};
pub use service::SchedulerService;

pub use rota_config::SolverConfig;
pub use rota_core::{
    Automaton, Employee, EmployeeRepository, Result, RotaError, RuleSet, RuleSetRepository,
    Schedule, Shift, ShiftType, ShiftWindow,
};
pub use rota_solver::SearchStats;

/// Colorful console output, enabled with the `console` feature.
#[cfg(feature = "console")]
pub use rota_console as console;

pub mod prelude {
    pub use super::{
        Automaton, Employee, RotaError, Schedule, ScheduleOutcome, ScheduleParameters,
        SchedulerService, Shift, ShiftScheduler, ShiftType, SolverConfig,
    };
}
