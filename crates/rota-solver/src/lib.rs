//! Rota Solver Engine
//!
//! This crate provides the constraint engine behind roster generation:
//! - Assignment grid and per-cell shift domains
//! - Constraint model builder (sequence, count and distribution constraints)
//! - Propagation to a fixpoint after every decision
//! - Randomized backtracking search with composable terminations
//! - Search statistics
//!
//! # Example
//!
//! ```
//! use rota_core::{Automaton, ShiftType};
//! use rota_solver::{ModelBuilder, Solver};
//! use rota_solver::termination::SolutionCountTermination;
//!
//! // Anything goes, as long as the row ends in the initial state.
//! let automaton = Automaton::new(
//!     0,
//!     [0],
//!     ShiftType::ALL.map(|s| (0, s, 0)),
//! ).unwrap();
//!
//! let model = ModelBuilder::new()
//!     .automaton(Some(&automaton))
//!     .employees(3)
//!     .days(2)
//!     .team_size(1)
//!     .build()
//!     .unwrap();
//!
//! let solver = Solver::new().with_termination(SolutionCountTermination::new(4));
//! let result = solver.solve(&model);
//!
//! assert_eq!(result.solutions.len(), 4);
//! assert!(result.solutions.iter().all(|grid| model.is_satisfied_by(grid)));
//! ```

pub mod builder;
pub mod grid;
pub mod heuristic;
pub mod model;
pub mod propagation;
pub mod scope;
pub mod search;
pub mod solver;
pub mod stats;
pub mod termination;

pub use builder::{configured_termination, ConfiguredTermination};
pub use grid::{AssignmentGrid, GridDomains, ShiftDomain};
pub use model::{Constraint, ConstraintModel, ModelBuilder, TransitionTable};
pub use propagation::Conflict;
pub use scope::SearchScope;
pub use solver::{NoTermination, SolveResult, SolveStatus, Solver};
pub use stats::SearchStats;
pub use termination::Termination;
