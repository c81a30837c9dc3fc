//! Solver implementation.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rota_config::SolverConfig;
use tracing::info;

use crate::grid::AssignmentGrid;
use crate::model::ConstraintModel;
use crate::scope::SearchScope;
use crate::search::{backtrack, SearchEnd};
use crate::stats::SearchStats;
use crate::termination::Termination;

/// Callback invoked with every solution as it is found.
pub type SolutionCallback = Box<dyn Fn(&AssignmentGrid) + Send + Sync>;

/// Terminal state of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// At least one solution was found.
    Solved(usize),
    /// No solution was found, either because none exists or because the
    /// budget ran out first.
    Exhausted,
}

/// Everything a solve produced.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Bound grids in discovery order.
    pub solutions: Vec<AssignmentGrid>,
    pub stats: SearchStats,
    /// Whether a termination stopped the search before the tree was
    /// fully explored.
    pub terminated: bool,
    /// Seed of the random source, for replaying the run.
    pub seed: u64,
}

impl SolveResult {
    pub fn status(&self) -> SolveStatus {
        if self.solutions.is_empty() {
            SolveStatus::Exhausted
        } else {
            SolveStatus::Solved(self.solutions.len())
        }
    }
}

/// Randomized backtracking solver over a [`ConstraintModel`].
///
/// # Type Parameters
/// * `T` - Termination condition
///
/// # Example
///
/// ```
/// use rota_core::{Automaton, ShiftType};
/// use rota_solver::{ModelBuilder, SolveStatus, Solver};
/// use rota_solver::termination::TimeTermination;
///
/// let automaton = Automaton::new(1, [1], ShiftType::ALL.map(|s| (1, s, 1))).unwrap();
/// let model = ModelBuilder::new()
///     .automaton(Some(&automaton))
///     .employees(3)
///     .days(2)
///     .team_size(2) // needs four staff per day
///     .build()
///     .unwrap();
///
/// let result = Solver::new()
///     .with_termination(TimeTermination::seconds(1))
///     .solve(&model);
///
/// assert_eq!(result.status(), SolveStatus::Exhausted);
/// assert!(!result.terminated);
/// ```
pub struct Solver<T> {
    termination: T,
    config: SolverConfig,
    terminate_early_flag: Arc<AtomicBool>,
    solving: Arc<AtomicBool>,
    solution_callback: Option<SolutionCallback>,
}

impl<T: Debug> Debug for Solver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("termination", &self.termination)
            .field("config", &self.config)
            .finish()
    }
}

impl Solver<NoTermination> {
    /// Creates a solver that searches until the tree is exhausted.
    pub fn new() -> Self {
        Solver {
            termination: NoTermination,
            config: SolverConfig::default(),
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            solving: Arc::new(AtomicBool::new(false)),
            solution_callback: None,
        }
    }
}

impl Default for Solver<NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Solver<T> {
    /// Sets the termination condition.
    pub fn with_termination<U>(self, termination: U) -> Solver<U> {
        Solver {
            termination,
            config: self.config,
            terminate_early_flag: self.terminate_early_flag,
            solving: self.solving,
            solution_callback: self.solution_callback,
        }
    }

    /// Sets configuration (seed and heuristics).
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets a callback invoked with every solution as it is found.
    pub fn with_solution_callback(mut self, callback: SolutionCallback) -> Self {
        self.solution_callback = Some(callback);
        self
    }

    /// Requests early termination of the solving process.
    ///
    /// This method is thread-safe and can be called from another thread.
    pub fn terminate_early(&self) -> bool {
        if self.solving.load(Ordering::SeqCst) {
            self.terminate_early_flag.store(true, Ordering::SeqCst);
            true
        } else {
            false
        }
    }

    /// Returns true if the solver is currently solving.
    pub fn is_solving(&self) -> bool {
        self.solving.load(Ordering::SeqCst)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn termination(&self) -> &T {
        &self.termination
    }
}

impl<T: Termination> Solver<T> {
    /// Searches `model` and returns every solution found before the
    /// termination fired or the tree ran out.
    pub fn solve(&self, model: &ConstraintModel) -> SolveResult {
        self.terminate_early_flag.store(false, Ordering::SeqCst);
        self.solving.store(true, Ordering::SeqCst);

        let seed = self.config.fixed_seed().unwrap_or_else(time_seed);
        let mut scope = SearchScope::with_seed(seed);
        scope.set_terminate_early_flag(self.terminate_early_flag.clone());

        info!(
            event = "solve_start",
            employees = model.employees(),
            days = model.days(),
            team_size = model.team_size(),
            constraints = model.constraints().len(),
            seed,
        );

        scope.start_solving();
        let mut solutions = Vec::new();
        let end = backtrack(
            model,
            &self.termination,
            &mut scope,
            self.config.variable_selection,
            self.config.value_selection,
            |grid| {
                debug_assert!(model.is_satisfied_by(&grid));
                info!(
                    event = "solution_found",
                    solution = solutions.len() + 1,
                );
                if let Some(callback) = &self.solution_callback {
                    callback(&grid);
                }
                solutions.push(grid);
            },
        );
        let stats = scope.finish();
        let terminated = end == SearchEnd::Terminated;

        info!(
            event = "solve_end",
            solutions = solutions.len(),
            branches = stats.branches,
            failures = stats.failures,
            duration_ms = stats.elapsed().as_millis() as u64,
            terminated,
        );

        self.solving.store(false, Ordering::SeqCst);
        SolveResult {
            solutions,
            stats,
            terminated,
            seed,
        }
    }
}

/// Marker type indicating no termination.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl Termination for NoTermination {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        false
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
