//! Builds solvers from configuration.

use rota_config::SolverConfig;
use tracing::debug;

use crate::solver::Solver;
use crate::termination::{
    BranchCountTermination, OrTermination, SolutionCountTermination, TimeTermination,
};

/// Termination assembled from a [`SolverConfig`]: time budget, solution
/// cap and optional branch cap, whichever fires first.
pub type ConfiguredTermination = OrTermination<(
    TimeTermination,
    SolutionCountTermination,
    Option<BranchCountTermination>,
)>;

impl Solver<ConfiguredTermination> {
    /// Creates a solver whose limits and heuristics come from `config`.
    ///
    /// Unset limits fall back to a one second budget and a cap of five
    /// solutions.
    ///
    /// ```
    /// use std::time::Duration;
    /// use rota_config::SolverConfig;
    /// use rota_solver::Solver;
    ///
    /// let solver = Solver::from_config(SolverConfig::new().with_solution_limit(3));
    /// let (time, cap, branches) = &solver.termination().0;
    /// assert_eq!(time.limit(), Duration::from_secs(1));
    /// assert_eq!(cap.limit(), 3);
    /// assert!(branches.is_none());
    /// ```
    pub fn from_config(config: SolverConfig) -> Self {
        let termination = configured_termination(&config);
        Solver::new()
            .with_config(config)
            .with_termination(termination)
    }
}

/// The limits of `config` as a termination, for callers that combine it
/// with their own conditions.
pub fn configured_termination(config: &SolverConfig) -> ConfiguredTermination {
    let time_limit = config.effective_time_limit();
    let solution_limit = config.solution_limit();
    if config.time_limit().is_none() {
        debug!(?time_limit, "No time limit configured, using default");
    }

    OrTermination((
        TimeTermination::new(time_limit),
        SolutionCountTermination::new(solution_limit as u64),
        config.branch_limit().map(BranchCountTermination::new),
    ))
}
