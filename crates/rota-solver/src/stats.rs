//! Search statistics.

use std::time::{Duration, Instant};

/// Counters for one search run.
///
/// # Example
///
/// ```
/// use rota_solver::stats::SearchStats;
///
/// let mut stats = SearchStats::default();
/// stats.start();
/// stats.record_branch();
/// stats.record_branch();
/// stats.record_failure();
/// stats.record_solution();
///
/// assert_eq!(stats.branches, 2);
/// assert_eq!(stats.failures, 1);
/// assert_eq!(stats.solutions, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    start_time: Option<Instant>,
    wall_time: Option<Duration>,
    /// Decisions taken (one value tried on one cell).
    pub branches: u64,
    /// Decisions, and the root, that propagation refuted.
    pub failures: u64,
    /// Complete satisfying assignments found.
    pub solutions: u64,
    /// Individual constraint propagator runs.
    pub propagations: u64,
}

impl SearchStats {
    /// Marks the start of searching.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.wall_time = None;
    }

    /// Freezes the wall time.
    pub fn finish(&mut self) {
        self.wall_time = Some(self.elapsed());
    }

    /// Time spent searching; frozen once [`finish`](Self::finish) is called.
    pub fn elapsed(&self) -> Duration {
        match self.wall_time {
            Some(wall_time) => wall_time,
            None => self.start_time.map(|t| t.elapsed()).unwrap_or_default(),
        }
    }

    pub fn record_branch(&mut self) {
        self.branches += 1;
    }

    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub fn record_solution(&mut self) {
        self.solutions += 1;
    }

    pub fn record_propagations(&mut self, runs: u64) {
        self.propagations += runs;
    }

    /// Returns the branches per second rate.
    pub fn branches_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.branches as f64 / secs
        } else {
            0.0
        }
    }

    /// Fraction of branches that failed.
    pub fn failure_rate(&self) -> f64 {
        if self.branches == 0 {
            0.0
        } else {
            self.failures as f64 / self.branches as f64
        }
    }
}
