//! Search-level scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::stats::SearchStats;

/// State of one search run: random source, clock, counters and the
/// early-termination flag.
///
/// Each solve owns its own scope, so concurrent solves share nothing.
pub struct SearchScope {
    rng: StdRng,
    seed: u64,
    start_time: Option<Instant>,
    stats: SearchStats,
    terminate_early_flag: Option<Arc<AtomicBool>>,
}

impl SearchScope {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            start_time: None,
            stats: SearchStats::default(),
            terminate_early_flag: None,
        }
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.stats.start();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    pub fn set_terminate_early_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate_early_flag = Some(flag);
    }

    pub fn is_terminate_early(&self) -> bool {
        self.terminate_early_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Ends the run, freezing the wall time.
    pub fn finish(mut self) -> SearchStats {
        self.stats.finish();
        self.stats
    }
}

impl std::fmt::Debug for SearchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchScope")
            .field("seed", &self.seed)
            .field("stats", &self.stats)
            .finish()
    }
}
