//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};

use super::Termination;
use crate::scope::SearchScope;

/// Terminates when an external flag is set.
///
/// Allows external code to request termination by setting an `AtomicBool`.
///
/// # Example
///
/// ```
/// use std::sync::atomic::AtomicBool;
/// use rota_solver::termination::ExternalTermination;
///
/// let flag = AtomicBool::new(false);
/// let term = ExternalTermination::new(&flag);
///
/// // Later: flag.store(true, Ordering::SeqCst);
/// ```
#[derive(Debug)]
pub struct ExternalTermination<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ExternalTermination<'a> {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: &'a AtomicBool) -> Self {
        Self { flag }
    }
}

impl Termination for ExternalTermination<'_> {
    fn is_terminated(&self, _scope: &SearchScope) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
