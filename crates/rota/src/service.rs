//! Scheduling service over the repository boundary.

use std::sync::Arc;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rota_core::{EmployeeRepository, Result, RotaError, RuleSetRepository};
use tracing::debug;

use crate::dto::{RuleSetDto, ScheduleDto, ScheduleRequest, ScheduleResponse};
use crate::scheduler::{ShiftScheduler, DEFAULT_MAX_SOLUTIONS};

/// Draws staff and a rule set from storage, solves, and presents one of
/// the schedules found.
///
/// # Type Parameters
/// * `E` - Employee repository
/// * `R` - Rule-set repository
pub struct SchedulerService<E, R> {
    employees: E,
    rule_sets: R,
    scheduler: ShiftScheduler,
    rng: Mutex<StdRng>,
}

impl<E, R> SchedulerService<E, R>
where
    E: EmployeeRepository,
    R: RuleSetRepository,
{
    /// Service whose staff draw and schedule pick are seeded from the OS.
    pub fn new(employees: E, rule_sets: R) -> Self {
        Self::with_rng(employees, rule_sets, StdRng::from_os_rng())
    }

    /// Service with reproducible staff draws and schedule picks.
    pub fn with_seed(employees: E, rule_sets: R, seed: u64) -> Self {
        Self::with_rng(employees, rule_sets, StdRng::seed_from_u64(seed))
    }

    fn with_rng(employees: E, rule_sets: R, rng: StdRng) -> Self {
        Self {
            employees,
            rule_sets,
            scheduler: ShiftScheduler::new(),
            rng: Mutex::new(rng),
        }
    }

    /// Replaces the scheduler, e.g. to change the time budget.
    pub fn with_scheduler(mut self, scheduler: ShiftScheduler) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Builds a roster for `request` from a random draw of active staff.
    ///
    /// Up to five schedules are searched for and one of them is returned
    /// at random. When none is found the response carries the diagnostics
    /// and the no-solution message instead.
    pub async fn create_schedule(&self, request: &ScheduleRequest) -> Result<ScheduleResponse> {
        let mut staff = self.employees.active_employees().await?;
        let rule_set = self.rule_sets.find_active(request.rule_set_id).await?;

        let wanted = usize::try_from(request.employee_count).ok();
        let Some(wanted) = wanted.filter(|&n| n <= staff.len()) else {
            return Err(RotaError::out_of_range(
                "employee_count",
                "Invalid number of employees for scheduling.",
            ));
        };
        let Some(rule_set) = rule_set else {
            return Err(RotaError::NotFound(format!(
                "active rule set {}",
                request.rule_set_id
            )));
        };

        staff.shuffle(&mut *self.rng.lock());
        staff.truncate(wanted);
        let staff: Vec<_> = staff.into_iter().map(Arc::new).collect();
        debug!(
            rule_set = %rule_set.name,
            employees = staff.len(),
            "Drew staff for schedule request"
        );

        let automaton = rule_set.automaton().clone();
        let params = request.parameters(DEFAULT_MAX_SOLUTIONS);
        let scheduler = self.scheduler.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            scheduler.create_schedules(Some(&automaton), &staff, &params)
        })
        .await
        .map_err(|e| RotaError::Internal(format!("scheduler task failed: {}", e)))??;

        let schedule = if outcome.schedules.is_empty() {
            None
        } else {
            let pick = self.rng.lock().random_range(0..outcome.schedules.len());
            Some(ScheduleDto::from_schedule(
                &outcome.schedules[pick],
                outcome.diagnostics.clone(),
            ))
        };

        Ok(ScheduleResponse {
            schedule,
            statistics: outcome.diagnostics,
            error: outcome.error,
        })
    }

    /// All rule sets a request may name.
    pub async fn active_rule_sets(&self) -> Result<Vec<RuleSetDto>> {
        let rule_sets = self.rule_sets.active_rule_sets().await?;
        Ok(rule_sets.iter().map(RuleSetDto::from).collect())
    }
}

#[cfg(test)]
mod tests;
