//! Roster generation entry point.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::Mutex;
use rota_config::SolverConfig;
use rota_core::{Automaton, Employee, Result, RotaError, Schedule};
use rota_solver::termination::{ExternalTermination, OrTermination};
use rota_solver::{configured_termination, AssignmentGrid, ModelBuilder, SearchStats, Solver};
use tokio::sync::mpsc;
use tracing::info;

use crate::diagnostics::{Diagnostics, NO_SOLUTION_MESSAGE};
use crate::materialize::Materializer;

/// Solution cap used when none is requested.
pub const DEFAULT_MAX_SOLUTIONS: i64 = 5;

/// Shape of the requested roster.
///
/// Values are kept as signed integers so out-of-range input is reported as
/// a range error naming the parameter instead of failing to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleParameters {
    /// First day of the cycle.
    pub start_date: NaiveDate,
    pub days: i64,
    /// Headcount of each of the day and night shifts, every day.
    pub team_size: i64,
    pub min_shifts_per_cycle: i64,
    /// Hour the day shift starts, 0 to 12.
    pub start_hour: i64,
    /// Length of a working shift, 1 to 12.
    pub shift_hours: i64,
    pub max_solutions: i64,
}

impl ScheduleParameters {
    /// Parameters with no minimum workload, a 07:00 start, twelve hour
    /// shifts and the default solution cap.
    pub fn new(start_date: NaiveDate, days: i64, team_size: i64) -> Self {
        Self {
            start_date,
            days,
            team_size,
            min_shifts_per_cycle: 0,
            start_hour: 7,
            shift_hours: 12,
            max_solutions: DEFAULT_MAX_SOLUTIONS,
        }
    }

    pub fn with_min_shifts_per_cycle(mut self, min_shifts: i64) -> Self {
        self.min_shifts_per_cycle = min_shifts;
        self
    }

    pub fn with_shift_window(mut self, start_hour: i64, shift_hours: i64) -> Self {
        self.start_hour = start_hour;
        self.shift_hours = shift_hours;
        self
    }

    pub fn with_max_solutions(mut self, max_solutions: i64) -> Self {
        self.max_solutions = max_solutions;
        self
    }
}

/// Result of a well-formed scheduling request.
///
/// An empty `schedules` list is not an error: the problem was valid but had
/// no solution within the budget, and `error` says so.
#[derive(Debug, Clone)]
pub struct ScheduleOutcome {
    /// Schedules in discovery order, ids starting at 1.
    pub schedules: Vec<Schedule>,
    pub diagnostics: String,
    pub error: Option<String>,
    pub stats: SearchStats,
    /// Seed the search ran with.
    pub seed: u64,
    /// Whether a limit stopped the search early.
    pub terminated: bool,
}

impl ScheduleOutcome {
    pub fn is_solved(&self) -> bool {
        !self.schedules.is_empty()
    }
}

/// Creates rosters for a staff list under one rule set.
///
/// Holds no state between calls; concurrent calls are independent.
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    config: SolverConfig,
}

impl ShiftScheduler {
    /// Scheduler with the default one second budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler with time budget, seed and heuristics taken from `config`.
    ///
    /// The solution cap always comes from the request.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds up to `params.max_solutions` schedules.
    ///
    /// `employees[i]` owns row `i` of every schedule. Fails only on invalid
    /// input; an infeasible problem yields an outcome without schedules.
    pub fn create_schedules(
        &self,
        automaton: Option<&Automaton>,
        employees: &[Arc<Employee>],
        params: &ScheduleParameters,
    ) -> Result<ScheduleOutcome> {
        self.solve(automaton, employees, params, None, None)
    }

    /// Like [`create_schedules`](Self::create_schedules), also sending each
    /// schedule through `sender` as soon as it is found.
    ///
    /// Setting `terminate` stops the search at the next branch; schedules
    /// found so far are kept.
    pub fn create_schedules_with_channel(
        &self,
        automaton: Option<&Automaton>,
        employees: &[Arc<Employee>],
        params: &ScheduleParameters,
        terminate: Option<&AtomicBool>,
        sender: mpsc::UnboundedSender<Schedule>,
    ) -> Result<ScheduleOutcome> {
        self.solve(automaton, employees, params, terminate, Some(sender))
    }

    fn solve(
        &self,
        automaton: Option<&Automaton>,
        employees: &[Arc<Employee>],
        params: &ScheduleParameters,
        terminate: Option<&AtomicBool>,
        sender: Option<mpsc::UnboundedSender<Schedule>>,
    ) -> Result<ScheduleOutcome> {
        let model = ModelBuilder::new()
            .automaton(automaton)
            .employees(employees.len() as i64)
            .days(params.days)
            .team_size(params.team_size)
            .min_shifts_per_cycle(params.min_shifts_per_cycle)
            .shift_window(params.start_hour, params.shift_hours)
            .build()?;
        if params.max_solutions < 1 {
            return Err(RotaError::out_of_range(
                "max_solutions",
                "Invalid number for maximum solutions.",
            ));
        }

        let config = self
            .config
            .clone()
            .with_solution_limit(params.max_solutions as usize);
        let termination = OrTermination((
            configured_termination(&config),
            terminate.map(ExternalTermination::new),
        ));

        let materializer = Materializer::new(employees, params.start_date, &model);
        let mut solver = Solver::new()
            .with_config(config)
            .with_termination(termination);
        // Streamed schedules are kept so each solution is materialized once.
        let streamed = Arc::new(Mutex::new(Vec::new()));
        if let Some(sender) = sender {
            let materializer = materializer.clone();
            let streamed = Arc::clone(&streamed);
            let next_id = AtomicI64::new(1);
            solver = solver.with_solution_callback(Box::new(move |grid: &AssignmentGrid| {
                let id = next_id.fetch_add(1, Ordering::Relaxed);
                let schedule = materializer.materialize(id, grid);
                streamed.lock().push(schedule.clone());
                // A dropped receiver only ends the stream.
                let _ = sender.send(schedule);
            }));
        }

        let mut diagnostics = Diagnostics::new();
        diagnostics.header(
            model.employees(),
            model.days(),
            model.team_size(),
            model.min_shifts_per_cycle(),
        );

        let result = solver.solve(&model);

        let mut schedules = std::mem::take(&mut *streamed.lock());
        for (i, grid) in result.solutions.iter().enumerate() {
            diagnostics.solution(grid, employees);
            if i >= schedules.len() {
                schedules.push(materializer.materialize(i as i64 + 1, grid));
            }
        }
        diagnostics.summary(&result.stats);

        info!(event = "schedules_ready", schedules = schedules.len());

        let error = schedules
            .is_empty()
            .then(|| NO_SOLUTION_MESSAGE.to_string());
        Ok(ScheduleOutcome {
            schedules,
            diagnostics: diagnostics.into_string(),
            error,
            stats: result.stats,
            seed: result.seed,
            terminated: result.terminated,
        })
    }
}

#[cfg(test)]
mod tests;
