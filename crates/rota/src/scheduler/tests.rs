//! Tests for the shift scheduler.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use chrono::NaiveDate;
use rota_config::SolverConfig;
use rota_core::{Employee, RotaError, ShiftWindow};
use rota_test::checks::Expectation;
use rota_test::rule_sets::work_then_rest;
use rota_test::{schedule_violations, staff, two_shifts_two_days_off, unrestricted};
use tokio::sync::mpsc;

use super::*;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn roster(count: usize) -> Vec<Arc<Employee>> {
    staff(count).into_iter().map(Arc::new).collect()
}

fn seeded() -> ShiftScheduler {
    ShiftScheduler::with_config(
        SolverConfig::new()
            .with_random_seed(7)
            .with_time_limit_millis(10_000),
    )
}

fn parameter_of(result: Result<ScheduleOutcome>) -> Option<&'static str> {
    match result {
        Err(err) => err.parameter(),
        Ok(_) => panic!("expected a validation error"),
    }
}

#[test]
fn test_ten_employees_two_weeks() {
    let automaton = two_shifts_two_days_off();
    let employees = roster(10);
    let params = ScheduleParameters::new(start(), 14, 2)
        .with_min_shifts_per_cycle(2)
        .with_shift_window(7, 12)
        .with_max_solutions(3);

    let outcome = seeded()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    assert_eq!(outcome.schedules.len(), 3);
    assert!(outcome.is_solved());
    assert!(outcome.error.is_none());
    assert!(outcome.terminated);

    let expected = Expectation {
        automaton: &automaton,
        employees: 10,
        days: 14,
        team_size: 2,
        min_shifts_per_cycle: 2,
        window: ShiftWindow::new(7, 12).unwrap(),
    };
    for (i, schedule) in outcome.schedules.iter().enumerate() {
        assert_eq!(schedule.id, i as i64 + 1);
        assert_eq!(schedule.shifts.len(), 140);
        assert_eq!(schedule_violations(schedule, &expected), Vec::<String>::new());
    }

    assert!(outcome.diagnostics.starts_with("Starting to solve a new schedule"));
    assert!(outcome.diagnostics.contains("Solutions: 3"));
    assert_eq!(outcome.diagnostics.matches("Daily Statistics").count(), 3);
    assert!(outcome.diagnostics.ends_with("Finished solving the schedule."));
}

#[test]
fn test_schedules_are_distinct() {
    let automaton = unrestricted();
    let employees = roster(3);
    let params = ScheduleParameters::new(start(), 2, 1).with_max_solutions(5);

    let outcome = seeded()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    assert_eq!(outcome.schedules.len(), 5);
    for (i, a) in outcome.schedules.iter().enumerate() {
        for b in &outcome.schedules[i + 1..] {
            let kinds = |s: &Schedule| s.shifts.iter().map(|x| x.shift_type).collect::<Vec<_>>();
            assert_ne!(kinds(a), kinds(b));
        }
    }
}

#[test]
fn test_team_too_large_is_not_an_error() {
    let automaton = two_shifts_two_days_off();
    let employees = roster(3);
    let params = ScheduleParameters::new(start(), 7, 5);

    let outcome = seeded()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    assert!(outcome.schedules.is_empty());
    assert!(!outcome.is_solved());
    assert!(!outcome.terminated);
    assert_eq!(outcome.error.as_deref(), Some(NO_SOLUTION_MESSAGE));
    assert!(outcome.diagnostics.contains("Solutions: 0"));
    assert!(outcome.diagnostics.ends_with(NO_SOLUTION_MESSAGE));
}

#[test]
fn test_doubled_team_past_i64_max_has_no_schedules() {
    let automaton = two_shifts_two_days_off();
    let employees = roster(3);
    let params = ScheduleParameters::new(start(), 7, i64::MAX / 2 + 1);

    let outcome = ShiftScheduler::new()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    assert!(outcome.schedules.is_empty());
    assert_eq!(outcome.error.as_deref(), Some(NO_SOLUTION_MESSAGE));
}

#[test]
fn test_cell_count_overflow_is_rejected() {
    let automaton = unrestricted();
    let employees = roster(3);
    let params = ScheduleParameters::new(start(), i64::MAX, 1);

    let result = seeded().create_schedules(Some(&automaton), &employees, &params);

    assert_eq!(parameter_of(result), Some("days"));
}

#[test]
fn test_single_day_cycle() {
    let automaton = two_shifts_two_days_off();
    let employees = roster(4);
    let params = ScheduleParameters::new(start(), 1, 1).with_max_solutions(1);

    let outcome = seeded()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    let schedule = &outcome.schedules[0];
    assert_eq!(schedule.end_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    assert_eq!(schedule.days(), 1);
    assert_eq!(schedule.shifts.len(), 4);
}

#[test]
fn test_single_day_without_accepting_step() {
    // Every one-step walk of this rule ends outside the accepting set
    let automaton = work_then_rest();
    let employees = roster(3);
    let params = ScheduleParameters::new(start(), 1, 1);

    let outcome = seeded()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    assert!(outcome.schedules.is_empty());
    assert_eq!(outcome.error.as_deref(), Some(NO_SOLUTION_MESSAGE));
}

#[test]
fn test_missing_rule_set() {
    let employees = roster(4);
    let params = ScheduleParameters::new(start(), 7, 1);

    let result = seeded().create_schedules(None, &employees, &params);
    assert!(matches!(result, Err(RotaError::MissingRuleSet)));
}

#[test]
fn test_out_of_range_parameters() {
    let automaton = unrestricted();
    let employees = roster(4);
    let scheduler = seeded();
    let base = ScheduleParameters::new(start(), 7, 1);
    let run = |employees: &[Arc<Employee>], params: ScheduleParameters| {
        parameter_of(scheduler.create_schedules(Some(&automaton), employees, &params))
    };

    let nobody: Vec<Arc<Employee>> = Vec::new();
    assert_eq!(run(&nobody[..], base), Some("employees"));
    assert_eq!(run(&employees[..], ScheduleParameters { days: 0, ..base }), Some("days"));
    assert_eq!(run(&employees[..], ScheduleParameters { team_size: 0, ..base }), Some("team_size"));
    assert_eq!(
        run(&employees[..], base.with_min_shifts_per_cycle(-1)),
        Some("min_shifts_per_cycle")
    );
    assert_eq!(run(&employees[..], base.with_shift_window(13, 12)), Some("start_hour"));
    assert_eq!(run(&employees[..], base.with_shift_window(7, 13)), Some("shift_hours"));
    assert_eq!(run(&employees[..], base.with_shift_window(7, 0)), Some("shift_hours"));
    assert_eq!(run(&employees[..], base.with_max_solutions(0)), Some("max_solutions"));
}

#[test]
fn test_channel_receives_every_schedule() {
    let automaton = two_shifts_two_days_off();
    let employees = roster(6);
    let params = ScheduleParameters::new(start(), 7, 1).with_max_solutions(3);
    let (sender, mut receiver) = mpsc::unbounded_channel();

    let outcome = seeded()
        .create_schedules_with_channel(Some(&automaton), &employees, &params, None, sender)
        .unwrap();

    let mut streamed = Vec::new();
    while let Ok(schedule) = receiver.try_recv() {
        streamed.push(schedule);
    }
    assert_eq!(streamed, outcome.schedules);
}

#[test]
fn test_raised_flag_stops_before_first_schedule() {
    let automaton = unrestricted();
    let employees = roster(4);
    let params = ScheduleParameters::new(start(), 7, 1);
    let flag = AtomicBool::new(true);
    let (sender, _receiver) = mpsc::unbounded_channel();

    let outcome = seeded()
        .create_schedules_with_channel(Some(&automaton), &employees, &params, Some(&flag), sender)
        .unwrap();

    assert!(outcome.schedules.is_empty());
    assert!(outcome.terminated);
    assert_eq!(outcome.error.as_deref(), Some(NO_SOLUTION_MESSAGE));
}

#[test]
fn test_same_seed_same_schedules() {
    let automaton = two_shifts_two_days_off();
    let employees = roster(8);
    let params = ScheduleParameters::new(start(), 10, 2).with_max_solutions(2);

    let first = seeded()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();
    let second = seeded()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    assert_eq!(first.seed, 7);
    assert_eq!(first.schedules, second.schedules);
}

#[test]
fn test_request_cap_overrides_config() {
    let automaton = unrestricted();
    let employees = roster(3);
    let scheduler = ShiftScheduler::with_config(SolverConfig::new().with_solution_limit(1));
    let params = ScheduleParameters::new(start(), 2, 1).with_max_solutions(4);

    let outcome = scheduler
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    assert_eq!(outcome.schedules.len(), 4);
    assert_eq!(scheduler.config().solution_limit(), 1);
}

#[test]
fn test_dropped_receiver_keeps_schedules() {
    let automaton = two_shifts_two_days_off();
    let employees = roster(6);
    let params = ScheduleParameters::new(start(), 7, 1).with_max_solutions(3);
    let (sender, receiver) = mpsc::unbounded_channel();
    drop(receiver);

    let streamed = seeded()
        .create_schedules_with_channel(Some(&automaton), &employees, &params, None, sender)
        .unwrap();
    let direct = seeded()
        .create_schedules(Some(&automaton), &employees, &params)
        .unwrap();

    assert_eq!(streamed.schedules.len(), 3);
    assert_eq!(streamed.schedules, direct.schedules);
    let ids: Vec<_> = streamed.schedules.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
