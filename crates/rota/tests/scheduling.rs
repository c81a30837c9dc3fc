//! End-to-end roster generation through the public API.

use std::sync::Arc;
use std::thread;

use chrono::{NaiveDate, Timelike};
use rota::prelude::*;
use rota::ShiftWindow;
use rota_test::checks::Expectation;
use rota_test::employees::active_demo_employees;
use rota_test::rule_sets::TWO_SHIFTS_TWO_DAYS_OFF;
use rota_test::schedule_violations;

fn demo_staff() -> Vec<Arc<Employee>> {
    active_demo_employees().into_iter().map(Arc::new).collect()
}

fn scheduler(seed: u64) -> ShiftScheduler {
    ShiftScheduler::with_config(
        SolverConfig::new()
            .with_random_seed(seed)
            .with_time_limit_millis(10_000),
    )
}

#[test]
fn test_persisted_rule_set_two_week_rota() {
    let rule_set = rota::RuleSet::from_rule_set_string(1, "Two shifts", TWO_SHIFTS_TWO_DAYS_OFF)
        .unwrap();
    let staff = demo_staff();
    let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    let params = ScheduleParameters::new(start, 14, 2)
        .with_min_shifts_per_cycle(2)
        .with_shift_window(7, 12)
        .with_max_solutions(3);

    let outcome = scheduler(1)
        .create_schedules(Some(rule_set.automaton()), &staff, &params)
        .unwrap();

    assert_eq!(outcome.schedules.len(), 3);
    let expected = Expectation {
        automaton: rule_set.automaton(),
        employees: 10,
        days: 14,
        team_size: 2,
        min_shifts_per_cycle: 2,
        window: ShiftWindow::new(7, 12).unwrap(),
    };
    for schedule in &outcome.schedules {
        assert!(schedule_violations(schedule, &expected).is_empty());
        assert_eq!(schedule.end_date, NaiveDate::from_ymd_opt(2024, 6, 17).unwrap());

        for shift in &schedule.shifts {
            match shift.shift_type {
                ShiftType::Day => {
                    assert_eq!((shift.start.hour(), shift.end.hour()), (7, 19));
                    assert_eq!(shift.start.date(), shift.end.date());
                }
                ShiftType::Night => {
                    assert_eq!((shift.start.hour(), shift.end.hour()), (19, 7));
                    assert_eq!(shift.end.date(), shift.start.date().succ_opt().unwrap());
                }
                ShiftType::Off => {
                    assert_eq!(shift.start.hour(), 0);
                    assert_eq!(shift.start, shift.end);
                }
            }
        }
    }

    // Rows follow the input order
    let first = &outcome.schedules[0];
    let owners: Vec<_> = first.shifts.iter().step_by(14).map(|s| s.employee.id).collect();
    let input: Vec<_> = staff.iter().map(|e| e.id).collect();
    assert_eq!(owners, input);
}

#[test]
fn test_concurrent_solves_are_independent() {
    let automaton = rota_test::two_shifts_two_days_off();
    let staff = demo_staff();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let params = ScheduleParameters::new(start, 7, 2).with_max_solutions(2);

    let solo = scheduler(5)
        .create_schedules(Some(&automaton), &staff, &params)
        .unwrap();

    let outcomes: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    scheduler(5)
                        .create_schedules(Some(&automaton), &staff, &params)
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for outcome in outcomes {
        assert_eq!(outcome.schedules, solo.schedules);
    }
}

#[test]
fn test_infeasible_team_size() {
    let automaton = rota_test::two_shifts_two_days_off();
    let staff: Vec<_> = demo_staff().into_iter().take(3).collect();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let params = ScheduleParameters::new(start, 7, 5);

    let outcome = ShiftScheduler::new()
        .create_schedules(Some(&automaton), &staff, &params)
        .unwrap();

    assert!(outcome.schedules.is_empty());
    assert_eq!(outcome.error.as_deref(), Some(rota::NO_SOLUTION_MESSAGE));
}
