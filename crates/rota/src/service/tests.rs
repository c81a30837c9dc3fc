//! Tests for the scheduling service.

use rota_core::{Employee, RotaError, RuleSet};
use rota_test::rule_sets::work_then_rest;
use rota_test::{InMemoryEmployeeRepository, InMemoryRuleSetRepository};

use super::*;

fn demo_service() -> SchedulerService<InMemoryEmployeeRepository, InMemoryRuleSetRepository> {
    SchedulerService::with_seed(
        InMemoryEmployeeRepository::demo(),
        InMemoryRuleSetRepository::demo(),
        11,
    )
}

fn two_week_request() -> ScheduleRequest {
    ScheduleRequest::new(1, 14, 10, 2).with_min_shifts_per_cycle(2)
}

#[tokio::test]
async fn test_create_schedule_from_demo_data() {
    let service = demo_service();

    let response = service.create_schedule(&two_week_request()).await.unwrap();

    let schedule = response.schedule.expect("demo request is feasible");
    assert!(response.error.is_none());
    assert!((1..=5).contains(&schedule.id));
    assert_eq!(schedule.days, 14);
    assert_eq!(schedule.shifts.len(), 140);
    assert_eq!(schedule.statistics, response.statistics);
    assert!(response.statistics.contains("Finished solving the schedule."));
}

#[tokio::test]
async fn test_draws_only_active_staff() {
    let service = demo_service();
    let request = ScheduleRequest::new(2, 3, 6, 1);

    let response = service.create_schedule(&request).await.unwrap();

    // The ten active demo employees have ids 1 to 10
    let schedule = response.schedule.unwrap();
    let mut ids: Vec<_> = schedule.shifts.iter().map(|s| s.employee.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 6);
    let active: Vec<_> = rota_test::employees::active_demo_employees()
        .iter()
        .map(Employee::display_name)
        .collect();
    assert!(ids.iter().all(|name| active.contains(name)));
}

#[tokio::test]
async fn test_more_employees_than_active() {
    let service = demo_service();
    let request = ScheduleRequest::new(1, 14, 11, 2);

    let err = service.create_schedule(&request).await.unwrap_err();
    assert_eq!(err.parameter(), Some("employee_count"));
}

#[tokio::test]
async fn test_negative_employee_count() {
    let service = demo_service();
    let request = ScheduleRequest::new(1, 14, -1, 2);

    let err = service.create_schedule(&request).await.unwrap_err();
    assert_eq!(err.parameter(), Some("employee_count"));
}

#[tokio::test]
async fn test_inactive_rule_set_is_not_found() {
    let service = demo_service();

    let err = service
        .create_schedule(&ScheduleRequest::new(3, 14, 10, 2))
        .await
        .unwrap_err();
    assert!(matches!(err, RotaError::NotFound(_)));

    let err = service
        .create_schedule(&ScheduleRequest::new(99, 14, 10, 2))
        .await
        .unwrap_err();
    assert!(matches!(err, RotaError::NotFound(_)));
}

#[tokio::test]
async fn test_validation_errors_pass_through() {
    let service = demo_service();
    let request = ScheduleRequest::new(1, 0, 10, 2);

    let err = service.create_schedule(&request).await.unwrap_err();
    assert_eq!(err.parameter(), Some("days"));
}

#[tokio::test]
async fn test_infeasible_request_reports_error() {
    let rule_sets = InMemoryRuleSetRepository::new(vec![
        RuleSet::from_automaton(1, "Work then rest", work_then_rest()).unwrap(),
    ]);
    let service = SchedulerService::with_seed(InMemoryEmployeeRepository::demo(), rule_sets, 3);
    // Odd cycle lengths can never return to the accepting state
    let request = ScheduleRequest::new(1, 3, 4, 1);

    let response = service.create_schedule(&request).await.unwrap();

    assert!(response.schedule.is_none());
    assert_eq!(response.error.as_deref(), Some(crate::NO_SOLUTION_MESSAGE));
    assert!(response.statistics.ends_with(crate::NO_SOLUTION_MESSAGE));
}

#[tokio::test]
async fn test_active_rule_sets() {
    let service = demo_service();

    let rule_sets = service.active_rule_sets().await.unwrap();

    let ids: Vec<_> = rule_sets.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2]);
}
