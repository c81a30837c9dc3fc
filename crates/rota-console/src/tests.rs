//! Tests for console formatting.

use super::*;

#[test]
fn test_unknown_event_is_silent() {
    let visitor = EventVisitor {
        event: Some("something_else".to_string()),
        ..Default::default()
    };
    assert!(format_event(&visitor).is_empty());
    assert!(format_event(&EventVisitor::default()).is_empty());
}

#[test]
fn test_solve_start() {
    let visitor = EventVisitor {
        event: Some("solve_start".to_string()),
        employees: Some(10),
        days: Some(14),
        team_size: Some(2),
        constraints: Some(1234),
        seed: Some(7),
        ..Default::default()
    };
    let output = format_event(&visitor);
    assert!(output.contains("Solving"));
    assert!(output.contains("employees"));
    assert!(output.contains("1,234"));
    assert!(output.contains("seed"));
}

#[test]
fn test_solution_found() {
    let visitor = EventVisitor {
        event: Some("solution_found".to_string()),
        solution: Some(3),
        ..Default::default()
    };
    assert!(format_event(&visitor).contains("Solution #"));
}

#[test]
fn test_solve_end_solved() {
    let visitor = EventVisitor {
        event: Some("solve_end".to_string()),
        solutions: Some(5),
        branches: Some(12_345),
        failures: Some(67),
        duration_ms: Some(1500),
        terminated: Some(true),
        ..Default::default()
    };
    let output = format_event(&visitor);
    assert!(output.contains("SOLVED"));
    assert!(output.contains("limit reached"));
    assert!(output.contains("12,345"));
    assert!(output.contains("1.50s"));
}

#[test]
fn test_solve_end_without_solutions() {
    let visitor = EventVisitor {
        event: Some("solve_end".to_string()),
        solutions: Some(0),
        terminated: Some(false),
        ..Default::default()
    };
    let output = format_event(&visitor);
    assert!(output.contains("NO SOLUTION"));
    assert!(output.contains("search space exhausted"));
}

#[test]
fn test_schedules_ready() {
    let visitor = EventVisitor {
        event: Some("schedules_ready".to_string()),
        schedules: Some(3),
        ..Default::default()
    };
    assert!(format_event(&visitor).contains("schedule(s) materialized"));
}

#[test]
fn test_format_duration_ms() {
    assert_eq!(format_duration_ms(250), "250ms");
    assert_eq!(format_duration_ms(2500), "2.50s");
    assert_eq!(format_duration_ms(125_000), "2m 5s");
}

#[test]
fn test_problem_scale() {
    assert_eq!(calculate_problem_scale(0, 3), "0");
    assert_eq!(calculate_problem_scale(2, 3), "9.000 x 10^0");
    assert_eq!(calculate_problem_scale(4, 10), "1.000 x 10^4");
}

#[test]
fn test_init_is_idempotent() {
    init();
    init();
}
