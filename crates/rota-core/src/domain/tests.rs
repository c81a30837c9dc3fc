//! Tests for domain types (shift, employee, window, schedule, rule set).


// ============================================================================
// Shift Type Tests
// ============================================================================

mod shift_type_tests {
    use crate::domain::ShiftType;

    #[test]
    fn test_codes_round_trip() {
        for shift in ShiftType::ALL {
            assert_eq!(ShiftType::from_code(shift.code() as i64), Some(shift));
        }
    }

    #[test]
    fn test_reserved_code_is_not_a_shift() {
        assert_eq!(ShiftType::from_code(ShiftType::NONE_CODE as i64), None);
        assert_eq!(ShiftType::from_code(4), None);
        assert_eq!(ShiftType::from_code(-1), None);
    }

    #[test]
    fn test_is_worked() {
        assert!(ShiftType::Day.is_worked());
        assert!(ShiftType::Night.is_worked());
        assert!(!ShiftType::Off.is_worked());
    }

    #[test]
    fn test_index_and_tag() {
        assert_eq!(ShiftType::Day.index(), 0);
        assert_eq!(ShiftType::Off.index(), 2);
        let tags: String = ShiftType::ALL.iter().map(|s| s.tag()).collect();
        assert_eq!(tags, "dno");
    }
}

// ============================================================================
// Employee Tests
// ============================================================================

mod employee_tests {
    use crate::domain::Employee;

    #[test]
    fn test_display_name() {
        let employee = Employee::new(7, "Wanda", "Morgan");
        assert_eq!(employee.display_name(), "Wanda Morgan");
        assert_eq!(employee.to_string(), "Wanda Morgan");
        assert!(employee.is_active);
    }

    #[test]
    fn test_with_active() {
        let employee = Employee::new(1, "Jan", "Martin").with_active(false);
        assert!(!employee.is_active);
    }

    #[test]
    fn test_serializes_camel_case() {
        let employee = Employee::new(3, "Sue", "Wilson");
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"familyName\":\"Wilson\""));
        assert!(json.contains("\"isActive\":true"));
    }
}

// ============================================================================
// Shift Window Tests
// ============================================================================

mod window_tests {
    use chrono::NaiveDate;

    use crate::domain::{ShiftType, ShiftWindow};
    use crate::error::RotaError;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, 20).unwrap()
    }

    #[test]
    fn test_day_shift_span() {
        let window = ShiftWindow::new(7, 12).unwrap();
        let (start, end) = window.span(date(), ShiftType::Day);
        assert_eq!(start, date().and_hms_opt(7, 0, 0).unwrap());
        assert_eq!(end, date().and_hms_opt(19, 0, 0).unwrap());
    }

    #[test]
    fn test_night_shift_rolls_into_next_day() {
        let window = ShiftWindow::new(7, 12).unwrap();
        let (start, end) = window.span(date(), ShiftType::Night);
        let next = date().succ_opt().unwrap();
        assert_eq!(start, date().and_hms_opt(19, 0, 0).unwrap());
        assert_eq!(end, next.and_hms_opt(7, 0, 0).unwrap());
    }

    #[test]
    fn test_off_shift_is_zero_length_at_midnight() {
        let window = ShiftWindow::new(7, 12).unwrap();
        let (start, end) = window.span(date(), ShiftType::Off);
        assert_eq!(start, date().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(start, end);
    }

    #[test]
    fn test_short_shifts() {
        let window = ShiftWindow::new(0, 8).unwrap();
        assert_eq!(window.offset_hours(ShiftType::Day), 0);
        assert_eq!(window.offset_hours(ShiftType::Night), 8);
        let (_, end) = window.span(date(), ShiftType::Night);
        assert_eq!(end, date().and_hms_opt(16, 0, 0).unwrap());
    }

    #[test]
    fn test_start_hour_out_of_range() {
        let err = ShiftWindow::new(13, 8).unwrap_err();
        assert!(matches!(
            err,
            RotaError::OutOfRange {
                parameter: "start_hour",
                ..
            }
        ));
        assert!(ShiftWindow::new(-1, 8).is_err());
    }

    #[test]
    fn test_shift_hours_out_of_range() {
        assert_eq!(
            ShiftWindow::new(7, 13).unwrap_err().parameter(),
            Some("shift_hours")
        );
        assert_eq!(
            ShiftWindow::new(7, 0).unwrap_err().parameter(),
            Some("shift_hours")
        );
    }

    #[test]
    fn test_boundaries_accepted() {
        assert!(ShiftWindow::new(0, 1).is_ok());
        assert!(ShiftWindow::new(12, 12).is_ok());
    }
}

// ============================================================================
// Schedule Tests
// ============================================================================

mod schedule_tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::{Employee, Schedule, Shift, ShiftType, ShiftWindow};

    fn schedule() -> Schedule {
        let start = NaiveDate::from_ymd_opt(2018, 8, 20).unwrap();
        let window = ShiftWindow::new(7, 12).unwrap();
        let alice = Arc::new(Employee::new(1, "Alison", "Chapman"));
        let nathan = Arc::new(Employee::new(2, "Nathan", "Carr"));

        let mut shifts = Vec::new();
        let rows = [
            (&alice, [ShiftType::Day, ShiftType::Off]),
            (&nathan, [ShiftType::Night, ShiftType::Day]),
        ];
        for (employee, row) in rows {
            for (day, shift_type) in row.into_iter().enumerate() {
                let date = start + chrono::Duration::days(day as i64);
                let (s, e) = window.span(date, shift_type);
                shifts.push(Shift {
                    id: shifts.len() as i64 + 1,
                    employee: Arc::clone(employee),
                    shift_type,
                    start: s,
                    end: e,
                });
            }
        }

        Schedule {
            id: 1,
            name: "test".to_string(),
            start_date: start,
            end_date: start + chrono::Duration::days(2),
            shifts,
        }
    }

    #[test]
    fn test_days_is_derived() {
        assert_eq!(schedule().days(), 2);
    }

    #[test]
    fn test_shifts_on() {
        let schedule = schedule();
        let second = NaiveDate::from_ymd_opt(2018, 8, 21).unwrap();
        let kinds: Vec<_> = schedule.shifts_on(second).map(|s| s.shift_type).collect();
        assert_eq!(kinds, vec![ShiftType::Off, ShiftType::Day]);
    }

    #[test]
    fn test_night_shift_counts_on_its_start_day() {
        let schedule = schedule();
        let first = NaiveDate::from_ymd_opt(2018, 8, 20).unwrap();
        assert_eq!(schedule.shifts_on(first).count(), 2);
    }

    #[test]
    fn test_shifts_for() {
        let schedule = schedule();
        let ids: Vec<_> = schedule.shifts_for(2).map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }
}

// ============================================================================
// Rule Set Tests
// ============================================================================

mod rule_set_tests {
    use crate::domain::{Automaton, RuleSet, ShiftType};
    use crate::error::RotaError;

    #[test]
    fn test_from_automaton_generates_text() {
        let automaton = Automaton::new(1, [1], [(1, ShiftType::Off, 1)]).unwrap();
        let rule_set = RuleSet::from_automaton(4, "Always off", automaton.clone()).unwrap();
        assert_eq!(rule_set.automaton(), &automaton);
        assert_eq!(
            Automaton::from_rule_set_string(rule_set.rule_set_string()).unwrap(),
            automaton
        );
        assert!(rule_set.is_active);
    }

    #[test]
    fn test_from_rule_set_string_keeps_text() {
        let text = r#"{"initialState":1,"acceptingStates":[1],"transitions":[[1,3,1]]}"#;
        let rule_set = RuleSet::from_rule_set_string(2, "Off", text).unwrap();
        assert_eq!(rule_set.rule_set_string(), text);
        assert_eq!(rule_set.automaton().next(1, ShiftType::Off), Some(1));
    }

    #[test]
    fn test_from_rule_set_string_rejects_garbage() {
        let err = RuleSet::from_rule_set_string(2, "Bad", "not json").unwrap_err();
        assert!(matches!(err, RotaError::RuleSetParse(_)));
    }

    #[test]
    fn test_with_active() {
        let automaton = Automaton::new(1, [1], []).unwrap();
        let rule_set = RuleSet::from_automaton(1, "Empty", automaton)
            .unwrap()
            .with_active(false);
        assert!(!rule_set.is_active);
    }
}
