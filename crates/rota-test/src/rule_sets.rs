//! Built-in sequencing rules.

use rota_core::{Automaton, RuleSet, ShiftType};

/// Persisted form of [`two_shifts_two_days_off`].
pub const TWO_SHIFTS_TWO_DAYS_OFF: &str = r#"{"initialState":1,"acceptingStates":[1,2,3,4,5],"transitions":[[1,1,2],[1,2,3],[1,3,1],[2,1,4],[2,2,4],[2,3,1],[3,1,4],[3,3,1],[4,3,5],[5,3,1]]}"#;

/// "Two shifts, 2 days off; no 2 nights in a row".
///
/// After two consecutive worked shifts an employee takes two days off, and
/// a night shift is never followed by another night.
pub fn two_shifts_two_days_off() -> Automaton {
    Automaton::from_coded_triples(
        1,
        [1, 2, 3, 4, 5],
        &[
            [1, 1, 2],
            [1, 2, 3],
            [1, 3, 1],
            [2, 1, 4],
            [2, 2, 4],
            [2, 3, 1],
            [3, 1, 4],
            [3, 3, 1],
            [4, 3, 5],
            [5, 3, 1],
        ],
    )
    .expect("built-in rule set is valid")
}

/// Any shift may follow any other.
pub fn unrestricted() -> Automaton {
    Automaton::new(1, [1], ShiftType::ALL.map(|s| (1, s, 1))).expect("built-in rule set is valid")
}

/// Strict alternation of a worked shift and a day off, starting with work.
///
/// Only walks of even length are accepted.
pub fn work_then_rest() -> Automaton {
    Automaton::new(
        1,
        [1],
        [
            (1, ShiftType::Day, 2),
            (1, ShiftType::Night, 2),
            (2, ShiftType::Off, 1),
        ],
    )
    .expect("built-in rule set is valid")
}

/// Rule sets as the repository would hold them: two active, one inactive.
pub fn demo_rule_sets() -> Vec<RuleSet> {
    vec![
        RuleSet::from_rule_set_string(
            1,
            "Two shifts, 2 days off; No 2 nights in a row",
            TWO_SHIFTS_TWO_DAYS_OFF,
        )
        .expect("built-in rule set is valid"),
        RuleSet::from_automaton(2, "Unrestricted", unrestricted())
            .expect("built-in rule set is valid"),
        RuleSet::from_automaton(3, "Work then rest", work_then_rest())
            .expect("built-in rule set is valid")
            .with_active(false),
    ]
}
