//! Deterministic finite automaton over shift symbols.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::ShiftType;
use crate::error::{Result, RotaError};

/// Automaton state label.
pub type State = u32;

/// Per-employee sequencing rule.
///
/// The transition table is a partial function: a `(state, symbol)` pair with
/// no entry has no successor, and a walk that reaches it is dead. Dead ends
/// are ordinary pruning during search, never an error, so an automaton with
/// an intentionally partial table is valid.
///
/// Equality compares the transition map and accepting set, so two automata
/// built from the same triples in any order are equal.
///
/// # Example
///
/// ```
/// use rota_core::{Automaton, ShiftType};
///
/// // Alternate working and off, starting anywhere.
/// let automaton = Automaton::new(
///     1,
///     [1, 2],
///     [
///         (1, ShiftType::Day, 2),
///         (1, ShiftType::Night, 2),
///         (2, ShiftType::Off, 1),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(automaton.next(1, ShiftType::Day), Some(2));
/// assert_eq!(automaton.next(2, ShiftType::Day), None);
/// assert!(automaton.accepts_sequence(&[ShiftType::Night, ShiftType::Off]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AutomatonDocument", into = "AutomatonDocument")]
pub struct Automaton {
    initial_state: State,
    accepting_states: BTreeSet<State>,
    transitions: BTreeMap<(State, ShiftType), State>,
}

impl Automaton {
    /// Creates an automaton from its initial state, accepting set and
    /// transition triples.
    ///
    /// Repeating an identical triple is harmless. Two triples that give the
    /// same `(state, symbol)` different successors make the table
    /// non-deterministic and are rejected.
    pub fn new(
        initial_state: State,
        accepting_states: impl IntoIterator<Item = State>,
        transitions: impl IntoIterator<Item = (State, ShiftType, State)>,
    ) -> Result<Self> {
        let mut table = BTreeMap::new();
        for (from, symbol, to) in transitions {
            if let Some(existing) = table.insert((from, symbol), to) {
                if existing != to {
                    return Err(RotaError::InvalidRuleSet(format!(
                        "state {} on {} leads to both {} and {}",
                        from, symbol, existing, to
                    )));
                }
            }
        }

        Ok(Self {
            initial_state,
            accepting_states: accepting_states.into_iter().collect(),
            transitions: table,
        })
    }

    /// Creates an automaton from triples whose symbols are raw codes (1–3).
    pub fn from_coded_triples(
        initial_state: State,
        accepting_states: impl IntoIterator<Item = State>,
        transitions: &[[i64; 3]],
    ) -> Result<Self> {
        let mut triples = Vec::with_capacity(transitions.len());
        for &[from, code, to] in transitions {
            let symbol = ShiftType::from_code(code).ok_or_else(|| {
                RotaError::InvalidRuleSet(format!(
                    "symbol {} is not a shift code (expected 1-3)",
                    code
                ))
            })?;
            triples.push((state_label(from)?, symbol, state_label(to)?));
        }
        Self::new(initial_state, accepting_states, triples)
    }

    /// Parses the persisted rule-set text.
    ///
    /// The text is a JSON document of the form
    /// `{"initialState":1,"acceptingStates":[1,2],"transitions":[[1,1,2],...]}`.
    pub fn from_rule_set_string(text: &str) -> Result<Self> {
        let document: AutomatonDocument = serde_json::from_str(text)?;
        Self::try_from(document)
    }

    /// Serializes to the persisted rule-set text.
    ///
    /// Transitions are written sorted by `(state, symbol)`, so the output is
    /// canonical for a given automaton.
    pub fn to_rule_set_string(&self) -> Result<String> {
        serde_json::to_string(&AutomatonDocument::from(self.clone()))
            .map_err(|e| RotaError::Internal(e.to_string()))
    }

    /// The state every walk starts in.
    #[inline]
    pub fn initial_state(&self) -> State {
        self.initial_state
    }

    /// The accepting states.
    pub fn accepting_states(&self) -> &BTreeSet<State> {
        &self.accepting_states
    }

    /// Returns the successor of `state` on `symbol`, or `None` for a dead end.
    #[inline]
    pub fn next(&self, state: State, symbol: ShiftType) -> Option<State> {
        self.transitions.get(&(state, symbol)).copied()
    }

    /// Whether `state` is accepting.
    #[inline]
    pub fn accepts(&self, state: State) -> bool {
        self.accepting_states.contains(&state)
    }

    /// Iterates the transition triples in `(state, symbol)` order.
    pub fn transitions(&self) -> impl Iterator<Item = (State, ShiftType, State)> + '_ {
        self.transitions
            .iter()
            .map(|(&(from, symbol), &to)| (from, symbol, to))
    }

    /// Number of transition entries.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Every state mentioned anywhere in the automaton.
    pub fn states(&self) -> BTreeSet<State> {
        let mut states = BTreeSet::new();
        states.insert(self.initial_state);
        states.extend(self.accepting_states.iter().copied());
        for (&(from, _), &to) in &self.transitions {
            states.insert(from);
            states.insert(to);
        }
        states
    }

    /// Runs `sequence` from the initial state.
    ///
    /// Returns the final state, or `None` if the walk hits a missing
    /// transition.
    pub fn walk(&self, sequence: &[ShiftType]) -> Option<State> {
        sequence
            .iter()
            .try_fold(self.initial_state, |state, &symbol| self.next(state, symbol))
    }

    /// Whether `sequence` is a complete accepted walk.
    pub fn accepts_sequence(&self, sequence: &[ShiftType]) -> bool {
        self.walk(sequence).is_some_and(|state| self.accepts(state))
    }
}

fn state_label(value: i64) -> Result<State> {
    State::try_from(value)
        .map_err(|_| RotaError::InvalidRuleSet(format!("state {} is not a valid label", value)))
}

/// Persisted shape of an automaton.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AutomatonDocument {
    initial_state: State,
    accepting_states: Vec<State>,
    #[serde(default)]
    transitions: Vec<[i64; 3]>,
}

impl TryFrom<AutomatonDocument> for Automaton {
    type Error = RotaError;

    fn try_from(document: AutomatonDocument) -> Result<Self> {
        Automaton::from_coded_triples(
            document.initial_state,
            document.accepting_states,
            &document.transitions,
        )
    }
}

impl From<Automaton> for AutomatonDocument {
    fn from(automaton: Automaton) -> Self {
        let transitions = automaton
            .transitions()
            .map(|(from, symbol, to)| [from as i64, symbol.code() as i64, to as i64])
            .collect();
        Self {
            initial_state: automaton.initial_state,
            accepting_states: automaton.accepting_states.into_iter().collect(),
            transitions,
        }
    }
}
