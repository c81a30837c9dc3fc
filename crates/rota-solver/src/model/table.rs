//! Dense transition table compiled from an automaton.

use std::collections::BTreeMap;

use rota_core::{Automaton, ShiftType, State};

/// Automaton with states renumbered `0..n` for array-indexed layers.
///
/// Built once per model. Missing transitions stay `None` and prune the
/// branch that needs them; nothing is checked up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    initial: usize,
    accepting: Vec<bool>,
    next: Vec<[Option<usize>; 3]>,
    labels: Vec<State>,
}

impl TransitionTable {
    pub fn compile(automaton: &Automaton) -> Self {
        let labels: Vec<State> = automaton.states().into_iter().collect();
        let dense: BTreeMap<State, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| (label, i))
            .collect();

        let mut next = vec![[None; 3]; labels.len()];
        for (from, symbol, to) in automaton.transitions() {
            next[dense[&from]][symbol.index()] = Some(dense[&to]);
        }

        let accepting = labels.iter().map(|&s| automaton.accepts(s)).collect();

        Self {
            initial: dense[&automaton.initial_state()],
            accepting,
            next,
            labels,
        }
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn initial(&self) -> usize {
        self.initial
    }

    #[inline]
    pub fn is_accepting(&self, state: usize) -> bool {
        self.accepting[state]
    }

    #[inline]
    pub fn next(&self, state: usize, shift: ShiftType) -> Option<usize> {
        self.next[state][shift.index()]
    }

    /// Original automaton label of a dense state.
    pub fn label(&self, state: usize) -> State {
        self.labels[state]
    }

    /// Whether `row` walks from the initial state to an accepting one.
    pub fn accepts_row(&self, row: &[ShiftType]) -> bool {
        row.iter()
            .try_fold(self.initial, |state, &shift| self.next(state, shift))
            .is_some_and(|state| self.is_accepting(state))
    }
}
