//! Tabular action-value store.

use std::collections::HashMap;

use super::types::{Action, State};

/// Maps `(state, action)` pairs to value estimates.
///
/// Each known state holds one entry per action in [`Action::ALL`], legal or
/// not. Lookups for unseen pairs return 0.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    values: HashMap<State, [f64; 4]>,
}

impl QTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with every action of every given state set to 0.
    pub fn with_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = State>,
    {
        Self {
            values: states.into_iter().map(|s| (s, [0.0; 4])).collect(),
        }
    }

    /// Current estimate for `(state, action)`.
    pub fn value_of(&self, state: &State, action: Action) -> f64 {
        self.values
            .get(state)
            .map(|row| row[action.index()])
            .unwrap_or(0.0)
    }

    /// Overwrites the estimate for `(state, action)`.
    pub fn update(&mut self, state: State, action: Action, value: f64) {
        self.values.entry(state).or_insert([0.0; 4])[action.index()] = value;
    }

    /// Argmax over the full action set for `state`, with its value.
    ///
    /// Legality is not considered. Ties go to the action that comes first in
    /// [`Action::ALL`].
    pub fn greedy_action(&self, state: &State) -> (Action, f64) {
        let mut best = Action::ALL[0];
        let mut best_value = f64::NEG_INFINITY;
        for action in Action::ALL {
            let value = self.value_of(state, action);
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        (best, best_value)
    }

    /// Largest estimate for `state`.
    pub fn max_value(&self, state: &State) -> f64 {
        self.greedy_action(state).1
    }

    /// Returns true if `state` has a row in the table.
    pub fn contains_state(&self, state: &State) -> bool {
        self.values.contains_key(state)
    }

    /// Number of states with a row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
