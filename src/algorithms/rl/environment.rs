//! Deterministic grid-world environment.
//!
//! A state is terminal exactly when it has no entry in the legal-action
//! table. Rewards are looked up on arrival, so the reward returned by
//! [`GridEnvironment::step`] belongs to the state the agent ends up in.

use std::collections::HashMap;

use super::error::GridError;
use super::types::{Action, State};

/// A rectangular grid with a reward table and a legal-action table.
///
/// # Lifecycle
///
/// 1. Build with [`GridEnvironment::new`] (or through
///    [`GridFactory`](super::grid_factory::GridFactory)).
/// 2. Call [`GridEnvironment::reset`] with the episode's start state.
/// 3. Call [`GridEnvironment::step`] until [`GridEnvironment::is_game_over`].
#[derive(Debug, Clone)]
pub struct GridEnvironment {
    height: usize,
    width: usize,
    current: State,
    rewards: HashMap<State, f64>,
    legal_actions: HashMap<State, Vec<Action>>,
}

impl GridEnvironment {
    /// Creates a new environment positioned at `start`.
    ///
    /// Every key of `rewards` and `legal_actions` must lie inside the grid
    /// and every legal-action set must be non-empty. `start` is not
    /// validated, matching [`GridEnvironment::reset`].
    pub fn new(
        height: usize,
        width: usize,
        start: State,
        rewards: HashMap<State, f64>,
        legal_actions: HashMap<State, Vec<Action>>,
    ) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }
        for state in rewards.keys().chain(legal_actions.keys()) {
            if !state.in_bounds(height, width) {
                return Err(GridError::OutOfBounds(*state));
            }
        }
        if let Some((state, _)) = legal_actions.iter().find(|(_, a)| a.is_empty()) {
            return Err(GridError::EmptyActionSet(*state));
        }

        Ok(Self {
            height,
            width,
            current: start,
            rewards,
            legal_actions,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Moves the agent to `state` unconditionally.
    pub fn reset(&mut self, state: State) {
        self.current = state;
    }

    /// The agent's current position.
    pub fn current_state(&self) -> State {
        self.current
    }

    /// Returns true if `state` has no legal actions.
    pub fn is_terminal(&self, state: &State) -> bool {
        !self.legal_actions.contains_key(state)
    }

    /// Returns true if the current state is terminal.
    pub fn is_game_over(&self) -> bool {
        self.is_terminal(&self.current)
    }

    /// Applies `action` if it is legal from the current state and returns
    /// the reward of the resulting state (0 when it has none).
    ///
    /// Illegal actions leave the agent where it is; the reward of the
    /// unchanged state is still returned.
    pub fn step(&mut self, action: Action) -> f64 {
        let legal = self
            .legal_actions
            .get(&self.current)
            .is_some_and(|actions| actions.contains(&action));
        if legal {
            self.current = self.current.shifted(action);
        }
        self.reward_at(&self.current)
    }

    /// Reverts a previous `step(action)` by applying the inverse delta.
    ///
    /// # Panics
    ///
    /// Panics if the resulting position is not a known state. That can only
    /// happen when undoing a move that was never applied, which is a caller
    /// bug rather than a recoverable condition.
    pub fn undo_step(&mut self, action: Action) {
        self.current = self.current.shifted(action.inverse());
        assert!(
            self.contains_state(&self.current),
            "undo of {:?} left the agent at unknown state {}",
            action,
            self.current
        );
    }

    /// Legal actions from `state`; empty for terminal states.
    pub fn actions_at(&self, state: &State) -> &[Action] {
        self.legal_actions
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Reward received on arrival at `state`.
    pub fn reward_at(&self, state: &State) -> f64 {
        self.rewards.get(state).copied().unwrap_or(0.0)
    }

    /// The reward table.
    pub fn rewards(&self) -> &HashMap<State, f64> {
        &self.rewards
    }

    /// The legal-action table.
    pub fn legal_actions(&self) -> &HashMap<State, Vec<Action>> {
        &self.legal_actions
    }

    /// Non-terminal states, in no particular order.
    pub fn non_terminal_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.legal_actions.keys()
    }

    /// Union of legal-action keys and reward keys, each state yielded once.
    ///
    /// The iterator is lazy and can be recreated at will; callers must not
    /// rely on its order.
    pub fn all_states(&self) -> impl Iterator<Item = State> + '_ {
        self.legal_actions.keys().copied().chain(
            self.rewards
                .keys()
                .filter(|s| !self.legal_actions.contains_key(s))
                .copied(),
        )
    }

    /// Returns true if `state` appears in either table.
    pub fn contains_state(&self, state: &State) -> bool {
        self.legal_actions.contains_key(state) || self.rewards.contains_key(state)
    }
}
