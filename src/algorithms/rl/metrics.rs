//! Training diagnostics and policy evaluation.
//!
//! Collects the per-episode convergence curve and per-state update counts
//! while training, packages the learned policy and value function once
//! training ends, and replays a learned policy against an environment.

use std::collections::HashMap;
use std::fmt;

use super::environment::GridEnvironment;
use super::types::{Action, State};

/// Bookkeeping accumulated by the trainer across all episodes.
#[derive(Debug, Clone, Default)]
pub struct TrainingDiagnostics {
    /// Largest absolute Q change of each episode, in episode order.
    pub deltas: Vec<f64>,
    /// Number of Q updates made from each state.
    pub state_updates: HashMap<State, u64>,
}

impl TrainingDiagnostics {
    /// Records one Q update made from `state`.
    pub fn record_update(&mut self, state: State) {
        *self.state_updates.entry(state).or_insert(0) += 1;
    }

    /// Closes an episode with its largest change.
    pub fn finish_episode(&mut self, biggest_change: f64) {
        self.deltas.push(biggest_change);
    }

    /// Total number of Q updates.
    pub fn total_updates(&self) -> u64 {
        self.state_updates.values().sum()
    }

    /// Update counts normalized to sum to 1. Empty when nothing was updated.
    pub fn update_distribution(&self) -> HashMap<State, f64> {
        let total = self.total_updates();
        if total == 0 {
            return HashMap::new();
        }
        self.state_updates
            .iter()
            .map(|(s, n)| (*s, *n as f64 / total as f64))
            .collect()
    }
}

/// Everything handed to the reporting side once training completes.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    /// Greedy action for every non-terminal state.
    pub policy: HashMap<State, Action>,
    /// Greedy value for every non-terminal state.
    pub values: HashMap<State, f64>,
    /// Per-episode convergence curve.
    pub deltas: Vec<f64>,
    /// Per-state share of all updates.
    pub update_distribution: HashMap<State, f64>,
    /// Episodes actually run (fewer than the budget after an early stop).
    pub episodes_run: usize,
    /// Total number of Q updates.
    pub total_updates: u64,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Training Report ({} episodes) ===", self.episodes_run)?;
        writeln!(f, "  Total updates:        {}", self.total_updates)?;
        writeln!(f, "  Policy states:        {}", self.policy.len())?;
        if let Some(last) = self.deltas.last() {
            writeln!(f, "  Final max change:     {:.6}", last)?;
        }
        let peak = self.deltas.iter().copied().fold(0.0, f64::max);
        writeln!(f, "  Peak max change:      {:.6}", peak)
    }
}

/// Outcome of following a fixed policy through the environment.
#[derive(Debug, Clone)]
pub struct PolicyRollout {
    /// Visited states, starting with the start state.
    pub path: Vec<State>,
    /// Sum of rewards received.
    pub total_reward: f64,
    /// Whether a terminal state was reached within the step limit.
    pub reached_terminal: bool,
}

impl PolicyRollout {
    /// Follows `policy` from `start` for at most `max_steps` moves.
    ///
    /// Stops early on a terminal state or on a state the policy has no
    /// entry for. Leaves `env` positioned at the last visited state.
    pub fn follow(
        env: &mut GridEnvironment,
        policy: &HashMap<State, Action>,
        start: State,
        max_steps: usize,
    ) -> Self {
        env.reset(start);
        let mut path = vec![start];
        let mut total_reward = 0.0;

        for _ in 0..max_steps {
            if env.is_game_over() {
                break;
            }
            let Some(action) = policy.get(&env.current_state()) else {
                break;
            };
            total_reward += env.step(*action);
            path.push(env.current_state());
        }

        Self {
            path,
            total_reward,
            reached_terminal: env.is_game_over(),
        }
    }

    /// Number of moves taken.
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }
}
