//! Exploration policy trait.

use crate::algorithms::rl::types::Action;

/// Decides which action is actually executed given the learner's greedy
/// choice and the current exploration rate.
pub trait ExplorationPolicy: Send + Sync {
    /// Selects the action to execute.
    ///
    /// # Arguments
    ///
    /// * `greedy` - The action with the highest current estimate
    /// * `epsilon` - Exploration rate in `[0, 1]`
    fn select(&mut self, greedy: Action, epsilon: f64) -> Action;

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
