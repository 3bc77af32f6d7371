//! Pure exploitation.

use super::trait_::ExplorationPolicy;
use crate::algorithms::rl::types::Action;

/// Always returns the greedy action, whatever epsilon is.
///
/// Used to follow a learned policy without exploration.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPolicy;

impl ExplorationPolicy for GreedyPolicy {
    fn select(&mut self, greedy: Action, _epsilon: f64) -> Action {
        greedy
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
