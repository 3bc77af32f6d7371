//! Uniformly random exploration.

use rand::rngs::StdRng;
use rand::Rng;

use super::build_rng;
use super::trait_::ExplorationPolicy;
use crate::algorithms::rl::types::Action;

/// Ignores the greedy action and picks uniformly from [`Action::ALL`].
///
/// Still converges, but more slowly, since many draws bump into walls.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a random policy, seeded when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
        }
    }
}

impl ExplorationPolicy for RandomPolicy {
    fn select(&mut self, _greedy: Action, _epsilon: f64) -> Action {
        Action::ALL[self.rng.gen_range(0..Action::ALL.len())]
    }

    fn name(&self) -> &str {
        "random"
    }
}
