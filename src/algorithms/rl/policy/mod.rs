//! Exploration policies.

pub mod epsilon_greedy;
pub mod greedy;
pub mod random;
pub mod trait_;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use epsilon_greedy::EpsilonGreedy;
pub use greedy::GreedyPolicy;
pub use random::RandomPolicy;
pub use trait_::ExplorationPolicy;

/// Seeded RNG when a seed is given, entropy-seeded otherwise.
pub(crate) fn build_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
