//! Epsilon-greedy exploration.

use rand::rngs::StdRng;
use rand::Rng;

use super::build_rng;
use super::trait_::ExplorationPolicy;
use crate::algorithms::rl::types::Action;

/// Keeps the greedy action with probability `1 − epsilon`, otherwise draws
/// uniformly from [`Action::ALL`].
///
/// The random branch may draw the greedy action again, so every action keeps
/// a nonzero selection probability while `epsilon > 0`.
pub struct EpsilonGreedy {
    rng: StdRng,
}

impl EpsilonGreedy {
    /// Creates an epsilon-greedy selector, seeded when `seed` is given.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: build_rng(seed),
        }
    }
}

impl ExplorationPolicy for EpsilonGreedy {
    fn select(&mut self, greedy: Action, epsilon: f64) -> Action {
        let p: f64 = self.rng.gen();
        if p < 1.0 - epsilon {
            greedy
        } else {
            Action::ALL[self.rng.gen_range(0..Action::ALL.len())]
        }
    }

    fn name(&self) -> &str {
        "epsilon_greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_epsilon_is_greedy() {
        let mut policy = EpsilonGreedy::new(Some(1));
        for _ in 0..100 {
            assert_eq!(policy.select(Action::Right, 0.0), Action::Right);
        }
    }

    #[test]
    fn full_epsilon_explores_every_action() {
        let mut policy = EpsilonGreedy::new(Some(1));
        let mut counts = [0usize; 4];
        for _ in 0..400 {
            counts[policy.select(Action::Right, 1.0).index()] += 1;
        }
        assert!(counts.iter().all(|c| *c > 0));
    }

    #[test]
    fn half_epsilon_mostly_greedy() {
        let mut policy = EpsilonGreedy::new(Some(9));
        let greedy = (0..2_000)
            .filter(|_| policy.select(Action::Down, 0.5) == Action::Down)
            .count();
        // Expected share is 0.5 + 0.5 / 4 = 0.625.
        assert!(greedy > 1_100 && greedy < 1_400, "greedy count {}", greedy);
    }

    #[test]
    fn same_seed_same_choices() {
        let mut a = EpsilonGreedy::new(Some(5));
        let mut b = EpsilonGreedy::new(Some(5));
        for _ in 0..50 {
            assert_eq!(a.select(Action::Up, 0.3), b.select(Action::Up, 0.3));
        }
    }
}
