//! Configuration for the Q-learning trainer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::State;

/// Episode-indexed exploration schedule.
///
/// Epsilon is `numerator / t`, where the time counter `t` starts at 1.0
/// and grows by `step` at the start of every episode whose index is a
/// multiple of `interval` (episode 0 included).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpsilonSchedule {
    /// Epsilon before any decay.
    pub numerator: f64,
    /// Increment applied to the time counter.
    pub step: f64,
    /// Number of episodes between increments.
    pub interval: usize,
}

impl EpsilonSchedule {
    /// Exploration rate used during episode `episode` (0-based).
    pub fn epsilon_at(&self, episode: usize) -> f64 {
        let bumps = if self.interval == 0 {
            0
        } else {
            episode / self.interval + 1
        };
        let t = 1.0 + self.step * bumps as f64;
        self.numerator / t
    }
}

impl Default for EpsilonSchedule {
    fn default() -> Self {
        Self {
            numerator: 0.5,
            step: 0.01,
            interval: 100,
        }
    }
}

/// Hyperparameters for tabular Q-learning.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QLearningConfig {
    /// Discount factor γ.
    pub gamma: f64,
    /// Base learning rate α, divided by the per-pair visit count.
    pub alpha: f64,
    /// Amount added to a pair's visit count after each update.
    pub visit_increment: f64,
    /// Number of episodes to run.
    pub episodes: usize,
    /// State every episode starts from.
    pub start: State,
    /// Exploration schedule.
    pub epsilon: EpsilonSchedule,
    /// Stop early once an episode's largest Q change falls below this.
    ///
    /// `None` keeps the episode budget as the only stopping condition.
    pub convergence_threshold: Option<f64>,
    /// Seed for the exploration RNG; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Episodes between progress log lines (0 disables them).
    pub log_interval: usize,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            alpha: 0.1,
            visit_increment: 0.005,
            episodes: 10_000,
            start: State::new(0, 0),
            epsilon: EpsilonSchedule::default(),
            convergence_threshold: None,
            seed: None,
            log_interval: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_reference_constants() {
        let cfg = QLearningConfig::default();
        assert_eq!(cfg.gamma, 0.9);
        assert_eq!(cfg.alpha, 0.1);
        assert_eq!(cfg.episodes, 10_000);
        assert_eq!(cfg.start, State::new(0, 0));
        assert!(cfg.convergence_threshold.is_none());
    }

    #[test]
    fn first_episode_is_already_decayed() {
        let schedule = EpsilonSchedule::default();
        assert!((schedule.epsilon_at(0) - 0.5 / 1.01).abs() < 1e-12);
        assert!((schedule.epsilon_at(99) - 0.5 / 1.01).abs() < 1e-12);
        assert!((schedule.epsilon_at(100) - 0.5 / 1.02).abs() < 1e-12);
    }

    #[test]
    fn epsilon_decays_over_budget() {
        let schedule = EpsilonSchedule::default();
        let early = schedule.epsilon_at(0);
        let late = schedule.epsilon_at(9_999);
        assert!(late < early);
        assert!((late - 0.5 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_interval_disables_decay() {
        let schedule = EpsilonSchedule {
            interval: 0,
            ..EpsilonSchedule::default()
        };
        assert_eq!(schedule.epsilon_at(5_000), 0.5);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_serializes() {
        let json = serde_json::to_string(&QLearningConfig::default()).unwrap();
        assert!(json.contains("\"gamma\":0.9"));
    }
}
