//! Tabular Q-learning trainer.
//!
//! Each episode resets the environment to the configured start state and
//! walks it until a terminal state, updating
//!
//! ```text
//! Q(s,a) ← Q(s,a) + α(s,a) · [r + γ · max_a' Q(s',a') − Q(s,a)]
//! ```
//!
//! after every move. The bootstrap maximum covers the full action set,
//! independent of the action that will actually be executed next.

use std::collections::HashMap;

use tracing::{debug, info};

use super::config::QLearningConfig;
use super::environment::GridEnvironment;
use super::learning_rate::AdaptiveLearningRate;
use super::metrics::{TrainingDiagnostics, TrainingReport};
use super::policy::{EpsilonGreedy, ExplorationPolicy};
use super::q_table::QTable;
use crate::algorithms::ControlAlgorithm;

/// Off-policy TD control over a [`GridEnvironment`].
///
/// Owns the Q-table, the adaptive learning-rate counters and the
/// diagnostics; the environment is only driven through `reset` and `step`.
pub struct QLearningTrainer {
    /// Training hyperparameters.
    pub config: QLearningConfig,
    q_table: QTable,
    learning_rate: AdaptiveLearningRate,
    diagnostics: TrainingDiagnostics,
    exploration: Box<dyn ExplorationPolicy>,
}

impl QLearningTrainer {
    /// Creates a trainer exploring epsilon-greedily, seeded from
    /// `config.seed`.
    pub fn new(config: QLearningConfig) -> Self {
        let exploration = Box::new(EpsilonGreedy::new(config.seed));
        Self::with_policy(config, exploration)
    }

    /// Creates a trainer with a custom exploration policy.
    pub fn with_policy(config: QLearningConfig, exploration: Box<dyn ExplorationPolicy>) -> Self {
        let learning_rate = AdaptiveLearningRate::new(config.alpha, config.visit_increment);
        Self {
            config,
            q_table: QTable::new(),
            learning_rate,
            diagnostics: TrainingDiagnostics::default(),
            exploration,
        }
    }

    /// The learned action values.
    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Diagnostics gathered so far.
    pub fn diagnostics(&self) -> &TrainingDiagnostics {
        &self.diagnostics
    }

    /// The per-pair learning-rate counters.
    pub fn learning_rate(&self) -> &AdaptiveLearningRate {
        &self.learning_rate
    }

    /// Runs the full episode budget against `env` and derives the greedy
    /// policy and value function from the final Q-table.
    ///
    /// Every call starts from a zeroed Q-table and fresh counters.
    ///
    /// # Panics
    ///
    /// Panics if a step lands on a state outside `env.all_states()`.
    pub fn train(&mut self, env: &mut GridEnvironment) -> TrainingReport {
        self.q_table = QTable::with_states(env.all_states());
        self.learning_rate =
            AdaptiveLearningRate::new(self.config.alpha, self.config.visit_increment);
        self.diagnostics = TrainingDiagnostics::default();

        info!(
            episodes = self.config.episodes,
            states = self.q_table.len(),
            policy = self.exploration.name(),
            "starting Q-learning"
        );

        let mut episodes_run = 0;
        for episode in 0..self.config.episodes {
            let epsilon = self.config.epsilon.epsilon_at(episode);
            if self.config.log_interval > 0 && episode % self.config.log_interval == 0 {
                debug!(episode, epsilon, "training progress");
            }

            let biggest_change = self.run_episode(env, epsilon);
            self.diagnostics.finish_episode(biggest_change);
            episodes_run += 1;

            if let Some(threshold) = self.config.convergence_threshold {
                if biggest_change < threshold {
                    info!(episode, biggest_change, threshold, "converged, stopping early");
                    break;
                }
            }
        }

        let report = self.report(env, episodes_run);
        info!(
            episodes = episodes_run,
            updates = report.total_updates,
            "Q-learning finished"
        );
        report
    }

    /// Plays one episode and returns its largest absolute Q change.
    fn run_episode(&mut self, env: &mut GridEnvironment, epsilon: f64) -> f64 {
        env.reset(self.config.start);
        let mut state = env.current_state();
        let (mut action, _) = self.q_table.greedy_action(&state);
        let mut biggest_change: f64 = 0.0;

        while !env.is_game_over() {
            action = self.exploration.select(action, epsilon);
            let reward = env.step(action);
            let next = env.current_state();
            assert!(
                self.q_table.contains_state(&next),
                "transition into unknown state {}",
                next
            );

            let alpha = self.learning_rate.next(state, action);
            let (next_action, next_max) = self.q_table.greedy_action(&next);
            let old = self.q_table.value_of(&state, action);
            let target = reward + self.config.gamma * next_max;
            let new = old + alpha * (target - old);
            self.q_table.update(state, action, new);
            biggest_change = biggest_change.max((new - old).abs());

            self.diagnostics.record_update(state);

            state = next;
            action = next_action;
        }

        biggest_change
    }

    fn report(&self, env: &GridEnvironment, episodes_run: usize) -> TrainingReport {
        let mut policy = HashMap::new();
        let mut values = HashMap::new();
        for state in env.non_terminal_states() {
            let (action, value) = self.q_table.greedy_action(state);
            policy.insert(*state, action);
            values.insert(*state, value);
        }

        TrainingReport {
            policy,
            values,
            deltas: self.diagnostics.deltas.clone(),
            update_distribution: self.diagnostics.update_distribution(),
            episodes_run,
            total_updates: self.diagnostics.total_updates(),
        }
    }
}

impl ControlAlgorithm for QLearningTrainer {
    fn learn(&mut self, env: &mut GridEnvironment) -> TrainingReport {
        self.train(env)
    }

    fn name(&self) -> &str {
        "q_learning"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::rl::types::{Action, State};

    /// 1×3 corridor with the goal at the right end.
    fn corridor() -> GridEnvironment {
        let rewards = HashMap::from([(State::new(0, 2), 1.0)]);
        let legal = HashMap::from([
            (State::new(0, 0), vec![Action::Right]),
            (State::new(0, 1), vec![Action::Left, Action::Right]),
        ]);
        GridEnvironment::new(1, 3, State::new(0, 0), rewards, legal).unwrap()
    }

    fn config(episodes: usize) -> QLearningConfig {
        QLearningConfig {
            episodes,
            seed: Some(11),
            ..QLearningConfig::default()
        }
    }

    #[test]
    fn one_delta_per_episode() {
        let mut env = corridor();
        let mut trainer = QLearningTrainer::new(config(25));
        let report = trainer.train(&mut env);
        assert_eq!(report.deltas.len(), 25);
        assert_eq!(report.episodes_run, 25);
        assert!(report.deltas.iter().all(|d| *d >= 0.0));
    }

    #[test]
    fn first_update_matches_rule() {
        let mut env = corridor();
        // Single-step episode: (0,1) --Right--> goal.
        let mut trainer = QLearningTrainer::with_policy(
            QLearningConfig {
                start: State::new(0, 1),
                ..config(1)
            },
            Box::new(FixedPolicy(Action::Right)),
        );
        let report = trainer.train(&mut env);
        // α = 0.1, target = 1 + 0.9 · 0 → Q = 0.1.
        let q = trainer.q_table().value_of(&State::new(0, 1), Action::Right);
        assert!((q - 0.1).abs() < 1e-12);
        assert!((report.deltas[0] - 0.1).abs() < 1e-12);
        assert_eq!(report.total_updates, 1);
    }

    #[test]
    fn learning_rate_shrinks_with_visits() {
        let mut env = corridor();
        let mut trainer = QLearningTrainer::with_policy(
            QLearningConfig {
                start: State::new(0, 1),
                ..config(3)
            },
            Box::new(FixedPolicy(Action::Right)),
        );
        trainer.train(&mut env);
        let count = trainer
            .learning_rate()
            .count(&State::new(0, 1), Action::Right);
        assert!((count - 1.015).abs() < 1e-12);

        // Values after three visits: 0.1, then 0.1 + (0.1/1.005)·0.9, ...
        let q1 = 0.1;
        let q2 = q1 + (0.1 / 1.005) * (1.0 - q1);
        let q3 = q2 + (0.1 / 1.010) * (1.0 - q2);
        let q = trainer.q_table().value_of(&State::new(0, 1), Action::Right);
        assert!((q - q3).abs() < 1e-12);
    }

    #[test]
    fn illegal_moves_still_update() {
        let mut env = corridor();
        let mut trainer = QLearningTrainer::with_policy(
            config(1),
            Box::new(ScriptedPolicy(vec![Action::Up, Action::Right, Action::Right])),
        );
        let report = trainer.train(&mut env);
        assert_eq!(report.total_updates, 3);
        // Bumping into the wall at (0,0): reward 0, bootstrap from (0,0) itself.
        assert_eq!(
            trainer.q_table().value_of(&State::new(0, 0), Action::Up),
            0.0
        );
        assert_eq!(trainer.diagnostics().state_updates[&State::new(0, 0)], 2);
    }

    #[test]
    fn policy_covers_only_non_terminal_states() {
        let mut env = corridor();
        let mut trainer = QLearningTrainer::new(config(50));
        let report = trainer.train(&mut env);
        assert_eq!(report.policy.len(), 2);
        assert_eq!(report.values.len(), 2);
        assert!(!report.policy.contains_key(&State::new(0, 2)));
    }

    #[test]
    fn early_stop_honours_threshold() {
        let mut env = corridor();
        let mut trainer = QLearningTrainer::new(QLearningConfig {
            convergence_threshold: Some(1e-3),
            ..config(100_000)
        });
        let report = trainer.train(&mut env);
        assert!(report.episodes_run < 100_000);
        assert!(*report.deltas.last().unwrap() < 1e-3);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut env_a = corridor();
        let mut env_b = corridor();
        let a = QLearningTrainer::new(config(200)).train(&mut env_a);
        let b = QLearningTrainer::new(config(200)).train(&mut env_b);
        assert_eq!(a.deltas, b.deltas);
    }

    #[test]
    #[should_panic(expected = "unknown state")]
    fn transition_into_unknown_state_panics() {
        // (0,0) may move right, but (0,1) is in neither table.
        let legal = HashMap::from([(State::new(0, 0), vec![Action::Right])]);
        let mut env = GridEnvironment::new(1, 2, State::new(0, 0), HashMap::new(), legal).unwrap();
        let mut trainer =
            QLearningTrainer::with_policy(config(1), Box::new(FixedPolicy(Action::Right)));
        trainer.train(&mut env);
    }

    /// Always plays the same action.
    struct FixedPolicy(Action);

    impl ExplorationPolicy for FixedPolicy {
        fn select(&mut self, _greedy: Action, _epsilon: f64) -> Action {
            self.0
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    /// Plays a fixed script, then falls back to the greedy action.
    struct ScriptedPolicy(Vec<Action>);

    impl ExplorationPolicy for ScriptedPolicy {
        fn select(&mut self, greedy: Action, _epsilon: f64) -> Action {
            if self.0.is_empty() {
                greedy
            } else {
                self.0.remove(0)
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }
}
