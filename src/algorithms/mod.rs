pub mod rl;

pub use rl::QLearningTrainer;

use rl::{GridEnvironment, TrainingReport};

/// A control algorithm that learns a policy by interacting with a grid.
pub trait ControlAlgorithm {
    /// Trains against `env` and returns the learned policy, value function
    /// and diagnostics.
    ///
    /// # Arguments
    ///
    /// * `env` - The environment to interact with; left at whatever state
    ///   the last episode ended in
    fn learn(&mut self, env: &mut GridEnvironment) -> TrainingReport;

    /// Returns a human-readable name for this algorithm.
    fn name(&self) -> &str;
}
