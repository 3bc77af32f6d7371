//! gridq - tabular Q-learning on a deterministic grid world
//!
//! A small episodic reinforcement-learning sandbox: a grid environment with
//! obstacles and terminal rewards, and an off-policy TD learner with
//! epsilon-greedy exploration and a per-pair adaptive learning rate.

pub mod algorithms;

pub use algorithms::rl::{
    Action, GridEnvironment, GridError, GridFactory, QLearningConfig, QLearningTrainer, State,
    TrainingReport,
};
pub use algorithms::ControlAlgorithm;
