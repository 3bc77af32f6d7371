//! Tabular reinforcement learning on a grid world.
//!
//! [`GridEnvironment`] owns the grid dynamics, [`QLearningTrainer`] learns
//! action values against it, and the [`report`] module renders the results.

pub mod config;
pub mod environment;
pub mod error;
pub mod grid_factory;
pub mod learning_rate;
pub mod metrics;
pub mod policy;
pub mod q_table;
pub mod report;
pub mod trainer;
pub mod types;

pub use config::{EpsilonSchedule, QLearningConfig};
pub use environment::GridEnvironment;
pub use error::GridError;
pub use grid_factory::GridFactory;
pub use learning_rate::AdaptiveLearningRate;
pub use metrics::{PolicyRollout, TrainingDiagnostics, TrainingReport};
pub use policy::{EpsilonGreedy, ExplorationPolicy, GreedyPolicy, RandomPolicy};
pub use q_table::QTable;
pub use report::{PolicyGrid, ValueGrid};
pub use trainer::QLearningTrainer;
pub use types::{Action, State};
