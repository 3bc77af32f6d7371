//! Grid construction with randomly placed obstacles.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::environment::GridEnvironment;
use super::error::GridError;
use super::types::{Action, State};

/// Reward for reaching the goal.
pub const GOAL_REWARD: f64 = 1.0;

/// Reward for stepping on an obstacle.
pub const OBSTACLE_REWARD: f64 = -1.0;

/// Builds [`GridEnvironment`]s from a handful of layout parameters.
///
/// The goal and every obstacle are terminal reward states. All other cells
/// get legal actions derived from grid-edge adjacency. When `step_cost` is
/// set, every cell that is neither a reward state nor the start receives
/// that reward as well.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridFactory {
    /// Number of rows.
    pub height: usize,
    /// Number of columns.
    pub width: usize,
    /// Initial agent position.
    pub start: State,
    /// Goal state, rewarded with [`GOAL_REWARD`].
    pub goal: State,
    /// Number of obstacles, each rewarded with [`OBSTACLE_REWARD`].
    pub obstacles: usize,
    /// Uniform per-step reward for ordinary cells.
    pub step_cost: Option<f64>,
}

impl GridFactory {
    /// The standard layout: 5×5, goal at (3,3), one obstacle, no step cost.
    pub fn standard() -> Self {
        Self::default()
    }

    /// The negative layout: 5×5, goal at (3,3), three obstacles and a step
    /// cost of −0.1 on every ordinary cell.
    pub fn negative() -> Self {
        Self {
            obstacles: 3,
            step_cost: Some(-0.1),
            ..Self::default()
        }
    }

    /// Builds an environment, drawing obstacle positions from `rng`.
    ///
    /// Obstacles never land on the goal or on each other. They may land on
    /// the start state, in which case every episode ends immediately.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GridEnvironment, GridError> {
        if self.height == 0 || self.width == 0 {
            return Err(GridError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        for state in [self.start, self.goal] {
            if !state.in_bounds(self.height, self.width) {
                return Err(GridError::OutOfBounds(state));
            }
        }
        let available = self.height * self.width - 1;
        if self.obstacles > available {
            return Err(GridError::TooManyObstacles {
                requested: self.obstacles,
                available,
            });
        }

        let mut rewards = HashMap::from([(self.goal, GOAL_REWARD)]);
        for _ in 0..self.obstacles {
            loop {
                let candidate = State::new(
                    rng.gen_range(0..self.height) as i32,
                    rng.gen_range(0..self.width) as i32,
                );
                if !rewards.contains_key(&candidate) {
                    debug!(obstacle = %candidate, "placed obstacle");
                    rewards.insert(candidate, OBSTACLE_REWARD);
                    break;
                }
            }
        }

        let mut legal_actions = HashMap::new();
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let state = State::new(row, col);
                if rewards.contains_key(&state) {
                    continue;
                }
                let actions: Vec<Action> = Action::ALL
                    .into_iter()
                    .filter(|a| state.shifted(*a).in_bounds(self.height, self.width))
                    .collect();
                if actions.is_empty() {
                    return Err(GridError::EmptyActionSet(state));
                }
                legal_actions.insert(state, actions);
            }
        }

        if let Some(cost) = self.step_cost {
            for row in 0..self.height as i32 {
                for col in 0..self.width as i32 {
                    let state = State::new(row, col);
                    if !rewards.contains_key(&state) && state != self.start {
                        rewards.insert(state, cost);
                    }
                }
            }
        }

        GridEnvironment::new(
            self.height,
            self.width,
            self.start,
            rewards,
            legal_actions,
        )
    }
}

impl Default for GridFactory {
    fn default() -> Self {
        Self {
            height: 5,
            width: 5,
            start: State::new(0, 0),
            goal: State::new(3, 3),
            obstacles: 1,
            step_cost: None,
        }
    }
}
