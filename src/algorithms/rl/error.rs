use thiserror::Error;

use super::types::State;

/// Errors that can occur while constructing a grid environment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("State {0} lies outside the grid")]
    OutOfBounds(State),

    #[error("Non-terminal state {0} has no legal actions")]
    EmptyActionSet(State),

    #[error("Cannot place {requested} obstacles: only {available} free cells")]
    TooManyObstacles { requested: usize, available: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_display() {
        let e = GridError::InvalidDimensions {
            height: 0,
            width: 3,
        };
        assert_eq!(e.to_string(), "Grid dimensions must be positive, got 0x3");
    }

    #[test]
    fn out_of_bounds_display() {
        let e = GridError::OutOfBounds(State::new(5, -1));
        assert_eq!(e.to_string(), "State (5, -1) lies outside the grid");
    }

    #[test]
    fn too_many_obstacles_display() {
        let e = GridError::TooManyObstacles {
            requested: 9,
            available: 8,
        };
        assert!(e.to_string().contains("9 obstacles"));
    }
}
