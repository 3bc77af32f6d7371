//! Core value types for the grid world: states and actions.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell of the grid, addressed as `(row, col)`.
///
/// Rows grow downward and columns grow to the right, so [`Action::Up`]
/// decrements the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct State {
    pub row: i32,
    pub col: i32,
}

impl State {
    /// Creates a new state.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the state reached by applying `action`'s delta, without any
    /// bounds or legality check.
    pub fn shifted(&self, action: Action) -> Self {
        let (dr, dc) = action.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Returns true if this state lies in `[0, height) × [0, width)`.
    pub fn in_bounds(&self, height: usize, width: usize) -> bool {
        self.row >= 0
            && self.col >= 0
            && (self.row as usize) < height
            && (self.col as usize) < width
    }
}

impl From<(i32, i32)> for State {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four grid moves.
///
/// The declaration order is the canonical enumeration order used for
/// tie-breaking in greedy action selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions in canonical order.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Coordinate delta `(d_row, d_col)` for this action.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// The action that undoes this one.
    pub fn inverse(&self) -> Action {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }

    /// Position of this action in [`Action::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Action::Up => 0,
            Action::Down => 1,
            Action::Left => 2,
            Action::Right => 3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Up => write!(f, "U"),
            Action::Down => write!(f, "D"),
            Action::Left => write!(f, "L"),
            Action::Right => write!(f, "R"),
        }
    }
}
