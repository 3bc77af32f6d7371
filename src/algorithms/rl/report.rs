//! Console rendering of value tables and policies.

use std::collections::HashMap;
use std::fmt;

use super::types::{Action, State};

/// Renders a `State -> f64` map as a grid, one text row per grid row.
///
/// Missing cells render as `0.00`.
pub struct ValueGrid<'a> {
    values: &'a HashMap<State, f64>,
    height: usize,
    width: usize,
}

impl<'a> ValueGrid<'a> {
    pub fn new(values: &'a HashMap<State, f64>, height: usize, width: usize) -> Self {
        Self {
            values,
            height,
            width,
        }
    }
}

impl fmt::Display for ValueGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i32 {
            writeln!(f, "{}", separator(self.width))?;
            for col in 0..self.width as i32 {
                let v = self
                    .values
                    .get(&State::new(row, col))
                    .copied()
                    .unwrap_or(0.0);
                // Negative values carry their own sign column.
                if v >= 0.0 {
                    write!(f, " {:.2}|", v)?;
                } else {
                    write!(f, "{:.2}|", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders a `State -> Action` map as a grid. Missing cells are blank.
pub struct PolicyGrid<'a> {
    policy: &'a HashMap<State, Action>,
    height: usize,
    width: usize,
}

impl<'a> PolicyGrid<'a> {
    pub fn new(policy: &'a HashMap<State, Action>, height: usize, width: usize) -> Self {
        Self {
            policy,
            height,
            width,
        }
    }
}

impl fmt::Display for PolicyGrid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i32 {
            writeln!(f, "{}", separator(self.width))?;
            for col in 0..self.width as i32 {
                match self.policy.get(&State::new(row, col)) {
                    Some(action) => write!(f, "  {}  |", action)?,
                    None => write!(f, "     |")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn separator(width: usize) -> String {
    "-".repeat(width * 6)
}
