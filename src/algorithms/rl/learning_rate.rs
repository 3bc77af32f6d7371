//! Per-pair adaptive learning rate.

use std::collections::HashMap;

use super::types::{Action, State};

/// Learning rate that shrinks with each visit to a `(state, action)` pair.
///
/// The rate for a pair is `base / count`, where `count` starts at 1.0 and
/// grows by `increment` after every use.
#[derive(Debug, Clone)]
pub struct AdaptiveLearningRate {
    base: f64,
    increment: f64,
    counts: HashMap<(State, Action), f64>,
}

impl AdaptiveLearningRate {
    /// Creates a schedule with no recorded visits.
    pub fn new(base: f64, increment: f64) -> Self {
        Self {
            base,
            increment,
            counts: HashMap::new(),
        }
    }

    /// Returns the rate for this visit and records the visit.
    pub fn next(&mut self, state: State, action: Action) -> f64 {
        let count = self.counts.entry((state, action)).or_insert(1.0);
        let rate = self.base / *count;
        *count += self.increment;
        rate
    }

    /// The rate the next visit to `(state, action)` would get.
    pub fn peek(&self, state: &State, action: Action) -> f64 {
        self.base / self.count(state, action)
    }

    /// Current visit count for the pair (1.0 when never visited).
    pub fn count(&self, state: &State, action: Action) -> f64 {
        self.counts.get(&(*state, action)).copied().unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_uses_base_rate() {
        let mut lr = AdaptiveLearningRate::new(0.1, 0.005);
        assert_eq!(lr.next(State::new(0, 0), Action::Right), 0.1);
        assert!((lr.count(&State::new(0, 0), Action::Right) - 1.005).abs() < 1e-12);
    }

    #[test]
    fn rate_strictly_decreases_on_repeat_visits() {
        let mut lr = AdaptiveLearningRate::new(0.1, 0.005);
        let s = State::new(1, 2);
        let mut previous = f64::INFINITY;
        for _ in 0..50 {
            let rate = lr.next(s, Action::Down);
            assert!(rate < previous);
            previous = rate;
        }
    }

    #[test]
    fn pairs_are_independent() {
        let mut lr = AdaptiveLearningRate::new(0.1, 0.005);
        let s = State::new(0, 0);
        lr.next(s, Action::Down);
        lr.next(s, Action::Down);
        assert_eq!(lr.peek(&s, Action::Right), 0.1);
        assert!(lr.peek(&s, Action::Down) < 0.1);
    }
}
