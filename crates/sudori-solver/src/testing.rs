//! Test utilities for strategy implementations.
//!
//! [`StrategyTester`] tracks the initial and current state of a puzzle,
//! applies strategies, and asserts on the resulting placements and
//! eliminations with `#[track_caller]` reporting. All methods return `self`
//! for fluent chaining.

use std::str::FromStr as _;

use sudori_core::{Digit, DigitGrid, DigitSet, Position, Puzzle};

use crate::Strategy;

/// A test harness for verifying strategy implementations.
#[derive(Debug)]
pub struct StrategyTester {
    initial: Puzzle,
    current: Puzzle,
}

impl StrategyTester {
    /// Creates a new tester from an initial puzzle state.
    #[must_use]
    pub fn new(initial: Puzzle) -> Self {
        Self {
            initial,
            current: initial,
        }
    }

    /// Creates a new tester from a board string, with candidates recomputed.
    ///
    /// The format matches [`DigitGrid::from_str`]: digits `1`-`9`, empties
    /// `0`/`.`/`_`, whitespace ignored.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid = DigitGrid::from_str(s).unwrap();
        Self::new(Puzzle::from_board(grid))
    }

    /// Returns the current puzzle state.
    #[must_use]
    pub fn current(&self) -> &Puzzle {
        &self.current
    }

    /// Runs one scan of the strategy and applies every returned step.
    #[track_caller]
    pub fn apply_once<S>(mut self, strategy: &S) -> Self
    where
        S: Strategy + ?Sized,
    {
        let steps = strategy.find_steps(&self.current);
        for step in &steps {
            step.apply(&mut self.current);
        }
        self
    }

    /// Applies the strategy repeatedly until a scan returns no steps.
    #[track_caller]
    pub fn apply_until_stuck<S>(mut self, strategy: &S) -> Self
    where
        S: Strategy + ?Sized,
    {
        loop {
            let steps = strategy.find_steps(&self.current);
            if steps.is_empty() {
                break;
            }
            for step in &steps {
                step.apply(&mut self.current);
            }
        }
        self
    }

    /// Asserts that one scan of the strategy returns exactly `count` steps.
    #[track_caller]
    pub fn assert_finds<S>(self, strategy: &S, count: usize) -> Self
    where
        S: Strategy + ?Sized,
    {
        let steps = strategy.find_steps(&self.current);
        assert_eq!(
            steps.len(),
            count,
            "expected {} to find {count} step(s), got {}: {steps:#?}",
            strategy.name(),
            steps.len()
        );
        self
    }

    /// Asserts that a previously empty cell now holds the given digit.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        assert!(
            self.initial.board().is_empty_cell(pos),
            "expected {pos} to start empty, but it held {:?}",
            self.initial.board().get(pos)
        );
        assert_eq!(
            self.current.board().get(pos),
            Some(digit),
            "expected {digit} to be placed at {pos}, board holds {:?}",
            self.current.board().get(pos)
        );
        self
    }

    /// Asserts that all given candidates were removed from a cell.
    ///
    /// The digits must have been present initially; other candidates may
    /// have been removed as well.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        assert_eq!(
            initial & digits,
            digits,
            "expected initial candidates at {pos} to include {digits:?}, got {initial:?}"
        );
        assert!(
            (current & digits).is_empty(),
            "expected {digits:?} to be removed from {pos}, but {:?} remain",
            current & digits
        );
        self
    }

    /// Asserts that exactly the given candidates were removed from a cell.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates_at(pos);
        let current = self.current.candidates_at(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, digits,
            "expected exactly {digits:?} removed from {pos} \
             (initial {initial:?}, current {current:?})"
        );
        self
    }

    /// Asserts that a cell's board value and candidates are unchanged.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.initial.board().get(pos),
            self.current.board().get(pos),
            "expected the board at {pos} to be unchanged"
        );
        assert_eq!(
            self.initial.candidates_at(pos),
            self.current.candidates_at(pos),
            "expected candidates at {pos} to be unchanged"
        );
        self
    }
}
