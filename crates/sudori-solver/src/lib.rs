//! Human solving strategies, difficulty rating, and backtracking search.
//!
//! This crate advances a [`Puzzle`](sudori_core::Puzzle) strictly by
//! rule-based inference: each strategy in [`strategy`] scans the candidate
//! grid and returns the [`SolutionStep`]s it can justify. On top of the
//! strategy library sit three consumers:
//!
//! - [`rate`]: classifies a puzzle by the hardest strategy a solve forces
//! - [`list_hints`]: collects every applicable step for a hint pane
//! - [`solve`] / [`count_solutions`]: exhaustive backtracking, used to
//!   complete boards and to enforce solution uniqueness during generation

pub mod backtrack;
pub mod rater;
pub mod step;
pub mod strategy;
pub mod testing;
pub mod uniqueness;

pub use self::{
    backtrack::{NoSolution, solve},
    rater::{list_hints, rate},
    step::{Effect, SolutionStep},
    strategy::{BoxedStrategy, Strategy, Tier, all_strategies},
    uniqueness::{SolutionCount, count_solutions},
};
