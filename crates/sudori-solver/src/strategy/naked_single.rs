use sudori_core::{House, Position, Puzzle};

use crate::{
    Effect, SolutionStep,
    strategy::{Strategy, Tier},
};

const NAME: &str = "Naked Single";

/// Places digits in cells with exactly one remaining candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for NakedSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::Fundamental
    }

    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep> {
        let mut steps = Vec::new();
        for pos in Position::all() {
            if !puzzle.board().is_empty_cell(pos) {
                continue;
            }
            let Some(digit) = puzzle.candidates_at(pos).as_single() else {
                continue;
            };
            steps.push(SolutionStep::new(
                NAME,
                format!("{pos} can only be {digit}"),
                House::Cell,
                vec![pos.linear_index()],
                Effect::PlaceDigit,
                vec![(pos, digit)],
            ));
        }
        steps
    }
}
