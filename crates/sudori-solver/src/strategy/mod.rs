//! The strategy library.
//!
//! Each strategy is a pure scan over a [`Puzzle`]'s candidate grid: it
//! returns every non-conflicting [`SolutionStep`] it can justify and never
//! mutates its input. An inapplicable strategy returns an empty list; a
//! strategy never fails.
//!
//! Strategies are dispatched through [`all_strategies`], whose order is the
//! rater's fixed priority order (easiest first).

use std::fmt::{self, Debug, Display};

use sudori_core::{BitSet9, Digit, DigitSet, House, Puzzle};

use crate::SolutionStep;

pub use self::{
    box_reduction::BoxReduction, fish::BasicFish, hidden_single::HiddenSingle,
    hidden_subset::HiddenSubset, naked_single::NakedSingle, naked_subset::NakedSubset,
    pointing_group::PointingGroup, skyscraper::Skyscraper,
};

mod box_reduction;
mod fish;
mod hidden_single;
mod hidden_subset;
mod naked_single;
mod naked_subset;
mod pointing_group;
mod skyscraper;
mod subset_search;

/// Difficulty tier of a strategy, and a puzzle rating.
///
/// Tiers order strategies from the singles every solver starts with up to
/// basic fish patterns. [`Beyond`](Self::Beyond) is never assigned to a
/// strategy; it is the rating of a puzzle that defeats the whole library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    /// Naked and hidden singles.
    Fundamental = 1,
    /// Naked subsets and box-line interactions.
    Basic = 2,
    /// Hidden subsets.
    Intermediate = 3,
    /// Basic fish and skyscrapers.
    UpperIntermediate = 4,
    /// Requires techniques not implemented here.
    Beyond = 5,
}

impl Tier {
    /// Returns the numeric difficulty level (1-5).
    #[inline]
    #[must_use]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Creates a tier from a numeric level in the range 1-5, or `None`
    /// otherwise.
    #[must_use]
    pub const fn try_from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Fundamental),
            2 => Some(Self::Basic),
            3 => Some(Self::Intermediate),
            4 => Some(Self::UpperIntermediate),
            5 => Some(Self::Beyond),
            _ => None,
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fundamental => "fundamental",
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::UpperIntermediate => "upper intermediate",
            Self::Beyond => "beyond",
        };
        f.write_str(name)
    }
}

/// A named human solving strategy.
pub trait Strategy: Debug + Send + Sync {
    /// Returns the display name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns the difficulty tier the rater assigns to this strategy.
    fn tier(&self) -> Tier;

    /// Scans the puzzle and returns every non-conflicting step found.
    ///
    /// The puzzle is not mutated. An inapplicable strategy returns an empty
    /// list.
    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

/// Returns all strategies in the rater's fixed priority order.
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(NakedSingle::new()),
        Box::new(HiddenSingle::new()),
        Box::new(NakedSubset::pair()),
        Box::new(NakedSubset::triple()),
        Box::new(NakedSubset::quad()),
        Box::new(PointingGroup::new()),
        Box::new(BoxReduction::new()),
        Box::new(HiddenSubset::pair()),
        Box::new(HiddenSubset::triple()),
        Box::new(HiddenSubset::quad()),
        Box::new(BasicFish::x_wing()),
        Box::new(BasicFish::swordfish()),
        Box::new(BasicFish::jellyfish()),
        Box::new(Skyscraper::new()),
    ]
}

/// Candidate sets of the empty cells of a house, keyed by cell index.
pub(crate) fn empty_cell_candidates(
    puzzle: &Puzzle,
    house: House,
    house_index: u8,
) -> Vec<(u8, DigitSet)> {
    (0..9)
        .filter_map(|cell_index| {
            let pos = house.position(house_index, cell_index);
            puzzle
                .board()
                .is_empty_cell(pos)
                .then(|| (cell_index, puzzle.candidates_at(pos)))
        })
        .collect()
}

/// Cell indices within a house where `digit` is a live candidate of an empty
/// cell.
pub(crate) fn digit_spots(puzzle: &Puzzle, house: House, house_index: u8, digit: Digit) -> BitSet9 {
    let mut spots = BitSet9::EMPTY;
    for cell_index in 0..9 {
        let pos = house.position(house_index, cell_index);
        if puzzle.board().is_empty_cell(pos) && puzzle.candidates_at(pos).contains(digit) {
            spots.insert(cell_index);
        }
    }
    spots
}
