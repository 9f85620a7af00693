use sudori_core::{Digit, House, Puzzle};

use crate::{
    Effect, SolutionStep,
    step::is_duplicate_effect,
    strategy::{Strategy, Tier, digit_spots},
};

const NAME: &str = "Hidden Single";

/// Places a digit whose only remaining spot in a row, column, or box is a
/// single cell.
///
/// The same placement is often forced by more than one house; the scan keeps
/// the first justification it finds and drops the duplicates.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::Fundamental
    }

    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep> {
        let mut steps = Vec::new();
        for house in House::LINES_AND_BOXES {
            for house_index in 0..9 {
                for digit in Digit::ALL {
                    let spots = digit_spots(puzzle, house, house_index, digit);
                    let Some(cell_index) = spots.as_single() else {
                        continue;
                    };
                    let pos = house.position(house_index, cell_index);
                    if is_duplicate_effect(&steps, pos, digit) {
                        continue;
                    }
                    steps.push(SolutionStep::new(
                        NAME,
                        format!(
                            "{digit} can only go in {pos} in {house} {}",
                            house_index + 1
                        ),
                        house,
                        vec![house_index],
                        Effect::PlaceDigit,
                        vec![(pos, digit)],
                    ));
                }
            }
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use sudori_core::Position;

    use super::*;
    use crate::{strategy::NakedSingle, testing::StrategyTester};

    /// Leaves `digit` in exactly one empty spot of row `row`.
    fn isolate_in_row(puzzle: &mut Puzzle, row: u8, keep_col: u8, digit: Digit) {
        for col in 0..9 {
            if col != keep_col {
                puzzle.remove_candidate(Position::new(row, col), digit);
            }
        }
    }

    #[test]
    fn test_places_hidden_single_in_row() {
        let mut puzzle = Puzzle::empty();
        isolate_in_row(&mut puzzle, 0, 0, Digit::D7);

        // The cell still has nine candidates, so the naked single scan
        // stays silent while the hidden single fires.
        StrategyTester::new(puzzle)
            .assert_finds(&NakedSingle::new(), 0)
            .assert_finds(&HiddenSingle::new(), 1)
            .apply_once(&HiddenSingle::new())
            .assert_placed(Position::new(0, 0), Digit::D7);
    }

    #[test]
    fn test_step_records_the_justifying_house() {
        let mut puzzle = Puzzle::empty();
        isolate_in_row(&mut puzzle, 3, 5, Digit::D2);

        let steps = HiddenSingle::new().find_steps(&puzzle);
        assert_eq!(steps.len(), 1);
        let step = &steps[0];
        assert_eq!(step.source(), House::Row);
        assert_eq!(step.source_indices(), &[3]);
        assert_eq!(step.targets(), &[(Position::new(3, 5), Digit::D2)]);
        assert_eq!(step.description(), "2 can only go in r4c6 in row 4");
    }

    #[test]
    fn test_duplicate_placements_are_filtered() {
        // Isolate the digit in its row, column, and box at once: one step,
        // not three.
        let mut puzzle = Puzzle::empty();
        let pos = Position::new(4, 4);
        for i in 0..9 {
            if i != 4 {
                puzzle.remove_candidate(Position::new(4, i), Digit::D6);
                puzzle.remove_candidate(Position::new(i, 4), Digit::D6);
            }
        }
        for row in 3..6 {
            for col in 3..6 {
                if (row, col) != (4, 4) {
                    puzzle.remove_candidate(Position::new(row, col), Digit::D6);
                }
            }
        }

        let steps = HiddenSingle::new().find_steps(&puzzle);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].targets(), &[(pos, Digit::D6)]);
    }

    #[test]
    fn test_no_steps_on_fresh_puzzle() {
        StrategyTester::new(Puzzle::empty()).assert_finds(&HiddenSingle::new(), 0);
    }

    #[test]
    fn test_hidden_single_in_box() {
        let mut puzzle = Puzzle::empty();
        // Restrict D1 to (7, 7) within box 8 only; rows and columns keep
        // other spots outside the box.
        for row in 6..9 {
            for col in 6..9 {
                if (row, col) != (7, 7) {
                    puzzle.remove_candidate(Position::new(row, col), Digit::D1);
                }
            }
        }

        let steps = HiddenSingle::new().find_steps(&puzzle);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].source(), House::Box);
        assert_eq!(steps[0].source_indices(), &[8]);
        assert_eq!(steps[0].targets(), &[(Position::new(7, 7), Digit::D1)]);
    }
}
