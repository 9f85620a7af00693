use sudori_core::{Digit, House, Position, Puzzle};

use crate::{
    Effect, SolutionStep,
    step::is_duplicate_effect,
    strategy::{Strategy, Tier, digit_spots},
};

const NAME: &str = "Pointing Group";

/// Eliminates along a line when a box pins a digit to it.
///
/// If the 2 or 3 spots of a digit within a box all share one row (or
/// column), the digit must land there, so it is removed from the rest of
/// that line outside the box.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointingGroup;

impl PointingGroup {
    /// Creates a new `PointingGroup` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for PointingGroup {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::Basic
    }

    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep> {
        let mut steps = Vec::new();
        for box_index in 0..9 {
            for digit in Digit::ALL {
                let spots = digit_spots(puzzle, House::Box, box_index, digit);
                if !(2..=3).contains(&spots.len()) {
                    continue;
                }
                let cells: Vec<Position> = spots
                    .iter()
                    .map(|cell_index| House::Box.position(box_index, cell_index))
                    .collect();
                for line in House::LINES {
                    let line_index = line.index_of(cells[0]);
                    if !cells.iter().all(|&pos| line.index_of(pos) == line_index) {
                        continue;
                    }
                    let mut targets = Vec::new();
                    for cell_index in 0..9 {
                        let pos = line.position(line_index, cell_index);
                        if pos.box_index() == box_index
                            || !puzzle.board().is_empty_cell(pos)
                            || !puzzle.candidates_at(pos).contains(digit)
                            || is_duplicate_effect(&steps, pos, digit)
                        {
                            continue;
                        }
                        targets.push((pos, digit));
                    }
                    if targets.is_empty() {
                        continue;
                    }
                    steps.push(SolutionStep::new(
                        NAME,
                        format!(
                            "in {line} {}, {digit} has to be in box {}",
                            line_index + 1,
                            box_index + 1
                        ),
                        House::Box,
                        vec![box_index],
                        Effect::EliminateCandidate,
                        targets,
                    ));
                }
            }
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StrategyTester;

    #[test]
    fn test_pointing_row_eliminates_outside_box() {
        let mut puzzle = Puzzle::empty();
        // Box 0: D5 only in row 0.
        for row in 1..3 {
            for col in 0..3 {
                puzzle.remove_candidate(Position::new(row, col), Digit::D5);
            }
        }

        StrategyTester::new(puzzle)
            .apply_once(&PointingGroup::new())
            .assert_removed_includes(Position::new(0, 3), [Digit::D5])
            .assert_removed_includes(Position::new(0, 8), [Digit::D5])
            // Inside the box the spots stay.
            .assert_no_change(Position::new(0, 0));
    }

    #[test]
    fn test_pointing_column() {
        let mut puzzle = Puzzle::empty();
        // Box 4: D2 only in column 4 (rows 3 and 5; row 4 dropped too).
        for row in 3..6 {
            for col in [3, 5] {
                puzzle.remove_candidate(Position::new(row, col), Digit::D2);
            }
        }
        puzzle.remove_candidate(Position::new(4, 4), Digit::D2);

        let steps = PointingGroup::new().find_steps(&puzzle);
        assert_eq!(steps.len(), 1);
        let step = &steps[0];
        assert_eq!(step.source(), House::Box);
        assert_eq!(step.source_indices(), &[4]);
        assert_eq!(step.description(), "in column 5, 2 has to be in box 5");
        assert!(
            step.targets()
                .iter()
                .all(|&(pos, digit)| pos.col() == 4 && digit == Digit::D2)
        );
        assert_eq!(step.targets().len(), 6);
    }

    #[test]
    fn test_requires_two_or_three_spots() {
        let mut puzzle = Puzzle::empty();
        // Box 0: D7 reduced to a single spot; that is a hidden single, not a
        // pointing group.
        for cell_index in 1..9 {
            let pos = House::Box.position(0, cell_index);
            puzzle.remove_candidate(pos, Digit::D7);
        }
        StrategyTester::new(puzzle).assert_finds(&PointingGroup::new(), 0);
    }

    #[test]
    fn test_no_steps_on_fresh_puzzle() {
        StrategyTester::new(Puzzle::empty()).assert_finds(&PointingGroup::new(), 0);
    }
}
