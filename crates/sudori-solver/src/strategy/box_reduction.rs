use sudori_core::{Digit, House, Position, Puzzle};

use crate::{
    Effect, SolutionStep,
    step::is_duplicate_effect,
    strategy::{Strategy, Tier, digit_spots},
};

const NAME: &str = "Box Reduction";

/// Eliminates inside a box when a line pins a digit to it.
///
/// The dual of the pointing group: if the 2 or 3 spots of a digit within a
/// row (or column) all fall into one box, the digit is removed from the rest
/// of that box off the line.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxReduction;

impl BoxReduction {
    /// Creates a new `BoxReduction` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for BoxReduction {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::Basic
    }

    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep> {
        let mut steps = Vec::new();
        for line in House::LINES {
            for line_index in 0..9 {
                for digit in Digit::ALL {
                    let spots = digit_spots(puzzle, line, line_index, digit);
                    if !(2..=3).contains(&spots.len()) {
                        continue;
                    }
                    let cells: Vec<Position> = spots
                        .iter()
                        .map(|cell_index| line.position(line_index, cell_index))
                        .collect();
                    let box_index = cells[0].box_index();
                    if !cells.iter().all(|&pos| pos.box_index() == box_index) {
                        continue;
                    }
                    let mut targets = Vec::new();
                    for cell_index in 0..9 {
                        let pos = House::Box.position(box_index, cell_index);
                        if line.index_of(pos) == line_index
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
                            "in box {}, {digit} has to be in {line} {}",
                            box_index + 1,
                            line_index + 1
                        ),
                        line,
                        vec![line_index],
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
    fn test_row_pins_digit_into_box() {
        let mut puzzle = Puzzle::empty();
        // Row 0: D7 only in columns 0-2, which share box 0.
        for col in 3..9 {
            puzzle.remove_candidate(Position::new(0, col), Digit::D7);
        }

        StrategyTester::new(puzzle)
            .apply_once(&BoxReduction::new())
            .assert_removed_includes(Position::new(1, 0), [Digit::D7])
            .assert_removed_includes(Position::new(2, 2), [Digit::D7])
            // The pinned line itself keeps its spots.
            .assert_no_change(Position::new(0, 0));
    }

    #[test]
    fn test_column_pins_digit_into_box() {
        let mut puzzle = Puzzle::empty();
        // Column 8: D4 only in rows 6-8, which share box 8.
        for row in 0..6 {
            puzzle.remove_candidate(Position::new(row, 8), Digit::D4);
        }

        let steps = BoxReduction::new().find_steps(&puzzle);
        assert_eq!(steps.len(), 1);
        let step = &steps[0];
        assert_eq!(step.strategy(), "Box Reduction");
        assert_eq!(step.source(), House::Column);
        assert_eq!(step.source_indices(), &[8]);
        assert_eq!(step.description(), "in box 9, 4 has to be in column 9");
        // Box 8 off the column: rows 6-8, columns 6-7.
        assert_eq!(step.targets().len(), 6);
        assert!(
            step.targets()
                .iter()
                .all(|&(pos, _)| pos.box_index() == 8 && pos.col() != 8)
        );
    }

    #[test]
    fn test_spots_across_boxes_do_not_fire() {
        let mut puzzle = Puzzle::empty();
        // Row 0: D3 in columns 2 and 3 only, straddling boxes 0 and 1.
        for col in [0, 1, 4, 5, 6, 7, 8] {
            puzzle.remove_candidate(Position::new(0, col), Digit::D3);
        }
        StrategyTester::new(puzzle).assert_finds(&BoxReduction::new(), 0);
    }

    #[test]
    fn test_no_steps_on_fresh_puzzle() {
        StrategyTester::new(Puzzle::empty()).assert_finds(&BoxReduction::new(), 0);
    }
}
