use sudori_core::{Digit, House, Position, Puzzle};

use crate::{
    Effect, SolutionStep,
    step::is_duplicate_effect,
    strategy::{Strategy, Tier, digit_spots},
};

const NAME: &str = "Skyscraper";

/// Eliminates candidates seen by both tops of a skyscraper.
///
/// Two rows (or columns) hold a digit in exactly two spots each. One pair of
/// spots shares a column (or row), the base, while the remaining spots, the
/// tops, sit in different columns (or rows). One of the tops must hold the
/// digit, so every cell that sees both tops loses it.
#[derive(Debug, Default, Clone, Copy)]
pub struct Skyscraper;

impl Skyscraper {
    /// Creates a new `Skyscraper` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for Skyscraper {
    fn name(&self) -> &'static str {
        NAME
    }

    fn tier(&self) -> Tier {
        Tier::UpperIntermediate
    }

    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep> {
        let mut steps = Vec::new();
        for base in House::LINES {
            for digit in Digit::ALL {
                // Lines where the digit has exactly two spots left.
                let mut strings = Vec::new();
                for line_index in 0..9 {
                    let spots = digit_spots(puzzle, base, line_index, digit);
                    if spots.len() == 2 {
                        strings.push((line_index, spots));
                    }
                }
                for (i, &(line1, spots1)) in strings.iter().enumerate() {
                    for &(line2, spots2) in &strings[i + 1..] {
                        let shared = spots1 & spots2;
                        if shared.len() != 1 {
                            continue;
                        }
                        let (Some(top1_cross), Some(top2_cross)) = (
                            spots1.difference(shared).as_single(),
                            spots2.difference(shared).as_single(),
                        ) else {
                            continue;
                        };
                        if top1_cross == top2_cross {
                            continue;
                        }
                        let top1 = base.position(line1, top1_cross);
                        let top2 = base.position(line2, top2_cross);

                        let mut targets = Vec::new();
                        for pos in Position::all() {
                            if pos == top1
                                || pos == top2
                                || !pos.sees(top1)
                                || !pos.sees(top2)
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
                            format!("either {top1} or {top2} has to be {digit}"),
                            base,
                            vec![line1, line2],
                            Effect::EliminateCandidate,
                            targets,
                        ));
                    }
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

    /// Confines `digit` within column `col` to the given rows.
    fn confine_in_col(puzzle: &mut Puzzle, col: u8, digit: Digit, rows: &[u8]) {
        for row in 0..9 {
            if !rows.contains(&row) {
                puzzle.remove_candidate(Position::new(row, col), digit);
            }
        }
    }

    /// Confines `digit` within row `row` to the given columns.
    fn confine_in_row(puzzle: &mut Puzzle, row: u8, digit: Digit, cols: &[u8]) {
        for col in 0..9 {
            if !cols.contains(&col) {
                puzzle.remove_candidate(Position::new(row, col), digit);
            }
        }
    }

    #[test]
    fn test_column_strings_share_a_base_row() {
        let mut puzzle = Puzzle::empty();
        // Columns 1 and 7 hold D1 twice, sharing base row 0; the tops are
        // (3, 1) and (4, 7).
        confine_in_col(&mut puzzle, 1, Digit::D1, &[0, 3]);
        confine_in_col(&mut puzzle, 7, Digit::D1, &[0, 4]);

        StrategyTester::new(puzzle)
            .apply_once(&Skyscraper::new())
            // Cells seeing both tops: row 3 inside the (4, 7) box band and
            // row 4 inside the (3, 1) box band.
            .assert_removed_includes(Position::new(4, 0), [Digit::D1])
            .assert_removed_includes(Position::new(4, 2), [Digit::D1])
            .assert_removed_includes(Position::new(3, 6), [Digit::D1])
            .assert_removed_includes(Position::new(3, 8), [Digit::D1])
            // The tops themselves stay.
            .assert_no_change(Position::new(3, 1))
            .assert_no_change(Position::new(4, 7));
    }

    #[test]
    fn test_row_strings_share_a_base_column() {
        let mut puzzle = Puzzle::empty();
        // Rows 0 and 4 hold D6 twice, sharing base column 0; the tops are
        // (0, 3) and (4, 4).
        confine_in_row(&mut puzzle, 0, Digit::D6, &[0, 3]);
        confine_in_row(&mut puzzle, 4, Digit::D6, &[0, 4]);

        StrategyTester::new(puzzle)
            .apply_once(&Skyscraper::new())
            .assert_removed_includes(Position::new(1, 4), [Digit::D6])
            .assert_removed_includes(Position::new(2, 4), [Digit::D6])
            .assert_removed_includes(Position::new(5, 3), [Digit::D6])
            .assert_removed_includes(Position::new(3, 3), [Digit::D6]);
    }

    #[test]
    fn test_coinciding_tops_do_not_fire() {
        let mut puzzle = Puzzle::empty();
        // Both strings end in column 4: an X-Wing shape, not a skyscraper.
        confine_in_col(&mut puzzle, 1, Digit::D1, &[0, 4]);
        confine_in_col(&mut puzzle, 7, Digit::D1, &[0, 4]);

        StrategyTester::new(puzzle).assert_finds(&Skyscraper::new(), 0);
    }

    #[test]
    fn test_step_shape() {
        let mut puzzle = Puzzle::empty();
        confine_in_col(&mut puzzle, 1, Digit::D1, &[0, 3]);
        confine_in_col(&mut puzzle, 7, Digit::D1, &[0, 4]);

        let steps = Skyscraper::new().find_steps(&puzzle);
        assert_eq!(steps.len(), 1);
        let step = &steps[0];
        assert_eq!(step.strategy(), "Skyscraper");
        assert_eq!(step.source(), House::Column);
        assert_eq!(step.source_indices(), &[1, 7]);
        assert_eq!(step.description(), "either r4c2 or r5c8 has to be 1");
        assert_eq!(step.effect(), Effect::EliminateCandidate);
    }

    #[test]
    fn test_no_steps_on_fresh_puzzle() {
        StrategyTester::new(Puzzle::empty()).assert_finds(&Skyscraper::new(), 0);
    }
}
