use std::fmt::Write as _;

use sudori_core::{BitSet9, Digit, House, Puzzle};

use crate::{
    Effect, SolutionStep,
    step::is_duplicate_effect,
    strategy::{
        Strategy, Tier, digit_spots,
        subset_search::{find_key_groups, union_of},
    },
};

/// Eliminates candidates with a basic fish pattern of `size` lines.
///
/// For one digit, find `size` base lines (rows or columns) whose spots
/// together cover at most `size` crossing lines. The digit must land on the
/// base lines within that cover, so it is removed from the covering lines
/// everywhere else. Sizes 2, 3, and 4 are the classic X-Wing, Swordfish, and
/// Jellyfish.
#[derive(Debug, Clone, Copy)]
pub struct BasicFish {
    size: usize,
    name: &'static str,
}

impl BasicFish {
    /// The X-Wing strategy (`size` 2).
    #[must_use]
    pub const fn x_wing() -> Self {
        Self {
            size: 2,
            name: "X-Wing",
        }
    }

    /// The Swordfish strategy (`size` 3).
    #[must_use]
    pub const fn swordfish() -> Self {
        Self {
            size: 3,
            name: "Swordfish",
        }
    }

    /// The Jellyfish strategy (`size` 4).
    #[must_use]
    pub const fn jellyfish() -> Self {
        Self {
            size: 4,
            name: "Jellyfish",
        }
    }
}

impl Strategy for BasicFish {
    fn name(&self) -> &'static str {
        self.name
    }

    fn tier(&self) -> Tier {
        Tier::UpperIntermediate
    }

    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep> {
        let mut steps = Vec::new();
        for base in House::LINES {
            let cross = base.crossing();
            for digit in Digit::ALL {
                // Keyed by base-line index: the crossing lines the digit
                // still touches there.
                let entries: Vec<(u8, BitSet9)> = (0..9)
                    .map(|line_index| (line_index, digit_spots(puzzle, base, line_index, digit)))
                    .collect();
                for group in find_key_groups(&entries, self.size) {
                    let cover = union_of(&entries, &group);
                    let mut targets = Vec::new();
                    for cross_index in cover {
                        for line_index in 0..9 {
                            if group.contains(&line_index) {
                                continue;
                            }
                            let pos = cross.position(cross_index, line_index);
                            if !puzzle.board().is_empty_cell(pos)
                                || !puzzle.candidates_at(pos).contains(digit)
                                || is_duplicate_effect(&steps, pos, digit)
                            {
                                continue;
                            }
                            targets.push((pos, digit));
                        }
                    }
                    if targets.is_empty() {
                        continue;
                    }

                    let mut description = format!("in {cross}s");
                    for cross_index in cover {
                        let _ = write!(description, " {}", cross_index + 1);
                    }
                    let _ = write!(description, ", {digit} has to be in {base}s");
                    for &line_index in &group {
                        let _ = write!(description, " {}", line_index + 1);
                    }
                    steps.push(SolutionStep::new(
                        self.name,
                        description,
                        base,
                        group,
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
    use sudori_core::Position;

    use super::*;
    use crate::testing::StrategyTester;

    /// Confines `digit` within row `row` to the given columns.
    fn confine_in_row(puzzle: &mut Puzzle, row: u8, digit: Digit, cols: &[u8]) {
        for col in 0..9 {
            if !cols.contains(&col) {
                puzzle.remove_candidate(Position::new(row, col), digit);
            }
        }
    }

    /// Confines `digit` within column `col` to the given rows.
    fn confine_in_col(puzzle: &mut Puzzle, col: u8, digit: Digit, rows: &[u8]) {
        for row in 0..9 {
            if !rows.contains(&row) {
                puzzle.remove_candidate(Position::new(row, col), digit);
            }
        }
    }

    #[test]
    fn test_x_wing_on_rows_eliminates_in_columns() {
        let mut puzzle = Puzzle::empty();
        confine_in_row(&mut puzzle, 0, Digit::D1, &[1, 7]);
        confine_in_row(&mut puzzle, 4, Digit::D1, &[1, 7]);

        StrategyTester::new(puzzle)
            .apply_once(&BasicFish::x_wing())
            .assert_removed_includes(Position::new(2, 1), [Digit::D1])
            .assert_removed_includes(Position::new(6, 7), [Digit::D1])
            // Corners stay.
            .assert_no_change(Position::new(0, 1))
            .assert_no_change(Position::new(4, 7));
    }

    #[test]
    fn test_x_wing_on_columns_eliminates_in_rows() {
        let mut puzzle = Puzzle::empty();
        confine_in_col(&mut puzzle, 2, Digit::D9, &[3, 8]);
        confine_in_col(&mut puzzle, 6, Digit::D9, &[3, 8]);

        StrategyTester::new(puzzle)
            .apply_once(&BasicFish::x_wing())
            .assert_removed_includes(Position::new(3, 0), [Digit::D9])
            .assert_removed_includes(Position::new(8, 8), [Digit::D9]);
    }

    #[test]
    fn test_swordfish_covers_three_columns() {
        let mut puzzle = Puzzle::empty();
        for row in [0, 4, 8] {
            confine_in_row(&mut puzzle, row, Digit::D2, &[0, 4, 8]);
        }

        StrategyTester::new(puzzle)
            .apply_once(&BasicFish::swordfish())
            .assert_removed_includes(Position::new(1, 0), [Digit::D2])
            .assert_removed_includes(Position::new(5, 4), [Digit::D2])
            .assert_removed_includes(Position::new(7, 8), [Digit::D2]);
    }

    #[test]
    fn test_jellyfish_covers_four_columns() {
        let mut puzzle = Puzzle::empty();
        for row in [0, 2, 4, 6] {
            confine_in_row(&mut puzzle, row, Digit::D5, &[1, 3, 5, 7]);
        }

        StrategyTester::new(puzzle)
            .apply_once(&BasicFish::jellyfish())
            .assert_removed_includes(Position::new(1, 1), [Digit::D5])
            .assert_removed_includes(Position::new(8, 7), [Digit::D5]);
    }

    #[test]
    fn test_step_shape() {
        let mut puzzle = Puzzle::empty();
        confine_in_row(&mut puzzle, 0, Digit::D1, &[1, 7]);
        confine_in_row(&mut puzzle, 4, Digit::D1, &[1, 7]);

        let steps = BasicFish::x_wing().find_steps(&puzzle);
        assert_eq!(steps.len(), 1);
        let step = &steps[0];
        assert_eq!(step.strategy(), "X-Wing");
        assert_eq!(step.source(), House::Row);
        assert_eq!(step.source_indices(), &[0, 4]);
        assert_eq!(step.description(), "in columns 2 8, 1 has to be in rows 1 5");
        // Columns 1 and 7, rows other than 0 and 4.
        assert_eq!(step.targets().len(), 14);
    }

    #[test]
    fn test_no_steps_on_fresh_puzzle() {
        StrategyTester::new(Puzzle::empty())
            .assert_finds(&BasicFish::x_wing(), 0)
            .assert_finds(&BasicFish::swordfish(), 0)
            .assert_finds(&BasicFish::jellyfish(), 0);
    }
}
