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

/// Eliminates foreign candidates inside a hidden subset.
///
/// When `size` digits appear in at most `size` cells of a house, those cells
/// must hold exactly those digits; every other candidate in them can be
/// removed.
#[derive(Debug, Clone, Copy)]
pub struct HiddenSubset {
    size: usize,
    name: &'static str,
}

impl HiddenSubset {
    /// The hidden pair strategy (`size` 2).
    #[must_use]
    pub const fn pair() -> Self {
        Self {
            size: 2,
            name: "Hidden Pair",
        }
    }

    /// The hidden triple strategy (`size` 3).
    #[must_use]
    pub const fn triple() -> Self {
        Self {
            size: 3,
            name: "Hidden Triple",
        }
    }

    /// The hidden quad strategy (`size` 4).
    #[must_use]
    pub const fn quad() -> Self {
        Self {
            size: 4,
            name: "Hidden Quad",
        }
    }
}

impl Strategy for HiddenSubset {
    fn name(&self) -> &'static str {
        self.name
    }

    fn tier(&self) -> Tier {
        Tier::Intermediate
    }

    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep> {
        let mut steps = Vec::new();
        for house in House::LINES_AND_BOXES {
            for house_index in 0..9 {
                // Keyed by digit: where can each digit still go?
                let entries: Vec<(u8, BitSet9)> = Digit::ALL
                    .iter()
                    .map(|&digit| {
                        (
                            digit.value(),
                            digit_spots(puzzle, house, house_index, digit),
                        )
                    })
                    .collect();
                for group in find_key_groups(&entries, self.size) {
                    let group_digits: Vec<Digit> = group
                        .iter()
                        .map(|&value| Digit::from_value(value))
                        .collect();
                    let group_cells = union_of(&entries, &group);
                    let mut targets = Vec::new();
                    for cell_index in group_cells {
                        let pos = house.position(house_index, cell_index);
                        for digit in puzzle.candidates_at(pos) {
                            if group_digits.contains(&digit) {
                                continue;
                            }
                            if is_duplicate_effect(&steps, pos, digit) {
                                continue;
                            }
                            targets.push((pos, digit));
                        }
                    }
                    if targets.is_empty() {
                        continue;
                    }

                    let mut description = format!("in {house} {}, ", house_index + 1);
                    for digit in &group_digits {
                        let _ = write!(description, "{digit} ");
                    }
                    description.push_str("can only go in");
                    for cell_index in group_cells {
                        let pos = house.position(house_index, cell_index);
                        let _ = write!(description, " {pos}");
                    }
                    steps.push(SolutionStep::new(
                        self.name,
                        description,
                        house,
                        vec![house_index],
                        Effect::EliminateCandidate,
                        targets,
                    ));
                }
            }
        }
        steps
    }
}
