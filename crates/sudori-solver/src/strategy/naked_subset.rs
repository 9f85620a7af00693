use std::fmt::Write as _;

use sudori_core::{DigitSet, House, Puzzle};

use crate::{
    Effect, SolutionStep,
    step::is_duplicate_effect,
    strategy::{
        Strategy, Tier, empty_cell_candidates,
        subset_search::{find_key_groups, union_of},
    },
};

/// Eliminates candidates outside a naked subset.
///
/// When `size` empty cells of a house share a combined candidate set of at
/// most `size` digits, those digits are locked into the group and can be
/// removed from every other cell of the house.
#[derive(Debug, Clone, Copy)]
pub struct NakedSubset {
    size: usize,
    name: &'static str,
}

impl NakedSubset {
    /// The naked pair strategy (`size` 2).
    #[must_use]
    pub const fn pair() -> Self {
        Self {
            size: 2,
            name: "Naked Pair",
        }
    }

    /// The naked triple strategy (`size` 3).
    #[must_use]
    pub const fn triple() -> Self {
        Self {
            size: 3,
            name: "Naked Triple",
        }
    }

    /// The naked quad strategy (`size` 4).
    #[must_use]
    pub const fn quad() -> Self {
        Self {
            size: 4,
            name: "Naked Quad",
        }
    }
}

impl Strategy for NakedSubset {
    fn name(&self) -> &'static str {
        self.name
    }

    fn tier(&self) -> Tier {
        Tier::Basic
    }

    fn find_steps(&self, puzzle: &Puzzle) -> Vec<SolutionStep> {
        let mut steps = Vec::new();
        for house in House::LINES_AND_BOXES {
            for house_index in 0..9 {
                let cells = empty_cell_candidates(puzzle, house, house_index);
                let entries: Vec<_> = cells
                    .iter()
                    .map(|&(cell_index, candidates)| (cell_index, candidates.bits()))
                    .collect();
                for group in find_key_groups(&entries, self.size) {
                    let group_digits = DigitSet::from_bits(union_of(&entries, &group));
                    let mut targets = Vec::new();
                    for &(cell_index, candidates) in &cells {
                        if group.contains(&cell_index) {
                            continue;
                        }
                        let pos = house.position(house_index, cell_index);
                        for digit in candidates & group_digits {
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
                    for digit in group_digits {
                        let _ = write!(description, "{digit} ");
                    }
                    description.push_str("have to go in");
                    for &cell_index in &group {
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
