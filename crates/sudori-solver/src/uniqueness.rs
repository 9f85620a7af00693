//! Solution counting for uniqueness enforcement.

use sudori_core::{DigitGrid, Position, Puzzle};

use crate::solve;

/// The outcome of a solution census: none, exactly one, or more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionCount {
    /// The board has no completion.
    Zero,
    /// The board has exactly one completion, carried as a witness.
    One(DigitGrid),
    /// The board has at least two distinct completions.
    Multiple,
}

/// Counts the completions of a puzzle, stopping at two.
///
/// Walks the empty cells in row-major order; for each, every candidate is
/// placed on a copy and handed to [`solve`]. Distinctness is bit-exact grid
/// equality. The walk short-circuits with [`SolutionCount::Multiple`] as
/// soon as two distinct completions have been seen, and with
/// [`SolutionCount::Zero`] as soon as some empty cell admits no completion
/// at all.
///
/// This is a generation-time tool: the input is expected to be a partial
/// board whose candidate grid matches its digits.
///
/// # Panics
///
/// Panics if the walk finishes without having seen exactly one solution.
/// That state is unreachable for a partial board (each empty cell either
/// admits a completion or ends the walk early) and indicates a caller
/// handing in a complete or inconsistent puzzle.
#[must_use]
pub fn count_solutions(puzzle: &Puzzle) -> SolutionCount {
    let mut distinct = 0u32;
    let mut last: Option<DigitGrid> = None;
    for pos in Position::all() {
        if !puzzle.board().is_empty_cell(pos) {
            continue;
        }
        let mut cell_has_solution = false;
        for digit in puzzle.candidates_at(pos) {
            let mut branch = *puzzle;
            branch.place(pos, digit);
            let Ok(solution) = solve(&branch) else {
                continue;
            };
            cell_has_solution = true;
            if last != Some(solution) {
                distinct += 1;
                if distinct > 1 {
                    return SolutionCount::Multiple;
                }
                last = Some(solution);
            }
        }
        if !cell_has_solution {
            return SolutionCount::Zero;
        }
    }
    match last {
        Some(solution) if distinct == 1 => SolutionCount::One(solution),
        _ => panic!("solution census finished without exactly one solution"),
    }
}
