//! Exhaustive backtracking search.

use std::{error::Error, fmt};

use sudori_core::{DigitGrid, Puzzle};

/// No completion of the board exists.
///
/// This is the normal outcome of [`solve`] on an over-constrained board and
/// drives backtracking; it is a local value, not a failure of the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoSolution;

impl fmt::Display for NoSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no solution exists for this board")
    }
}

impl Error for NoSolution {}

/// Completes the puzzle's board by depth-first search, or fails with
/// [`NoSolution`].
///
/// The search always branches on the empty cell with the fewest candidates
/// (earliest in row-major order on ties) and tries its candidates in
/// ascending digit order, so the first solution found is deterministic.
/// Each branch works on a whole-puzzle copy; there is no undo bookkeeping.
///
/// # Errors
///
/// Returns [`NoSolution`] if no assignment of the remaining cells satisfies
/// the candidate grid.
pub fn solve(puzzle: &Puzzle) -> Result<DigitGrid, NoSolution> {
    let Some(cell) = puzzle.most_constrained_cell() else {
        // No empty cell left: the board itself is the solution.
        return Ok(*puzzle.board());
    };
    let candidates = puzzle.candidates_at(cell);
    if candidates.is_empty() {
        return Err(NoSolution);
    }
    for digit in candidates {
        let mut branch = *puzzle;
        branch.place(cell, digit);
        if let Ok(solution) = solve(&branch) {
            return Ok(solution);
        }
    }
    Err(NoSolution)
}
