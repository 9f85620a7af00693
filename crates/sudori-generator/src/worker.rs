//! The single-worker generation loop.

use std::sync::atomic::{AtomicBool, Ordering};

use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom as _};
use sudori_core::{Digit, Position, Puzzle};
use sudori_solver::{SolutionCount, count_solutions, rate};

use crate::Target;

/// How many digits are placed before uniqueness checking starts. No board
/// this sparse can be without a completion.
const UNCHECKED_PLACEMENTS: usize = 5;

/// Searches for one acceptable puzzle, or returns `None` when cancelled.
///
/// The cancel flag is checked at the top of every census iteration and once
/// more right before a finished puzzle is handed back.
pub(crate) fn generate_once(target: Target, seed: i64, cancel: &AtomicBool) -> Option<Puzzle> {
    #[expect(clippy::cast_sign_loss)]
    let mut rng = StdRng::seed_from_u64(seed as u64);
    'attempt: loop {
        let mut puzzle = Puzzle::empty();
        let mut snapshot = puzzle;
        for _ in 0..UNCHECKED_PLACEMENTS {
            snapshot = puzzle;
            fill_random_cell(&mut puzzle, &mut rng);
        }

        // The census is skipped right after a rollback: the board is back in
        // its pre-placement state, whose count is already known.
        let mut cached_count = SolutionCount::Multiple;
        let mut reuse_cached = false;
        loop {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }
            let count = if reuse_cached {
                cached_count
            } else {
                count_solutions(&puzzle)
            };
            match count {
                SolutionCount::One(solution) => {
                    assert!(
                        puzzle.board().is_valid_partial(),
                        "generated board is not a valid partial grid"
                    );
                    assert!(
                        solution.is_valid_complete(),
                        "generated solution is not a valid completion"
                    );
                    puzzle.set_solution(solution);
                    let rating = rate(&puzzle);
                    if !target.accepts(rating) {
                        trace!("discarding puzzle rated {rating}, target {target:?}");
                        continue 'attempt;
                    }
                    if cancel.load(Ordering::Relaxed) {
                        return None;
                    }
                    return Some(puzzle);
                }
                SolutionCount::Zero => {
                    // The last placement killed the final completion.
                    puzzle = snapshot;
                    reuse_cached = true;
                }
                SolutionCount::Multiple => {
                    snapshot = puzzle;
                    cached_count = SolutionCount::Multiple;
                    fill_random_cell(&mut puzzle, &mut rng);
                    reuse_cached = false;
                }
            }
        }
    }
}

/// Places a uniform-random candidate into a uniform-random empty cell.
///
/// A cell whose candidates have run dry is silently redrawn; on the boards
/// this loop sees, at least one empty cell always has candidates.
fn fill_random_cell(puzzle: &mut Puzzle, rng: &mut StdRng) {
    loop {
        let pos = random_empty_cell(puzzle, rng);
        let candidates: Vec<Digit> = puzzle.candidates_at(pos).iter().collect();
        if let Some(&digit) = candidates.choose(rng) {
            puzzle.place(pos, digit);
            return;
        }
    }
}

fn random_empty_cell(puzzle: &Puzzle, rng: &mut StdRng) -> Position {
    loop {
        let pos = Position::new(rng.gen_range(0..9), rng.gen_range(0..9));
        if puzzle.board().is_empty_cell(pos) {
            return pos;
        }
    }
}
