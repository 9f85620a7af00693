//! Difficulty rating and hint collection.

use sudori_core::Puzzle;

use crate::{SolutionStep, Tier, all_strategies};

/// Rates a puzzle by the hardest strategy a strategy-driven solve forces.
///
/// Works on a copy. Each pass runs the strategies in priority order and
/// applies every step of the first one that fires, recording its tier; the
/// final rating is the maximum tier seen. If no strategy fires while the
/// board is still unsolved, the puzzle is beyond this library and rates
/// [`Tier::Beyond`].
///
/// The candidate grid is taken as-is; for a raw board, build the puzzle with
/// [`Puzzle::from_board`] first.
#[must_use]
pub fn rate(puzzle: &Puzzle) -> Tier {
    let strategies = all_strategies();
    let mut work = *puzzle;
    let mut hardest: Option<Tier> = None;
    while !work.board().is_complete() {
        let fired = strategies
            .iter()
            .map(|strategy| (strategy.tier(), strategy.find_steps(&work)))
            .find(|(_, steps)| !steps.is_empty());
        let Some((tier, steps)) = fired else {
            return Tier::Beyond;
        };
        for step in &steps {
            step.apply(&mut work);
        }
        hardest = Some(hardest.map_or(tier, |seen| seen.max(tier)));
    }
    hardest.unwrap_or(Tier::Fundamental)
}

/// Collects every applicable step of every strategy, without applying any.
///
/// Candidates are recomputed on a copy first, so hints stay truthful even if
/// the caller's pencil marks have been edited. The steps come back in
/// strategy priority order, concatenated.
#[must_use]
pub fn list_hints(puzzle: &Puzzle) -> Vec<SolutionStep> {
    let mut work = *puzzle;
    work.recompute_candidates();
    all_strategies()
        .iter()
        .flat_map(|strategy| strategy.find_steps(&work))
        .collect()
}
