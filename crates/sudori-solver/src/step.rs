//! The deduction step record shared by all strategies.

use sudori_core::{Digit, House, Position, Puzzle};

/// The kind of change a [`SolutionStep`] makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Write digits into cells (with peer candidate pruning).
    PlaceDigit,
    /// Remove candidate digits from cells.
    EliminateCandidate,
}

/// One justified deduction: which strategy found it, why it holds, and what
/// it changes.
///
/// A step is immutable once built. The description is display material for a
/// hint pane and carries no semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionStep {
    strategy: &'static str,
    description: String,
    source: House,
    source_indices: Vec<u8>,
    effect: Effect,
    targets: Vec<(Position, Digit)>,
}

impl SolutionStep {
    /// Creates a new step.
    #[must_use]
    pub fn new(
        strategy: &'static str,
        description: String,
        source: House,
        source_indices: Vec<u8>,
        effect: Effect,
        targets: Vec<(Position, Digit)>,
    ) -> Self {
        Self {
            strategy,
            description,
            source,
            source_indices,
            effect,
            targets,
        }
    }

    /// Returns the name of the strategy that produced this step.
    #[must_use]
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }

    /// Returns the human-readable justification.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the house kind the deduction ranged over.
    #[must_use]
    pub fn source(&self) -> House {
        self.source
    }

    /// Returns the house indices the deduction used.
    #[must_use]
    pub fn source_indices(&self) -> &[u8] {
        &self.source_indices
    }

    /// Returns the kind of change this step makes.
    #[must_use]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Returns the affected `(cell, digit)` pairs.
    #[must_use]
    pub fn targets(&self) -> &[(Position, Digit)] {
        &self.targets
    }

    /// Applies this step to a puzzle.
    ///
    /// Placements go through the puzzle's candidate maintenance;
    /// eliminations clear single candidates.
    pub fn apply(&self, puzzle: &mut Puzzle) {
        match self.effect {
            Effect::PlaceDigit => {
                for &(pos, digit) in &self.targets {
                    puzzle.place(pos, digit);
                }
            }
            Effect::EliminateCandidate => {
                for &(pos, digit) in &self.targets {
                    puzzle.remove_candidate(pos, digit);
                }
            }
        }
    }
}

/// Returns `true` if any step already carries an effect on `(pos, digit)`.
///
/// Strategies use this while scanning so one pass never returns two steps
/// asking for the same change.
pub(crate) fn is_duplicate_effect(steps: &[SolutionStep], pos: Position, digit: Digit) -> bool {
    steps
        .iter()
        .any(|step| step.targets.iter().any(|&target| target == (pos, digit)))
}
