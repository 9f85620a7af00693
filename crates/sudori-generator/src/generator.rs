//! Public generation entry points and the worker race.

use std::{
    error::Error,
    fmt,
    num::NonZeroUsize,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    thread,
};

use log::debug;
use sudori_core::Puzzle;
use sudori_solver::Tier;

use crate::worker::generate_once;

/// The difficulty bucket a generated puzzle must land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Accept any puzzle the strategy library can solve (tiers 1-4).
    Any,
    /// Accept only puzzles rating exactly this tier.
    Level(Tier),
}

impl Target {
    /// Maps a numeric difficulty to a target: `0` accepts anything
    /// solvable, `1`-`5` pin a tier. Other values yield `None`.
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        if level == 0 {
            return Some(Self::Any);
        }
        match Tier::try_from_level(level) {
            Some(tier) => Some(Self::Level(tier)),
            None => None,
        }
    }

    /// Returns `true` if a puzzle with this rating satisfies the target.
    #[must_use]
    pub fn accepts(self, rating: Tier) -> bool {
        match self {
            Self::Any => rating < Tier::Beyond,
            Self::Level(tier) => rating == tier,
        }
    }
}

/// Errors returned by [`generate`] for out-of-range arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// The difficulty was outside the range 0-5.
    InvalidDifficulty {
        /// The offending value.
        value: u8,
    },
    /// The worker count was zero or below -1.
    InvalidWorkers {
        /// The offending value.
        value: i32,
    },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidDifficulty { value } => {
                write!(f, "difficulty out of range: {value} (expected 0-5)")
            }
            GenerateError::InvalidWorkers { value } => {
                write!(f, "invalid worker count: {value} (expected -1 or a positive count)")
            }
        }
    }
}

impl Error for GenerateError {}

/// A difficulty-targeted puzzle generator racing parallel workers.
///
/// Each worker owns its puzzle and its RNG stream; the only shared state is
/// the result channel and a cancel flag. The first worker to produce an
/// acceptable puzzle wins, and the rest are told to stand down.
///
/// # Examples
///
/// ```no_run
/// use sudori_generator::{PuzzleGenerator, Target};
/// use sudori_solver::Tier;
///
/// let generator = PuzzleGenerator::new(Target::Level(Tier::Basic));
/// let puzzle = generator.generate_with_seed(42);
/// assert_eq!(sudori_solver::rate(&puzzle), Tier::Basic);
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    target: Target,
    workers: NonZeroUsize,
}

impl PuzzleGenerator {
    /// Creates a generator for the given target using every available core.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self {
            target,
            workers: available_workers(),
        }
    }

    /// Overrides the number of racing workers.
    #[must_use]
    pub const fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = workers;
        self
    }

    /// Generates a puzzle from OS entropy.
    #[must_use]
    pub fn generate(&self) -> Puzzle {
        self.generate_with_seed(-1)
    }

    /// Generates a puzzle deterministically from a seed.
    ///
    /// A seed of `-1` draws a random one instead; any other seed is offset
    /// by one so that worker streams stay distinct even for a caller's zero.
    /// With a fixed seed and worker count 1, the result is reproducible.
    #[must_use]
    pub fn generate_with_seed(&self, seed: i64) -> Puzzle {
        let seed = if seed == -1 {
            rand::random()
        } else {
            seed.wrapping_add(1)
        };

        let cancel = Arc::new(AtomicBool::new(false));
        let (result_tx, result_rx) = mpsc::channel();
        let mut handles = Vec::with_capacity(self.workers.get());
        for i in 1..=self.workers.get() as i64 {
            let worker_seed = seed.wrapping_mul(i);
            let cancel = Arc::clone(&cancel);
            let result_tx = result_tx.clone();
            let target = self.target;
            handles.push(thread::spawn(move || {
                debug!("generation worker {i} started");
                if let Some(puzzle) = generate_once(target, worker_seed, &cancel) {
                    // The receiver may already be gone; losing the race is
                    // a silent discard.
                    let _ = result_tx.send(puzzle);
                }
            }));
        }
        drop(result_tx);

        let puzzle = result_rx
            .recv()
            .expect("every generation worker exited without a result");
        cancel.store(true, Ordering::Relaxed);
        for handle in handles {
            let _ = handle.join();
        }
        debug!(
            "generated a puzzle with {} givens",
            puzzle.board().filled_count()
        );
        puzzle
    }
}

/// Generates a puzzle of the requested difficulty.
///
/// This is the sentinel-normalising entry point consumed by command-line
/// front ends:
///
/// - `difficulty`: 0-5, where 0 accepts any rating the strategy library can
///   solve
/// - `seed`: `-1` for a random seed
/// - `workers`: `-1` for all available cores
///
/// # Errors
///
/// Returns [`GenerateError`] if `difficulty` or `workers` is out of range.
pub fn generate(difficulty: u8, seed: i64, workers: i32) -> Result<Puzzle, GenerateError> {
    let target =
        Target::from_level(difficulty).ok_or(GenerateError::InvalidDifficulty { value: difficulty })?;
    let workers = match workers {
        -1 => available_workers(),
        workers => usize::try_from(workers)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(GenerateError::InvalidWorkers { value: workers })?,
    };
    Ok(PuzzleGenerator::new(target)
        .with_workers(workers)
        .generate_with_seed(seed))
}

fn available_workers() -> NonZeroUsize {
    thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}
