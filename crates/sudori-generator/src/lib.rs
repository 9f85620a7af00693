//! Difficulty-targeted sudoku puzzle generation.
//!
//! A generated puzzle is built up digit by digit: random legal placements,
//! with a solution census after each one, rolling back placements that kill
//! the last completion, until exactly one remains. The finished board is
//! rated by the strategy library and kept only if it lands in the requested
//! difficulty bucket; otherwise the search restarts from scratch.
//!
//! Because acceptance is a lottery, [`PuzzleGenerator`] races independent
//! workers over the search and returns the first acceptable puzzle.
//!
//! # Examples
//!
//! ```no_run
//! use sudori_generator::{PuzzleGenerator, Target};
//!
//! let generator = PuzzleGenerator::new(Target::Any);
//! let puzzle = generator.generate();
//! println!("{:#}", puzzle.board());
//! ```

mod generator;
mod worker;

pub use self::generator::{GenerateError, PuzzleGenerator, Target, generate};
