//! Example demonstrating basic puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` for a difficulty target
//! - Generate a random puzzle
//! - Display the puzzle, its rating, and its solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```

use sudori_generator::{PuzzleGenerator, Target};
use sudori_solver::rate;

fn main() {
    let generator = PuzzleGenerator::new(Target::Any);

    let puzzle = generator.generate();
    println!("Puzzle (difficulty {}):", rate(&puzzle).level());
    println!("{:#}", puzzle.board());
    println!();
    println!("Solution:");
    println!("{:#}", puzzle.solution());
}
