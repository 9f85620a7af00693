//! Core data structures for sudori.
//!
//! This crate provides the board model shared by the solver and the
//! generator: typed digits, bit-packed candidate sets, grid geometry, and the
//! [`Puzzle`] type with its single-write candidate maintenance.
//!
//! # Modules
//!
//! - [`bit_set_9`]: raw 9-bit set over indices 0-8
//! - [`digit`]: the [`Digit`] type and [`DigitSet`]
//! - [`position`]: cell coordinates and peer geometry
//! - [`house`]: rows, columns, boxes, and the degenerate cell scope
//! - [`grid`]: the digit grid with parsing, formatting, and validity
//! - [`puzzle`]: the puzzle value type (board + candidates + solution)

pub mod bit_set_9;
pub mod digit;
mod error;
pub mod grid;
pub mod house;
pub mod position;
pub mod puzzle;

pub use self::{
    bit_set_9::BitSet9,
    digit::{Digit, DigitSet},
    error::GridError,
    grid::{DigitGrid, ParseGridError},
    house::House,
    position::Position,
    puzzle::Puzzle,
};
