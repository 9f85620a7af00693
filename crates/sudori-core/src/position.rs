//! Cell coordinates and peer geometry.

use std::fmt::{self, Display};

/// A cell position on the 9×9 board.
///
/// Both coordinates are in the range 0-8. The `Display` form is the
/// conventional 1-based `r{row}c{col}` notation used in deduction
/// descriptions.
///
/// # Examples
///
/// ```
/// use sudori_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.box_index(), 5);
/// assert_eq!(pos.to_string(), "r5c8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is not in the range 0-8.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < 9 && col < 9,
            "position out of range: row {row}, col {col}"
        );
        Self { row, col }
    }

    /// Creates a new position, or `None` if either coordinate is out of
    /// range.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < 9 && col < 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Returns the row coordinate (0-8).
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate (0-8).
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index of the 3×3 box containing this position
    /// (0-8, left to right, top to bottom).
    #[inline]
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the top-left position of the box with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not in the range 0-8.
    #[must_use]
    pub fn box_origin(box_index: u8) -> Self {
        assert!(box_index < 9, "box index out of range: {box_index}");
        Self {
            row: box_index / 3 * 3,
            col: box_index % 3 * 3,
        }
    }

    /// Returns `true` if `self` and `other` share a row, a column, or a box.
    ///
    /// A position sees itself.
    #[inline]
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        self.row == other.row
            || self.col == other.col
            || (self.row / 3 == other.row / 3 && self.col / 3 == other.col / 3)
    }

    /// Returns the row-major linear index of this position (0-80).
    #[inline]
    #[must_use]
    pub const fn linear_index(self) -> u8 {
        self.row * 9 + self.col
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).flat_map(|row| (0..9).map(move |col| Self { row, col }))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(0, 8).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(8, 0).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_box_origin() {
        assert_eq!(Position::box_origin(0), Position::new(0, 0));
        assert_eq!(Position::box_origin(5), Position::new(3, 6));
        assert_eq!(Position::box_origin(8), Position::new(6, 6));
    }

    #[test]
    fn test_sees() {
        let pos = Position::new(4, 4);
        assert!(pos.sees(pos));
        assert!(pos.sees(Position::new(4, 0))); // same row
        assert!(pos.sees(Position::new(0, 4))); // same column
        assert!(pos.sees(Position::new(5, 5))); // same box
        assert!(!pos.sees(Position::new(0, 0)));
        assert!(!pos.sees(Position::new(5, 8)));
    }

    #[test]
    fn test_all_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 81);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[9], Position::new(1, 0));
        assert_eq!(all[80], Position::new(8, 8));
    }

    #[test]
    fn test_try_new_bounds() {
        assert!(Position::try_new(8, 8).is_some());
        assert!(Position::try_new(9, 0).is_none());
        assert!(Position::try_new(0, 9).is_none());
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "r1c1");
        assert_eq!(Position::new(8, 8).to_string(), "r9c9");
    }
}
