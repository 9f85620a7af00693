//! Houses: the cell groups deductions range over.

use std::fmt::{self, Display};

use crate::Position;

/// A scan scope for a deduction: a row, a column, a 3×3 box, or a single
/// cell.
///
/// Rows, columns, and boxes are the houses of the one-rule (no digit twice
/// within one); `Cell` is the degenerate scope recorded by cell-local
/// deductions such as naked singles.
///
/// A `(house, house_index, cell_index)` triple addresses a concrete cell via
/// [`position`](Self::position) with fixed arithmetic:
///
/// - `Row`: `(house_index, cell_index)`
/// - `Column`: `(cell_index, house_index)`
/// - `Box`: box origin plus `(cell_index / 3, cell_index % 3)`
/// - `Cell`: `house_index` is the row-major linear index 0-80, `cell_index`
///   is ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row, indexed by its row coordinate.
    Row,
    /// A column, indexed by its column coordinate.
    Column,
    /// A 3×3 box, indexed 0-8 left to right, top to bottom.
    Box,
    /// A single cell, indexed by its row-major linear index.
    Cell,
}

impl House {
    /// The three real houses, in scan order.
    pub const LINES_AND_BOXES: [Self; 3] = [Self::Row, Self::Column, Self::Box];

    /// The two line kinds, in scan order.
    pub const LINES: [Self; 2] = [Self::Row, Self::Column];

    /// Converts a cell index within the house into an absolute [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if an index is out of range for the house kind.
    #[must_use]
    pub fn position(self, house_index: u8, cell_index: u8) -> Position {
        match self {
            Self::Row => Position::new(house_index, cell_index),
            Self::Column => Position::new(cell_index, house_index),
            Self::Box => {
                assert!(cell_index < 9, "cell index out of range: {cell_index}");
                let origin = Position::box_origin(house_index);
                Position::new(origin.row() + cell_index / 3, origin.col() + cell_index % 3)
            }
            Self::Cell => {
                assert!(house_index < 81, "cell index out of range: {house_index}");
                Position::new(house_index / 9, house_index % 9)
            }
        }
    }

    /// Returns the index of the house of this kind that contains `pos`.
    ///
    /// For `Cell` this is the row-major linear index.
    #[must_use]
    pub const fn index_of(self, pos: Position) -> u8 {
        match self {
            Self::Row => pos.row(),
            Self::Column => pos.col(),
            Self::Box => pos.box_index(),
            Self::Cell => pos.linear_index(),
        }
    }

    /// Returns the other line kind (`Row` for `Column` and vice versa).
    ///
    /// # Panics
    ///
    /// Panics on `Box` and `Cell`.
    #[must_use]
    pub fn crossing(self) -> Self {
        match self {
            Self::Row => Self::Column,
            Self::Column => Self::Row,
            Self::Box | Self::Cell => panic!("no crossing line for {self:?}"),
        }
    }
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Row => "row",
            Self::Column => "column",
            Self::Box => "box",
            Self::Cell => "cell",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_positions() {
        for i in 0..9 {
            assert_eq!(House::Row.position(3, i), Position::new(3, i));
        }
    }

    #[test]
    fn test_column_positions() {
        for i in 0..9 {
            assert_eq!(House::Column.position(6, i), Position::new(i, 6));
        }
    }

    #[test]
    fn test_box_positions() {
        // Box 4 covers rows 3-5, cols 3-5 in row-major order.
        assert_eq!(House::Box.position(4, 0), Position::new(3, 3));
        assert_eq!(House::Box.position(4, 2), Position::new(3, 5));
        assert_eq!(House::Box.position(4, 3), Position::new(4, 3));
        assert_eq!(House::Box.position(4, 8), Position::new(5, 5));
    }

    #[test]
    fn test_cell_positions() {
        assert_eq!(House::Cell.position(0, 0), Position::new(0, 0));
        assert_eq!(House::Cell.position(40, 0), Position::new(4, 4));
        assert_eq!(House::Cell.position(80, 0), Position::new(8, 8));
    }

    #[test]
    fn test_index_of_inverts_position() {
        for house in House::LINES_AND_BOXES {
            for house_index in 0..9 {
                for cell_index in 0..9 {
                    let pos = house.position(house_index, cell_index);
                    assert_eq!(house.index_of(pos), house_index);
                }
            }
        }
    }

    #[test]
    fn test_crossing() {
        assert_eq!(House::Row.crossing(), House::Column);
        assert_eq!(House::Column.crossing(), House::Row);
    }
}
