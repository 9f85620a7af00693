//! The puzzle value type: board, candidates, and solution.

use crate::{Digit, DigitGrid, DigitSet, GridError, Position};

/// A sudoku puzzle: the visible board, the per-cell candidate sets, and the
/// unique solution (populated by the generator).
///
/// `Puzzle` is a small `Copy` value (a few hundred bytes); the solver and the
/// generator branch by copying the whole puzzle rather than keeping undo
/// logs.
///
/// # Candidate maintenance
///
/// [`place`](Self::place) enforces the single-write invariant: placing a
/// digit removes it from the candidates of every cell in the same row,
/// column, and box. The placed cell is swept as its own row and column peer,
/// so its candidate set is stale after placement; consumers must treat the
/// board cell as the source of truth and only inspect candidates of empty
/// cells.
///
/// # Examples
///
/// ```
/// use sudori_core::{Digit, Position, Puzzle};
///
/// let mut puzzle = Puzzle::empty();
/// assert_eq!(puzzle.candidate_count(Position::new(0, 0)), 9);
///
/// puzzle.place(Position::new(0, 0), Digit::D5);
/// // 5 is gone from every peer.
/// assert!(!puzzle.candidates_at(Position::new(0, 8)).contains(Digit::D5));
/// assert!(!puzzle.candidates_at(Position::new(8, 0)).contains(Digit::D5));
/// assert!(!puzzle.candidates_at(Position::new(1, 1)).contains(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    board: DigitGrid,
    candidates: [[DigitSet; 9]; 9],
    solution: DigitGrid,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::empty()
    }
}

impl Puzzle {
    /// Creates an empty puzzle with every candidate available.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            board: DigitGrid::new(),
            candidates: [[DigitSet::FULL; 9]; 9],
            solution: DigitGrid::new(),
        }
    }

    /// Creates a puzzle from an existing board, with candidates recomputed
    /// to match.
    ///
    /// The solution grid starts empty.
    #[must_use]
    pub fn from_board(board: DigitGrid) -> Self {
        let mut puzzle = Self::empty();
        puzzle.board = board;
        puzzle.recompute_candidates();
        puzzle
    }

    /// Returns the visible board.
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &DigitGrid {
        &self.board
    }

    /// Returns the visible board for mutation.
    ///
    /// This exists for interactive front ends that write player digits
    /// directly; the core never observes such writes.
    #[inline]
    pub const fn board_mut(&mut self) -> &mut DigitGrid {
        &mut self.board
    }

    /// Returns the solution grid. Empty unless populated by the generator.
    #[inline]
    #[must_use]
    pub const fn solution(&self) -> &DigitGrid {
        &self.solution
    }

    /// Sets the solution grid.
    pub const fn set_solution(&mut self, solution: DigitGrid) {
        self.solution = solution;
    }

    /// Returns the candidate set of the cell at `pos`.
    ///
    /// Iteration over the returned set yields digits in ascending order. The
    /// candidates of a filled cell are stale; gate on board emptiness first.
    #[inline]
    #[must_use]
    pub const fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates[pos.row() as usize][pos.col() as usize]
    }

    /// Returns the number of candidates of the cell at `pos`.
    #[inline]
    #[must_use]
    pub const fn candidate_count(&self, pos: Position) -> u8 {
        self.candidates_at(pos).len()
    }

    /// Returns the candidate digits of a cell through the raw-index
    /// surface, in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoord`] if `row` or `col` is outside 0-8.
    pub fn candidate_values(&self, row: u8, col: u8) -> Result<Vec<u8>, GridError> {
        let pos = Position::try_new(row, col).ok_or(GridError::InvalidCoord { row, col })?;
        Ok(self.candidates_at(pos).iter().map(Digit::value).collect())
    }

    /// Places a digit and prunes it from the candidates of every peer.
    ///
    /// The row and column sweeps include the placed cell itself, so its own
    /// candidate set loses `digit` and nothing else. No rule checking is
    /// performed; validity is the caller's duty.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.board.set(pos, Some(digit));
        for i in 0..9 {
            self.candidates[pos.row() as usize][i as usize].remove(digit);
            self.candidates[i as usize][pos.col() as usize].remove(digit);
        }
        let origin = Position::box_origin(pos.box_index());
        for row in origin.row()..origin.row() + 3 {
            for col in origin.col()..origin.col() + 3 {
                self.candidates[row as usize][col as usize].remove(digit);
            }
        }
    }

    /// Places a digit through the raw-index surface.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoord`] if `row` or `col` is outside 0-8,
    /// or [`GridError::InvalidDigit`] if `value` is outside 1-9.
    pub fn place_digit(&mut self, row: u8, col: u8, value: u8) -> Result<(), GridError> {
        let pos = Position::try_new(row, col).ok_or(GridError::InvalidCoord { row, col })?;
        let digit = Digit::try_from_value(value).ok_or(GridError::InvalidDigit { value })?;
        self.place(pos, digit);
        Ok(())
    }

    /// Rebuilds every candidate set from the current board.
    ///
    /// All candidates are restored, then the peer pruning of
    /// [`place`](Self::place) is replayed for every filled cell. The result
    /// agrees with incremental maintenance over any placement order.
    pub fn recompute_candidates(&mut self) {
        self.candidates = [[DigitSet::FULL; 9]; 9];
        for pos in Position::all() {
            if let Some(digit) = self.board.get(pos) {
                self.place(pos, digit);
            }
        }
    }

    /// Clears every candidate set.
    ///
    /// Used by interactive front ends to hide pencil marks.
    pub fn clear_candidates(&mut self) {
        self.candidates = [[DigitSet::EMPTY; 9]; 9];
    }

    /// Toggles a single candidate through the raw-index surface.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoord`] if `row` or `col` is outside 0-8,
    /// or [`GridError::InvalidDigit`] if `value` is outside 1-9.
    pub fn toggle_candidate(&mut self, row: u8, col: u8, value: u8) -> Result<(), GridError> {
        let pos = Position::try_new(row, col).ok_or(GridError::InvalidCoord { row, col })?;
        let digit = Digit::try_from_value(value).ok_or(GridError::InvalidDigit { value })?;
        self.candidates[pos.row() as usize][pos.col() as usize].toggle(digit);
        Ok(())
    }

    /// Removes a single candidate. Returns `true` if it was present.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        self.candidates[pos.row() as usize][pos.col() as usize].remove(digit)
    }

    /// Returns the empty cell with the fewest candidates, earliest in
    /// row-major order on ties, or `None` if the board is full.
    #[must_use]
    pub fn most_constrained_cell(&self) -> Option<Position> {
        let mut best: Option<(Position, u8)> = None;
        for pos in Position::all() {
            if self.board.get(pos).is_some() {
                continue;
            }
            let count = self.candidate_count(pos);
            match best {
                Some((_, best_count)) if best_count <= count => {}
                _ => best = Some((pos, count)),
            }
        }
        best.map(|(pos, _)| pos)
    }

    /// Returns `true` if every cell holding `digit` in the solution also
    /// holds it on the board.
    #[must_use]
    pub fn number_is_complete(&self, digit: Digit) -> bool {
        Position::all().all(|pos| {
            self.solution.get(pos) != Some(digit) || self.board.get(pos) == Some(digit)
        })
    }
}
