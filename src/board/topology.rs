//! Square ↔ grid mapping.
//!
//! Squares are numbered boustrophedon style: row 0 (the bottom row) runs
//! left-to-right from 1 to 10, row 1 runs right-to-left from 11 to 20, and
//! so on up to square 100 in the top-left corner.
//!
//! ```text
//!  row 9   100  99  98 ...  91
//!  ...
//!  row 1    20  19  18 ...  11
//!  row 0     1   2   3 ...  10
//! ```

use crate::core::{BoardError, Cell, Square};

/// Map a raw square number to its grid cell.
///
/// Fails with `BoardError::InvalidSquare` for numbers outside `1..=100`.
///
/// ```
/// use snakes_ladders::board::square_to_cell;
/// use snakes_ladders::core::Cell;
///
/// assert_eq!(square_to_cell(12).unwrap(), Cell::new(1, 8).unwrap());
/// assert!(square_to_cell(0).is_err());
/// ```
pub fn square_to_cell(square: u16) -> Result<Cell, BoardError> {
    Ok(Square::new(square)?.cell())
}

/// Map raw grid coordinates back to their square.
///
/// Fails with `BoardError::InvalidCell` when either coordinate is off the
/// grid. A validated `Cell` can use `Cell::square` directly.
pub fn cell_to_square(row: u8, col: u8) -> Result<Square, BoardError> {
    Ok(Cell::new(row, col)?.square())
}

/// Screen centre of a square for a board drawn with `cell_size` pixel cells.
#[must_use]
pub fn square_center(square: Square, cell_size: f32) -> (f32, f32) {
    square.cell().pixel_center(cell_size)
}
