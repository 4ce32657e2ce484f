//! Board squares and grid cells.
//!
//! ## Square
//!
//! Type-safe square number in `1..=100`. The only way to build one from a
//! raw number is [`Square::new`], so every `Square` in the engine is valid.
//!
//! ## Cell
//!
//! A `(row, col)` position on the 10×10 grid. Row 0 is the bottom row of
//! the board, column 0 the left edge.

use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Number of rows on the board.
pub const ROWS: u8 = 10;

/// Number of columns on the board.
pub const COLS: u8 = 10;

/// Total number of squares.
pub const SQUARE_COUNT: u8 = ROWS * COLS;

/// A square number on the board, always in `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Square(u8);

impl Square {
    /// The square every game starts on.
    pub const START: Square = Square(1);

    /// The winning square.
    pub const FINISH: Square = Square(SQUARE_COUNT);

    /// Create a square, failing for numbers outside `1..=100`.
    ///
    /// ```
    /// use snakes_ladders::core::Square;
    ///
    /// assert_eq!(Square::new(42).unwrap().number(), 42);
    /// assert!(Square::new(0).is_err());
    /// assert!(Square::new(101).is_err());
    /// ```
    pub fn new(number: u16) -> Result<Self, BoardError> {
        if (1..=u16::from(SQUARE_COUNT)).contains(&number) {
            Ok(Self(number as u8))
        } else {
            Err(BoardError::InvalidSquare(number))
        }
    }

    /// Get the square number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Is this the winning square?
    #[must_use]
    pub const fn is_finish(self) -> bool {
        self.0 >= SQUARE_COUNT
    }

    /// The next square, capped at the finish.
    #[must_use]
    pub const fn step_forward(self) -> Self {
        if self.0 >= SQUARE_COUNT {
            Self::FINISH
        } else {
            Self(self.0 + 1)
        }
    }

    /// Squares left until the finish.
    #[must_use]
    pub const fn distance_to_finish(self) -> u8 {
        SQUARE_COUNT - self.0
    }

    /// The grid cell this square occupies.
    #[must_use]
    pub const fn cell(self) -> Cell {
        let index = self.0 - 1;
        let row = index / COLS;
        let mut col = index % COLS;
        if row % 2 == 1 {
            col = COLS - 1 - col;
        }
        Cell { row, col }
    }

    /// Iterate over every square from start to finish.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=SQUARE_COUNT).map(Square)
    }
}

impl TryFrom<u16> for Square {
    type Error = BoardError;

    fn try_from(number: u16) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Square> for u16 {
    fn from(square: Square) -> u16 {
        u16::from(square.0)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell on the 10×10 grid.
///
/// Row 0 is the bottom row. Columns run left-to-right on even rows and
/// right-to-left on odd rows when following square numbers.
///
/// Like `Square`, a `Cell` can only be built through a validating
/// constructor, so both coordinates are always in `0..10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Create a cell, failing when either coordinate is off the board.
    ///
    /// ```
    /// use snakes_ladders::core::Cell;
    ///
    /// assert_eq!(Cell::new(1, 8).unwrap().square().number(), 12);
    /// assert!(Cell::new(10, 0).is_err());
    /// ```
    pub fn new(row: u8, col: u8) -> Result<Self, BoardError> {
        if row < ROWS && col < COLS {
            Ok(Self { row, col })
        } else {
            Err(BoardError::InvalidCell { row, col })
        }
    }

    /// Row from the bottom of the board.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column from the left edge of the board.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square number at this cell.
    #[must_use]
    pub const fn square(self) -> Square {
        let col = if self.row % 2 == 1 {
            COLS - 1 - self.col
        } else {
            self.col
        };
        Square(self.row * COLS + col + 1)
    }

    /// Top-left screen coordinate of this cell.
    ///
    /// Screen space has its origin at the top-left corner of the board, so
    /// row 0 (the bottom row) is drawn last.
    #[must_use]
    pub fn pixel_origin(self, cell_size: f32) -> (f32, f32) {
        (
            f32::from(self.col) * cell_size,
            f32::from(ROWS - 1 - self.row) * cell_size,
        )
    }

    /// Screen coordinate of the centre of this cell.
    #[must_use]
    pub fn pixel_center(self, cell_size: f32) -> (f32, f32) {
        let (x, y) = self.pixel_origin(cell_size);
        (x + cell_size / 2.0, y + cell_size / 2.0)
    }
}

/// Unchecked form of `Cell` used only while deserializing.
#[derive(Deserialize)]
struct RawCell {
    row: u8,
    col: u8,
}

impl TryFrom<RawCell> for Cell {
    type Error = BoardError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Self::new(raw.row, raw.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(1).is_ok());
        assert!(Square::new(100).is_ok());
        assert_eq!(Square::new(0), Err(BoardError::InvalidSquare(0)));
        assert_eq!(Square::new(101), Err(BoardError::InvalidSquare(101)));
    }

    #[test]
    fn test_constants() {
        assert_eq!(Square::START.number(), 1);
        assert_eq!(Square::FINISH.number(), 100);
        assert!(Square::FINISH.is_finish());
        assert!(!Square::START.is_finish());
    }

    #[test]
    fn test_step_forward_caps() {
        let sq = Square::new(99).unwrap();
        assert_eq!(sq.step_forward(), Square::FINISH);
        assert_eq!(Square::FINISH.step_forward(), Square::FINISH);
    }

    #[test]
    fn test_distance_to_finish() {
        assert_eq!(Square::START.distance_to_finish(), 99);
        assert_eq!(Square::new(97).unwrap().distance_to_finish(), 3);
        assert_eq!(Square::FINISH.distance_to_finish(), 0);
    }

    #[test]
    fn test_zigzag_cells() {
        assert_eq!(Square::new(1).unwrap().cell(), Cell { row: 0, col: 0 });
        assert_eq!(Square::new(10).unwrap().cell(), Cell { row: 0, col: 9 });
        // Second row runs right-to-left
        assert_eq!(Square::new(11).unwrap().cell(), Cell { row: 1, col: 9 });
        assert_eq!(Square::new(20).unwrap().cell(), Cell { row: 1, col: 0 });
        assert_eq!(Square::new(21).unwrap().cell(), Cell { row: 2, col: 0 });
        assert_eq!(Square::new(100).unwrap().cell(), Cell { row: 9, col: 0 });
        assert_eq!(Square::new(91).unwrap().cell(), Cell { row: 9, col: 9 });
    }

    #[test]
    fn test_cell_roundtrip() {
        for square in Square::all() {
            assert_eq!(square.cell().square(), square);
        }
    }

    #[test]
    fn test_cell_bounds() {
        assert!(Cell::new(9, 9).is_ok());
        assert_eq!(Cell::new(10, 0), Err(BoardError::InvalidCell { row: 10, col: 0 }));
        assert_eq!(Cell::new(0, 10), Err(BoardError::InvalidCell { row: 0, col: 10 }));
    }

    #[test]
    fn test_off_grid_cell_cannot_be_built() {
        // Rows past the top would map past square 100 or underflow the
        // screen flip, so construction must refuse them.
        assert_eq!(Cell::new(12, 0), Err(BoardError::InvalidCell { row: 12, col: 0 }));
        assert_eq!(Cell::new(26, 0), Err(BoardError::InvalidCell { row: 26, col: 0 }));
        assert!(Cell::new(u8::MAX, u8::MAX).is_err());

        assert!(serde_json::from_str::<Cell>(r#"{"row": 12, "col": 0}"#).is_err());
        assert!(serde_json::from_str::<Cell>(r#"{"row": 10, "col": 3}"#).is_err());
        assert!(serde_json::from_str::<Cell>(r#"{"row": 0, "col": 10}"#).is_err());
    }

    #[test]
    fn test_every_cell_maps_on_board() {
        for row in 0..ROWS {
            for col in 0..COLS {
                let cell = Cell::new(row, col).unwrap();
                assert_eq!((cell.row(), cell.col()), (row, col));
                assert!(Square::new(u16::from(cell.square().number())).is_ok());

                let (x, y) = cell.pixel_origin(80.0);
                assert!((0.0..800.0).contains(&x) && (0.0..800.0).contains(&y));
            }
        }
    }

    #[test]
    fn test_cell_serde() {
        let cell = Cell::new(3, 7).unwrap();
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);

        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }

    #[test]
    fn test_pixel_origin() {
        // Square 1 sits in the bottom-left corner
        let cell = Square::START.cell();
        assert_eq!(cell.pixel_origin(80.0), (0.0, 720.0));
        assert_eq!(cell.pixel_center(80.0), (40.0, 760.0));

        // Square 100 sits in the top-left corner
        assert_eq!(Square::FINISH.cell().pixel_origin(80.0), (0.0, 0.0));
    }

    #[test]
    fn test_square_serde() {
        let sq = Square::new(57).unwrap();
        let json = serde_json::to_string(&sq).unwrap();
        assert_eq!(json, "57");

        let back: Square = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sq);

        assert!(serde_json::from_str::<Square>("0").is_err());
        assert!(serde_json::from_str::<Square>("250").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Square::new(42).unwrap()), "42");
        assert_eq!(format!("{}", Cell { row: 3, col: 7 }), "(3, 7)");
    }
}
