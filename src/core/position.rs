//! Board coordinates.
//!
//! A `Position` is a validated (row, column) pair with both coordinates in
//! `1..=8`. Row 1 is White's back rank; column 1 is the a-file. Values are
//! checked once at construction so everything downstream can rely on them.
//!
//! ```
//! use chess_rules::core::Position;
//!
//! let e4: Position = "e4".parse().unwrap();
//! assert_eq!((e4.row(), e4.column()), (4, 5));
//! assert!(Position::new(0, 3).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{ChessError, Result};

/// Side length of the board.
pub const BOARD_SIZE: i32 = 8;

/// A square on the 8x8 grid.
///
/// Ordering is row-major: (1,1) < (1,2) < ... < (8,8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Create a position, failing with `InvalidArgument` outside `1..=8`.
    pub fn new(row: i32, column: i32) -> Result<Self> {
        if in_bounds(row, column) {
            Ok(Self::from_checked(row, column))
        } else {
            Err(ChessError::invalid_argument(format!(
                "position ({row}, {column}) is off the board; \
                 row and column must be between 1 and 8"
            )))
        }
    }

    /// Create a position from literal coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `1..=8`.
    #[must_use]
    pub(crate) const fn at(row: i32, column: i32) -> Self {
        assert!(in_bounds(row, column), "Position out of range");
        Self::from_checked(row, column)
    }

    const fn from_checked(row: i32, column: i32) -> Self {
        Self {
            row: row as u8,
            column: column as u8,
        }
    }

    /// Row, 1 is White's back rank.
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row as i32
    }

    /// Column, 1 is the a-file.
    #[must_use]
    pub const fn column(self) -> i32 {
        self.column as i32
    }

    /// The square `d_row` rows and `d_column` columns away, if it is on the board.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_column: i32) -> Option<Self> {
        let row = self.row() + d_row;
        let column = self.column() + d_column;
        if in_bounds(row, column) {
            Some(Self::from_checked(row, column))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_SIZE)
            .flat_map(|row| (1..=BOARD_SIZE).map(move |column| Self::from_checked(row, column)))
    }
}

const fn in_bounds(row: i32, column: i32) -> bool {
    row >= 1 && row <= BOARD_SIZE && column >= 1 && column <= BOARD_SIZE
}

impl TryFrom<(i32, i32)> for Position {
    type Error = ChessError;

    fn try_from((row, column): (i32, i32)) -> Result<Self> {
        Self::new(row, column)
    }
}

impl From<Position> for (i32, i32) {
    fn from(position: Position) -> Self {
        (position.row(), position.column())
    }
}

/// Algebraic square name, e.g. `e4`.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.column - 1) as char;
        write!(f, "{file}{}", self.row)
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::invalid_argument(format!("malformed square name {s:?}")));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::invalid_argument(format!("malformed square name {s:?}")));
        }
        Self::new(i32::from(rank - b'0'), i32::from(file - b'a' + 1))
    }
}
