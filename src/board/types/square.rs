//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// A square on the board, represented as (row, column).
///
/// Row 0 is Black's back rank, row 7 is White's. Column 0 is the a-file.
/// A `Square` is always on the board; every constructor checks bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSquare"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Create a square that the caller knows is on the board.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Self {
        match Square::new(row, col) {
            Some(sq) => sq,
            None => panic!("square out of bounds"),
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Square reached by moving `(d_row, d_col)`, or `None` if off the board
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Square> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Square::new(row, col)
    }

    /// Signed (row, column) distance from `self` to `to`
    #[inline]
    #[must_use]
    pub fn delta_to(self, to: Square) -> (isize, isize) {
        (
            to.row() as isize - self.row() as isize,
            to.col() as isize - self.col() as isize,
        )
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square::at(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col + b'a') as char, BOARD_SIZE - self.row())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        Ok(Square::at(row, col))
    }
}

/// Unchecked wire form of a square, validated on the way into `Square`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawSquare {
    row: usize,
    col: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSquare> for Square {
    type Error = SquareError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::try_from((raw.row, raw.col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => BOARD_SIZE - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square::at(row, col))
    }
}
