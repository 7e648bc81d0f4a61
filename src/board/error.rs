//! Error types for board operations.

use std::fmt;

use super::{Color, Move, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for piece placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Wrong number of '/'-separated rows
    RowCount { found: usize },
    /// Invalid piece character
    InvalidPiece { char: char },
    /// A row describes more or fewer than 8 squares
    RowLength { row: usize, squares: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::RowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            PlacementError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            PlacementError::RowLength { row, squares } => {
                write!(f, "Row {row} describes {squares} squares, expected 8")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Reasons a game refuses to play a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Nothing stands on the origin square
    EmptySquare { square: Square },
    /// The piece on the origin square belongs to the side not on move
    NotYourTurn { turn: Color },
    /// The piece cannot move that way
    Illegal { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::NotYourTurn { turn } => write!(f, "It is {turn}'s turn"),
            MoveError::Illegal { mv } => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for MoveError {}
