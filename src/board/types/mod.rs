//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece`, `Kind` and `Color` - what stands on a square
//! - `Square` - an on-board (row, column) coordinate
//! - `Move` - a (from, to) pair

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Kind, Piece};
pub use square::{Square, BOARD_SIZE};
