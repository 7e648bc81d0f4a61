//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `initial.rs` - Starting layout and mechanical board mutation
//! - `pawns.rs` - Pawn pushes, double steps and captures
//! - `pieces.rs` - Rook, knight, bishop, queen and king movement
//! - `proptest.rs` - Property-based tests

mod pieces;
