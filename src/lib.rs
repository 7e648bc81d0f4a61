pub mod board;
pub mod game;
pub mod shell;

pub use board::{initial_board, is_valid_move, Board, Color, Kind, Move, Piece, Square};
pub use game::{ClickOutcome, GameState};
