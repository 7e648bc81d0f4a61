//! A two-player game on one board.
//!
//! `GameState` owns the board, the side to move and the current selection.
//! It is the only place where accepted moves mutate the board and where the
//! turn flips.

use log::{debug, info};

use crate::board::{is_valid_move, Board, Color, Move, MoveError, Piece, Square};

/// What a click on a square did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing selected and the square does not hold a piece of the side to move
    Ignored,
    /// The square is now selected
    Selected(Square),
    /// The selected square was clicked again
    Deselected,
    /// The selected piece moved; `captured` is the piece it took, if any
    Moved { mv: Move, captured: Option<Piece> },
    /// The selected piece cannot go there; the selection is kept
    Rejected(MoveError),
}

/// Board, side to move and selection for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    selected: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    #[must_use]
    pub fn from_board(board: Board, turn: Color) -> Self {
        GameState {
            board,
            turn,
            selected: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Check a move for the side to move without playing it.
    pub fn check_move(&self, mv: Move) -> Result<Piece, MoveError> {
        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySquare { square: mv.from })?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourTurn { turn: self.turn });
        }
        if !is_valid_move(piece, mv.from, mv.to, &self.board) {
            return Err(MoveError::Illegal { mv });
        }
        Ok(piece)
    }

    /// Play `mv` for the side to move.
    ///
    /// On success the piece is relocated, any captured piece removed, the
    /// selection cleared and the turn passed. Returns the captured piece.
    /// On failure nothing changes.
    pub fn try_move(&mut self, mv: Move) -> Result<Option<Piece>, MoveError> {
        let piece = self.check_move(mv).inspect_err(|err| {
            debug!("rejected {mv}: {err}");
        })?;

        let captured = self.board.move_piece(mv);
        self.selected = None;
        self.turn = self.turn.opponent();

        match captured {
            Some(taken) => info!("{piece} {mv} takes {taken}"),
            None => info!("{piece} {mv}"),
        }
        Ok(captured)
    }

    /// Handle a click on `square`.
    ///
    /// With nothing selected, a piece of the side to move gets selected.
    /// Clicking the selected square again clears the selection. Any other
    /// square is treated as the destination of the selected piece.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        let Some(from) = self.selected else {
            return match self.board.piece_at(square) {
                Some(piece) if piece.color == self.turn => {
                    self.selected = Some(square);
                    debug!("selected {piece} on {square}");
                    ClickOutcome::Selected(square)
                }
                _ => ClickOutcome::Ignored,
            };
        };

        if from == square {
            self.selected = None;
            return ClickOutcome::Deselected;
        }

        let mv = Move::new(from, square);
        match self.try_move(mv) {
            Ok(captured) => ClickOutcome::Moved { mv, captured },
            Err(err) => ClickOutcome::Rejected(err),
        }
    }

    /// Drop the current selection, if any.
    pub fn deselect(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Kind};

    fn sq(notation: &str) -> Square {
        notation.parse().unwrap()
    }

    fn mv(notation: &str) -> Move {
        notation.parse().unwrap()
    }

    #[test]
    fn test_new_game_white_to_move() {
        let game = GameState::new();
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.selected(), None);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_try_move_flips_turn() {
        let mut game = GameState::new();
        assert_eq!(game.try_move(mv("e2e4")), Ok(None));
        assert_eq!(game.turn(), Color::Black);
        assert!(game.board().is_empty(sq("e2")));
        assert_eq!(
            game.board().piece_at(sq("e4")),
            Some(Piece::new(Color::White, Kind::Pawn))
        );
    }

    #[test]
    fn test_try_move_wrong_side() {
        let mut game = GameState::new();
        assert_eq!(
            game.try_move(mv("e7e5")),
            Err(MoveError::NotYourTurn { turn: Color::White })
        );
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_try_move_empty_square() {
        let mut game = GameState::new();
        assert_eq!(
            game.try_move(mv("e4e5")),
            Err(MoveError::EmptySquare { square: sq("e4") })
        );
    }

    #[test]
    fn test_try_move_illegal_leaves_state() {
        let mut game = GameState::new();
        let err = game.try_move(mv("a1b1")).unwrap_err();
        assert_eq!(err, MoveError::Illegal { mv: mv("a1b1") });
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_capture_removes_piece() {
        let board = BoardBuilder::new()
            .piece(sq("d4"), Color::White, Kind::Rook)
            .piece(sq("d7"), Color::Black, Kind::Knight)
            .build();
        let mut game = GameState::from_board(board, Color::White);

        let captured = game.try_move(mv("d4d7")).unwrap();

        assert_eq!(captured, Some(Piece::new(Color::Black, Kind::Knight)));
        assert_eq!(game.board().count(Color::Black), 0);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_click_selects_only_own_pieces() {
        let mut game = GameState::new();
        assert_eq!(game.click(sq("e4")), ClickOutcome::Ignored);
        assert_eq!(game.click(sq("e7")), ClickOutcome::Ignored);
        assert_eq!(game.selected(), None);
        assert_eq!(game.click(sq("e2")), ClickOutcome::Selected(sq("e2")));
        assert_eq!(game.selected(), Some(sq("e2")));
    }

    #[test]
    fn test_click_same_square_deselects() {
        let mut game = GameState::new();
        game.click(sq("g1"));
        assert_eq!(game.click(sq("g1")), ClickOutcome::Deselected);
        assert_eq!(game.selected(), None);
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_click_moves_selected_piece() {
        let mut game = GameState::new();
        game.click(sq("g1"));
        assert_eq!(
            game.click(sq("f3")),
            ClickOutcome::Moved {
                mv: mv("g1f3"),
                captured: None
            }
        );
        assert_eq!(game.selected(), None);
        assert_eq!(game.turn(), Color::Black);
    }

    #[test]
    fn test_rejected_click_keeps_selection() {
        let mut game = GameState::new();
        game.click(sq("a1"));
        let before = game.clone();

        let outcome = game.click(sq("b1"));

        assert_eq!(
            outcome,
            ClickOutcome::Rejected(MoveError::Illegal { mv: mv("a1b1") })
        );
        assert_eq!(game, before);
        assert_eq!(game.selected(), Some(sq("a1")));
    }

    #[test]
    fn test_rejected_outcome_is_copy() {
        let mut game = GameState::new();
        game.click(sq("e2"));
        let outcome = game.click(sq("e5"));
        let kept = outcome;

        assert_eq!(outcome, kept);
        if let ClickOutcome::Rejected(err) = outcome {
            let first = err;
            assert_eq!(first, err);
            assert_eq!(err.to_string(), "Illegal move 'e2e5'");
        } else {
            panic!("expected a rejection, got {outcome:?}");
        }
    }

    #[test]
    fn test_deselect() {
        let mut game = GameState::new();
        game.click(sq("b1"));
        game.deselect();
        assert_eq!(game.selected(), None);
    }
}
