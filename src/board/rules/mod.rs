//! Move legality.
//!
//! Answers one question: can this piece move from `start` to `end` on this
//! board, under the basic movement rules of its kind? There is no notion of
//! check, castling, en passant or promotion here. Every function is a pure
//! predicate over a borrowed board.

mod kings;
mod knights;
mod pawns;
mod sliders;

use log::trace;

use super::{Board, Color, Kind, Move, Piece, Square};

/// Decide whether `piece`, standing on `start`, may move to `end`.
///
/// `piece` must be the piece on `start`; the board is not consulted for it.
/// A move onto a piece of the mover's own color is never legal, and neither
/// is a move that stays in place.
#[must_use]
pub fn is_valid_move(piece: Piece, start: Square, end: Square, board: &Board) -> bool {
    debug_assert_eq!(
        board.piece_at(start),
        Some(piece),
        "piece does not stand on {start}"
    );

    if board
        .piece_at(end)
        .is_some_and(|target| target.color == piece.color)
    {
        return false;
    }
    if start == end {
        return false;
    }

    let legal = match piece.kind {
        Kind::Pawn => board.pawn_move_ok(piece.color, start, end),
        Kind::Rook => board.rook_move_ok(start, end),
        Kind::Knight => knights::knight_move_ok(start, end),
        Kind::Bishop => board.bishop_move_ok(start, end),
        Kind::Queen => board.rook_move_ok(start, end) || board.bishop_move_ok(start, end),
        Kind::King => kings::king_move_ok(start, end),
    };
    trace!("{piece} {start}{end}: {legal}");
    legal
}

impl Board {
    /// Whether the piece standing on `start` may move to `end`.
    ///
    /// Returns false when `start` is empty.
    #[must_use]
    pub fn is_valid_move(&self, start: Square, end: Square) -> bool {
        self.piece_at(start)
            .is_some_and(|piece| is_valid_move(piece, start, end, self))
    }

    /// Every square the piece on `start` may move to, in row-major order.
    #[must_use]
    pub fn legal_destinations(&self, start: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(start) else {
            return Vec::new();
        };
        Square::all()
            .filter(|&end| is_valid_move(piece, start, end, self))
            .collect()
    }

    /// Every move available to `color`.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pieces()
            .filter(|(_, piece)| piece.color == color)
            .flat_map(|(from, _)| {
                self.legal_destinations(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }
}
