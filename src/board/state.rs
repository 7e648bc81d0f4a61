use super::{Color, Kind, Move, Piece, Square, BOARD_SIZE};

/// An 8x8 grid of squares, each empty or holding one piece.
///
/// The board knows nothing about turns or legality; it only stores pieces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            let back = color.back_row();
            let pawns = color.pawn_home_row();
            for (col, kind) in Kind::BACK_RANK.into_iter().enumerate() {
                board.set_piece(Square::at(back, col), Piece::new(color, kind));
                board.set_piece(Square::at(pawns, col), Piece::new(color, Kind::Pawn));
            }
        }
        board
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, replacing whatever stood there.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) {
        self.squares[square.row()][square.col()] = Some(piece);
    }

    /// Empty `square`, returning the piece that was on it.
    #[inline]
    pub fn clear_square(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].take()
    }

    /// Relocate the piece on `mv.from` to `mv.to` without any rule checks.
    ///
    /// Returns the piece previously on `mv.to`, i.e. the capture. Moving from
    /// an empty square only clears the destination.
    pub fn move_piece(&mut self, mv: Move) -> Option<Piece> {
        if mv.is_null() {
            return None;
        }
        let moving = self.clear_square(mv.from);
        let captured = self.clear_square(mv.to);
        if let Some(piece) = moving {
            self.set_piece(mv.to, piece);
        }
        captured
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Number of pieces of `color` on the board
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, p)| p.color == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// The standard starting position.
#[must_use]
pub fn initial_board() -> Board {
    Board::new()
}
