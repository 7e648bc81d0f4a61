use super::super::{Board, Color, Square};

impl Board {
    /// Pawns step forward onto empty squares, double-step from their home
    /// row through an empty square, and capture one square diagonally forward.
    pub(crate) fn pawn_move_ok(&self, color: Color, start: Square, end: Square) -> bool {
        let dir = color.pawn_direction();
        let (d_row, d_col) = start.delta_to(end);

        match (d_row, d_col.abs()) {
            (r, 0) if r == dir => self.is_empty(end),
            (r, 0) if r == 2 * dir => {
                start.row() == color.pawn_home_row()
                    && start.offset(dir, 0).is_some_and(|mid| self.is_empty(mid))
                    && self.is_empty(end)
            }
            // own-colored targets were rejected before we got here
            (r, 1) if r == dir => !self.is_empty(end),
            _ => false,
        }
    }
}
