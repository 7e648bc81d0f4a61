use super::super::{Board, Square};

impl Board {
    /// Same row or same column, nothing in between.
    pub(crate) fn rook_move_ok(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = start.delta_to(end);
        (d_row == 0) != (d_col == 0) && self.path_clear(start, end)
    }

    /// Same diagonal, nothing in between.
    pub(crate) fn bishop_move_ok(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = start.delta_to(end);
        d_row != 0 && d_row.abs() == d_col.abs() && self.path_clear(start, end)
    }

    /// True when every square strictly between `start` and `end` is empty.
    ///
    /// The squares must share a row, column or diagonal.
    pub(crate) fn path_clear(&self, start: Square, end: Square) -> bool {
        let (d_row, d_col) = start.delta_to(end);
        let (step_row, step_col) = (d_row.signum(), d_col.signum());
        let steps = d_row.abs().max(d_col.abs());

        (1..steps).all(|i| {
            start
                .offset(step_row * i, step_col * i)
                .is_some_and(|sq| self.is_empty(sq))
        })
    }
}
