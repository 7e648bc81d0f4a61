use super::super::Square;

/// Knights jump in an L shape; nothing in between matters.
pub(super) fn knight_move_ok(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}
