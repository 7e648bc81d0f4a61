use super::super::Square;

/// One step in any direction. Nothing stops a king walking into check.
pub(super) fn king_move_ok(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    d_row.abs().max(d_col.abs()) == 1
}
