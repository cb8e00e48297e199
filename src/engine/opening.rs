//! Opening-move shortcut: fixed responses for the first two plies.

use crate::position::Position;
use crate::types::Board;

/// Returns a book move for the opening plies, if one applies.
///
/// On a 3x3 board the center is always optimal or tied-optimal on the
/// opening ply, so the search can be skipped entirely:
/// - Empty board: take the center.
/// - Exactly one mark placed and the center still free: take the center.
///
/// Any later position falls through to full search.
pub(super) fn opening_move(board: &Board) -> Option<Position> {
    match board.empty_count() {
        9 => Some(Position::Center),
        8 if board.is_empty(Position::Center) => Some(Position::Center),
        _ => None,
    }
}
