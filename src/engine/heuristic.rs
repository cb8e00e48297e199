//! Static positional evaluation for draw-valued lines of play.

use crate::position::Position;
use crate::types::{Board, Player, Square};

/// Scores a board position from `mark`'s perspective.
///
/// Center control is worth 3, each corner 2, negated when held by the
/// opponent. Only applied to branches whose minimax value is exactly a
/// draw; decisive scores are never re-scored, which keeps the
/// alpha-beta bounds sound.
pub(super) fn positional_score(board: &Board, mark: Player) -> i32 {
    let mut score = 0;

    // Center control is key
    match board.get(Position::Center) {
        Square::Occupied(p) if p == mark => score += 3,
        Square::Occupied(_) => score -= 3,
        Square::Empty => {}
    }

    // Corners are valuable
    for corner in Position::CORNERS {
        match board.get(corner) {
            Square::Occupied(p) if p == mark => score += 2,
            Square::Occupied(_) => score -= 2,
            Square::Empty => {}
        }
    }

    score
}
