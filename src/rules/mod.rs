//! Terminal-state evaluation for tic-tac-toe.
//!
//! Pure functions over board snapshots: win detection, draw detection,
//! and the combined status evaluation the move selector recurses on.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Evaluates a board snapshot.
///
/// Checks the eight winning lines in fixed order (rows, columns,
/// diagonals), then falls back to draw detection. Pure and
/// deterministic: evaluating the same board twice yields the same
/// status.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
