//! Minimax search with alpha-beta pruning over the 3x3 board.

use super::heuristic::positional_score;
use super::opening::opening_move;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Score bounds for the search. Any terminal score fits comfortably
/// inside them, so they double as the initial alpha/beta window.
const SCORE_MIN: i32 = -1000;
const SCORE_MAX: i32 = 1000;

/// Base value of a decisive line before depth adjustment.
const WIN_BASE: i32 = 100;

/// Error raised when the selector is invoked on a board with no moves.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SelectError {
    /// Every square is occupied; there is nothing to select.
    #[display("No empty squares to select a move from")]
    NoEmptySquares,
}

/// Scores the position for `mark` after a trial placement, `depth`
/// plies below the root. `maximizing` is true when `mark` is to move.
///
/// Wins are depth-adjusted (faster wins score higher, slower losses
/// score higher) and child scores of exactly zero - eventual draws
/// under optimal play - are replaced by the positional heuristic,
/// evaluated with the trial move still on the board.
///
/// The board is a scratch buffer: every placement is retracted before
/// moving to the next sibling, and the pruning break happens only
/// after the retraction.
fn minimax(
    board: &mut Board,
    mark: Player,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match rules::evaluate(board) {
        GameStatus::Won(winner) => {
            return if winner == mark {
                WIN_BASE - depth
            } else {
                depth - WIN_BASE
            };
        }
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let to_move = if maximizing { mark } else { mark.opponent() };
    let mut best = if maximizing { SCORE_MIN } else { SCORE_MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Occupied(to_move));
        let mut score = minimax(board, mark, depth + 1, !maximizing, alpha, beta);
        if score == 0 {
            score = positional_score(board, mark);
        }
        board.set(pos, Square::Empty);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Selects the best move for `mark` on the given board.
///
/// Tries the opening book first, then scores every empty square via
/// minimax and picks uniformly at random among the squares sharing the
/// maximum score. The caller's board is never mutated; the search runs
/// on a private scratch copy.
///
/// The generator is a parameter so hosts can seed it for reproducible
/// play.
///
/// # Errors
///
/// Returns [`SelectError::NoEmptySquares`] if the board is full.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Player,
    rng: &mut R,
) -> Result<Position, SelectError> {
    let candidates = Position::valid_moves(board);
    if candidates.is_empty() {
        return Err(SelectError::NoEmptySquares);
    }

    if let Some(pos) = opening_move(board) {
        debug!(position = %pos, "Book move");
        return Ok(pos);
    }

    let mut scratch = board.clone();
    let mut best_score = SCORE_MIN;
    let mut best_moves: Vec<Position> = Vec::new();

    for pos in candidates {
        scratch.set(pos, Square::Occupied(mark));
        let score = minimax(&mut scratch, mark, 0, false, SCORE_MIN, SCORE_MAX);
        scratch.set(pos, Square::Empty);

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(pos);
        } else if score == best_score {
            best_moves.push(pos);
        }
    }

    let chosen = best_moves[rng.random_range(0..best_moves.len())];
    debug!(position = %chosen, score = best_score, ties = best_moves.len(), "Search move");
    Ok(chosen)
}

/// Minimax opponent with its own random source for tie-breaking.
pub struct MinimaxAi {
    mark: Player,
    rng: StdRng,
}

impl MinimaxAi {
    /// Creates an opponent playing `mark`, seeded from OS entropy.
    pub fn new(mark: Player) -> Self {
        Self {
            mark,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an opponent with a fixed seed for reproducible play.
    pub fn with_seed(mark: Player, seed: u64) -> Self {
        Self {
            mark,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the mark this opponent plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Selects the next move on the given board.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoEmptySquares`] if the board is full.
    pub fn select_move(&mut self, board: &Board) -> Result<Position, SelectError> {
        select_move(board, self.mark, &mut self.rng)
    }
}
