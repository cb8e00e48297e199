//! Serializable snapshot of a game in any phase.
//!
//! The phase structs carry their guarantees in the type, so they
//! cannot be serialized directly. Hosts that persist plain data
//! (renderers, tally stores) consume this enum instead.

use crate::action::Move;
use crate::game::{GameFinished, GameInProgress, GameResult, GameSetup, Outcome};
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A game snapshot in any phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyGame {
    /// Game ready to start.
    Setup {
        /// The board state (always empty).
        board: Board,
    },
    /// Game in progress.
    InProgress {
        /// The board state.
        board: Board,
        /// Current player to move.
        to_move: Player,
        /// Move history.
        history: Vec<Move>,
    },
    /// Game finished.
    Finished {
        /// The board state.
        board: Board,
        /// The outcome.
        outcome: Outcome,
        /// Move history.
        history: Vec<Move>,
    },
}

impl From<GameSetup> for AnyGame {
    fn from(game: GameSetup) -> Self {
        AnyGame::Setup {
            board: game.board().clone(),
        }
    }
}

impl From<GameInProgress> for AnyGame {
    fn from(game: GameInProgress) -> Self {
        AnyGame::InProgress {
            board: game.board().clone(),
            to_move: game.to_move(),
            history: game.history().to_vec(),
        }
    }
}

impl From<GameFinished> for AnyGame {
    fn from(game: GameFinished) -> Self {
        AnyGame::Finished {
            board: game.board().clone(),
            outcome: *game.outcome(),
            history: game.history().to_vec(),
        }
    }
}

impl From<GameResult> for AnyGame {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress(g) => g.into(),
            GameResult::Finished(g) => g.into(),
        }
    }
}

impl AnyGame {
    /// Returns the board for any game phase.
    pub fn board(&self) -> &Board {
        match self {
            AnyGame::Setup { board } => board,
            AnyGame::InProgress { board, .. } => board,
            AnyGame::Finished { board, .. } => board,
        }
    }

    /// Returns the move history for any game phase (as positions).
    pub fn history(&self) -> Vec<Position> {
        match self {
            AnyGame::Setup { .. } => vec![],
            AnyGame::InProgress { history, .. } => history.iter().map(|m| m.position).collect(),
            AnyGame::Finished { history, .. } => history.iter().map(|m| m.position).collect(),
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyGame::Setup { .. } => "Ready to start".to_string(),
            AnyGame::InProgress { to_move, .. } => {
                format!("In progress. Player {:?} to move.", to_move)
            }
            AnyGame::Finished { outcome, .. } => match outcome {
                Outcome::Winner(player) => format!("Game over. Player {:?} wins!", player),
                Outcome::Draw => "Game over. Draw!".to_string(),
            },
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyGame::Finished { .. })
    }

    /// Returns the current player to move, if the game is in progress.
    pub fn to_move(&self) -> Option<Player> {
        match self {
            AnyGame::InProgress { to_move, .. } => Some(*to_move),
            _ => None,
        }
    }

    /// Returns the winner, if the game is finished with one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            AnyGame::Finished { outcome, .. } => outcome.winner(),
            _ => None,
        }
    }

    /// Makes a move on an in-progress snapshot.
    ///
    /// The snapshot's history is replayed through the phase-struct
    /// state machine so every recorded move passes contract validation,
    /// then the new move is applied.
    #[instrument(skip(self))]
    pub fn make_move(self, action: Move) -> Result<Self, String> {
        match self {
            AnyGame::InProgress { mut history, .. } => {
                history.push(action);
                match GameInProgress::replay(&history) {
                    Ok(result) => Ok(result.into()),
                    Err(e) => Err(e.to_string()),
                }
            }
            AnyGame::Setup { .. } => Err("Game hasn't started yet".to_string()),
            AnyGame::Finished { .. } => Err("Game is already over".to_string()),
        }
    }
}
