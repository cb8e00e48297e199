//! Deterministic tic-tac-toe core: rules engine and minimax move selection.
//!
//! # Architecture
//!
//! - **Rules**: pure terminal-state evaluation (win, draw, in-progress)
//! - **Engine**: the automated opponent's move selector - opening book,
//!   minimax with alpha-beta pruning, positional tie-breaking
//! - **Game**: phase-struct state machine with contract-validated moves
//! - **Wrapper**: serializable snapshots for hosts that render boards or
//!   persist tallies
//!
//! The crate performs no I/O. Randomness enters only through the
//! generator injected into the move selector.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameSetup, MinimaxAi, Move, Player, Position, GameResult};
//!
//! let game = GameSetup::new().start(Player::X);
//! let mut opponent = MinimaxAi::with_seed(Player::O, 42);
//!
//! let game = match game.make_move(Move::new(Player::X, Position::TopLeft)).unwrap() {
//!     GameResult::InProgress(g) => g,
//!     GameResult::Finished(_) => unreachable!(),
//! };
//!
//! let reply = opponent.select_move(game.board()).unwrap();
//! assert_eq!(reply, Position::Center);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod engine;
mod game;
mod invariants;
mod position;
mod rules;
mod types;
mod wrapper;

// Crate-level exports - Domain types
pub use types::{Board, BoardError, GameStatus, Player, Square};

// Crate-level exports - Positions and moves
pub use action::{Move, MoveError};
pub use position::Position;

// Crate-level exports - Rules (terminal-state evaluation)
pub use rules::{check_winner, evaluate, is_full};

// Crate-level exports - Game state machine
pub use game::{GameFinished, GameInProgress, GameResult, GameSetup, Outcome};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, LegalMove, MoveContract, PlayersTurn, SquareIsEmpty};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - Move selection
pub use engine::{MinimaxAi, SelectError, select_move};

// Crate-level exports - Host-facing snapshot
pub use wrapper::AnyGame;
