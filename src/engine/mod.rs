//! The move selector for the automated opponent.
//!
//! Two-stage strategy: an opening-move shortcut for the first two
//! plies, then full minimax with alpha-beta pruning using the rules
//! module as its base case. Draw-valued lines of play are re-scored
//! with a positional heuristic so the opponent prefers the stronger
//! of two equally drawing continuations, and ties among top-level
//! moves are broken uniformly at random through an injected generator.

mod heuristic;
mod opening;
mod search;

pub use search::{MinimaxAi, SelectError, select_move};
