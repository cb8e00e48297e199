//! Tests for the phase-struct game state machine.

use tictactoe_engine::{
    GameInProgress, GameResult, GameSetup, Move, MoveError, Outcome, Player, Position,
};

fn advance(game: GameInProgress, player: Player, pos: Position) -> GameInProgress {
    match game.make_move(Move::new(player, pos)).unwrap() {
        GameResult::InProgress(g) => g,
        GameResult::Finished(g) => panic!("game ended early: {}", g.outcome()),
    }
}

#[test]
fn test_setup_starts_with_empty_board() {
    let setup = GameSetup::new();
    assert_eq!(setup.board().empty_count(), 9);

    let game = setup.start(Player::X);
    assert_eq!(game.to_move(), Player::X);
    assert!(game.history().is_empty());
}

#[test]
fn test_legal_move_accepted() {
    let game = GameSetup::new().start(Player::X);
    assert!(game.make_move(Move::new(Player::X, Position::Center)).is_ok());
}

#[test]
fn test_occupied_square_rejected() {
    let game = GameSetup::new().start(Player::X);
    let game = advance(game, Player::X, Position::Center);

    let result = game.make_move(Move::new(Player::O, Position::Center));
    assert_eq!(
        result.err(),
        Some(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_wrong_player_rejected() {
    let game = GameSetup::new().start(Player::X);
    let result = game.make_move(Move::new(Player::O, Position::Center));
    assert_eq!(result.err(), Some(MoveError::WrongPlayer(Player::O)));
}

#[test]
fn test_players_alternate() {
    let game = GameSetup::new().start(Player::X);
    assert_eq!(game.to_move(), Player::X);

    let game = advance(game, Player::X, Position::Center);
    assert_eq!(game.to_move(), Player::O);

    let game = advance(game, Player::O, Position::TopLeft);
    assert_eq!(game.to_move(), Player::X);
}

#[test]
fn test_win_transitions_to_finished() {
    let game = GameSetup::new().start(Player::X);
    let game = advance(game, Player::X, Position::TopLeft);
    let game = advance(game, Player::O, Position::Center);
    let game = advance(game, Player::X, Position::TopCenter);
    let game = advance(game, Player::O, Position::BottomLeft);

    // X completes the top row
    match game.make_move(Move::new(Player::X, Position::TopRight)).unwrap() {
        GameResult::Finished(done) => {
            assert_eq!(done.outcome(), &Outcome::Winner(Player::X));
            assert_eq!(done.outcome().winner(), Some(Player::X));
            assert_eq!(done.history().len(), 5);
        }
        GameResult::InProgress(_) => panic!("top row should have won"),
    }
}

#[test]
fn test_full_board_transitions_to_draw() {
    // X O X / O X X / O X O - no line for either player
    let moves = [
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::TopCenter),
        Move::new(Player::X, Position::TopRight),
        Move::new(Player::O, Position::MiddleLeft),
        Move::new(Player::X, Position::Center),
        Move::new(Player::O, Position::BottomLeft),
        Move::new(Player::X, Position::MiddleRight),
        Move::new(Player::O, Position::BottomRight),
        Move::new(Player::X, Position::BottomCenter),
    ];

    match GameInProgress::replay(&moves).unwrap() {
        GameResult::Finished(done) => {
            assert!(done.outcome().is_draw());
            assert!(done.board().is_full());
        }
        GameResult::InProgress(_) => panic!("full board should have finished"),
    }
}

#[test]
fn test_replay_stops_at_terminal() {
    // The trailing move after X's win must never be applied
    let moves = [
        Move::new(Player::X, Position::TopLeft),
        Move::new(Player::O, Position::MiddleLeft),
        Move::new(Player::X, Position::TopCenter),
        Move::new(Player::O, Position::Center),
        Move::new(Player::X, Position::TopRight),
        Move::new(Player::O, Position::BottomRight),
    ];

    match GameInProgress::replay(&moves).unwrap() {
        GameResult::Finished(done) => {
            assert_eq!(done.outcome().winner(), Some(Player::X));
            assert_eq!(done.history().len(), 5);
        }
        GameResult::InProgress(_) => panic!("replay should end at the win"),
    }
}

#[test]
fn test_restart_yields_fresh_setup() {
    let game = GameSetup::new().start(Player::X);
    let game = advance(game, Player::X, Position::TopLeft);
    let game = advance(game, Player::O, Position::Center);
    let game = advance(game, Player::X, Position::TopCenter);
    let game = advance(game, Player::O, Position::BottomLeft);

    let done = match game.make_move(Move::new(Player::X, Position::TopRight)).unwrap() {
        GameResult::Finished(done) => done,
        GameResult::InProgress(_) => panic!("expected finished game"),
    };

    let setup = done.restart();
    assert_eq!(setup.board().empty_count(), 9);
}
