//! Tests for terminal-state evaluation.

use tictactoe_engine::{Board, GameStatus, Player, Position, Square, check_winner, evaluate};

/// Builds a board from a 9-character layout: 'X', 'O', or '.'.
fn board_from(layout: &str) -> Board {
    assert_eq!(layout.len(), 9, "layout must cover all nine squares");
    let mut board = Board::new();
    for (i, c) in layout.chars().enumerate() {
        let square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            '.' => Square::Empty,
            _ => panic!("unexpected layout character: {c}"),
        };
        board.set(Position::from_index(i).unwrap(), square);
    }
    board
}

#[test]
fn test_empty_board_in_progress() {
    assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
}

#[test]
fn test_partial_board_in_progress() {
    let board = board_from("XO..X....");
    assert_eq!(evaluate(&board), GameStatus::InProgress);
}

#[test]
fn test_each_row_wins() {
    assert_eq!(evaluate(&board_from("XXX......")), GameStatus::Won(Player::X));
    assert_eq!(evaluate(&board_from("...OOO...")), GameStatus::Won(Player::O));
    assert_eq!(evaluate(&board_from("......XXX")), GameStatus::Won(Player::X));
}

#[test]
fn test_each_column_wins() {
    assert_eq!(evaluate(&board_from("O..O..O..")), GameStatus::Won(Player::O));
    assert_eq!(evaluate(&board_from(".X..X..X.")), GameStatus::Won(Player::X));
    assert_eq!(evaluate(&board_from("..O..O..O")), GameStatus::Won(Player::O));
}

#[test]
fn test_each_diagonal_wins() {
    assert_eq!(evaluate(&board_from("X...X...X")), GameStatus::Won(Player::X));
    assert_eq!(evaluate(&board_from("..O.O.O..")), GameStatus::Won(Player::O));
}

#[test]
fn test_win_detected_regardless_of_other_cells() {
    // O completes the anti-diagonal inside an otherwise messy board
    let board = board_from("XXO.OXOOX");
    assert_eq!(evaluate(&board), GameStatus::Won(Player::O));
}

#[test]
fn test_full_board_without_line_is_draw() {
    assert_eq!(evaluate(&board_from("XOXOXXOXO")), GameStatus::Draw);
    assert_eq!(evaluate(&board_from("XOXXOOOXX")), GameStatus::Draw);
}

#[test]
fn test_check_winner_none_on_draw_board() {
    assert_eq!(check_winner(&board_from("XOXOXXOXO")), None);
}

#[test]
fn test_evaluate_idempotent() {
    let boards = ["XO..X....", "XXX......", "XOXOXXOXO", "........."];
    for layout in boards {
        let board = board_from(layout);
        assert_eq!(evaluate(&board), evaluate(&board), "layout {layout}");
    }
}
