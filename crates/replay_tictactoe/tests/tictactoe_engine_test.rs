//! Tests for move application and status derivation.

use replay_tictactoe::{
    Board, MoveError, Player, Position, Square, apply_move, compute_status, winning_line,
};

fn board_from(marks: [Option<Player>; 9]) -> Board {
    let mut board = Board::new();
    for (index, mark) in marks.into_iter().enumerate() {
        if let Some(player) = mark {
            let pos = Position::from_index(index).expect("index in range");
            board.set(pos, Square::Occupied(player));
        }
    }
    board
}

const X: Option<Player> = Some(Player::X);
const O: Option<Player> = Some(Player::O);
const E: Option<Player> = None;

#[test]
fn test_no_line_means_no_winner() {
    assert!(winning_line(&Board::new()).is_none());

    // Mixed marks everywhere, no three in a row.
    let board = board_from([X, O, X, X, O, O, O, X, X]);
    assert!(winning_line(&board).is_none());
}

#[test]
fn test_left_column_detected() {
    let board = board_from([X, O, E, X, O, E, X, E, E]);
    let line = winning_line(&board).expect("left column filled");
    assert_eq!(
        line.cells(),
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
    assert_eq!(line.player(), Player::X);
}

#[test]
fn test_apply_move_copies() {
    let board = board_from([X, E, E, E, E, E, E, E, E]);
    let next = apply_move(&board, Position::Center, Player::O).expect("valid move");

    // Old reference retains prior values.
    assert_eq!(board.get(Position::Center), Square::Empty);
    assert_eq!(next.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(next.get(Position::TopLeft), Square::Occupied(Player::X));
}

#[test]
fn test_apply_move_rejections() {
    let occupied = board_from([X, E, E, E, E, E, E, E, E]);
    assert_eq!(
        apply_move(&occupied, Position::TopLeft, Player::O),
        Err(MoveError::SquareOccupied(Position::TopLeft))
    );

    let finished = board_from([X, X, X, O, O, E, E, E, E]);
    assert_eq!(
        apply_move(&finished, Position::MiddleRight, Player::O),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_status_strings() {
    let won = board_from([X, X, X, E, E, E, E, E, E]);
    assert_eq!(compute_status(&won, Player::O).to_string(), "Winner: X");

    let drawn = board_from([X, O, X, X, O, O, O, X, X]);
    assert_eq!(compute_status(&drawn, Player::O).to_string(), "Draw");

    let open = board_from([X, E, E, E, E, E, E, E, E]);
    assert_eq!(
        compute_status(&open, Player::O).to_string(),
        "Next player: O"
    );
}
