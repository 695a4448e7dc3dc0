//! Move application and status derivation.
//!
//! The engine is stateless: it maps a board and a move to the next board,
//! and a board to its status. Whose turn it is belongs to the caller,
//! derived from move-count parity.

use crate::position::Position;
use crate::rules::{draw, win};
use crate::types::{Board, Player, Square, Status};
use tracing::instrument;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board already has a winning line.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Applies `player`'s mark at `pos`, returning the next board.
///
/// The input board is never mutated; callers holding earlier snapshots see
/// them unchanged.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the position is taken, and
/// [`MoveError::GameOver`] if the board already has a winning line.
#[instrument]
pub fn apply_move(board: &Board, pos: Position, player: Player) -> Result<Board, MoveError> {
    if !board.is_empty(pos) {
        return Err(MoveError::SquareOccupied(pos));
    }
    if win::winning_line(board).is_some() {
        return Err(MoveError::GameOver);
    }

    let mut next = board.clone();
    next.set(pos, Square::Occupied(player));
    Ok(next)
}

/// Derives the status of a board.
///
/// Checks for a winner first, then a full board, and otherwise reports
/// `next_player` as the player to move.
#[instrument]
pub fn compute_status(board: &Board, next_player: Player) -> Status {
    if let Some(line) = win::winning_line(board) {
        Status::Won(line.player())
    } else if draw::is_full(board) {
        Status::Draw
    } else {
        Status::NextPlayer(next_player)
    }
}
