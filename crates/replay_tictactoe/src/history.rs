//! Board-history ownership and time travel.
//!
//! Every past board is kept as an immutable snapshot; jumping to a prior
//! move only repoints a read index. Playing from a past point discards the
//! forward snapshots first.

use crate::engine::{self, MoveError};
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Owns the board snapshots, the played positions, and the view pointer.
///
/// Invariants:
/// - `boards[0]` is the empty board; `boards[k]` differs from
///   `boards[k - 1]` in exactly one cell, which was empty before.
/// - `positions[k]` is the 1-based cell number of the move that produced
///   `boards[k + 1]`, so the list trails the snapshots by one entry.
/// - `current_move` is always a valid index into `boards`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    boards: Vec<Board>,
    positions: Vec<u8>,
    current_move: usize,
}

impl GameHistory {
    /// Creates a history holding a single empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            positions: Vec::new(),
            current_move: 0,
        }
    }

    /// Returns the board selected by the view pointer.
    pub fn board(&self) -> &Board {
        &self.boards[self.current_move]
    }

    /// Returns all board snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the recorded 1-based move positions.
    pub fn positions(&self) -> &[u8] {
        &self.positions
    }

    /// Returns the view pointer.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the player to move from the viewed board.
    pub fn next_player(&self) -> Player {
        Player::for_move_count(self.current_move)
    }

    /// Checks whether X is the player to move.
    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    /// Records a played board, discarding any forward history first.
    ///
    /// `next_board` becomes the new tip and the view pointer moves to it.
    /// The positions list is cut at `current_move` itself (one less than
    /// the snapshot cut) before the new entry is appended, keeping its
    /// one-behind offset.
    #[instrument(skip(self, next_board), fields(current_move = self.current_move))]
    pub fn play(&mut self, next_board: Board, played: Position) {
        self.boards.truncate(self.current_move + 1);
        self.boards.push(next_board);
        self.positions.truncate(self.current_move);
        self.positions.push(played.one_based());
        self.current_move = self.boards.len() - 1;
        debug!(moves = self.positions.len(), "recorded move");
    }

    /// Validates and plays a move on the viewed board.
    ///
    /// The acting player is derived from the pointer parity.
    ///
    /// # Errors
    ///
    /// Propagates the engine's rejection; the history is left untouched.
    pub fn try_play(&mut self, pos: Position) -> Result<(), MoveError> {
        let next = engine::apply_move(self.board(), pos, self.next_player())?;
        self.play(next, pos);
        Ok(())
    }

    /// Moves the view pointer to a prior (or later) recorded move.
    ///
    /// Out-of-range requests are ignored; snapshots and positions are never
    /// touched.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, mv: usize) {
        if mv < self.boards.len() {
            self.current_move = mv;
        } else {
            debug!(mv, len = self.boards.len(), "ignoring out-of-range jump");
        }
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
