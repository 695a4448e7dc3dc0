//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines in check order: rows top to bottom, columns left to
/// right, then the two diagonals. The first satisfied line wins.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A satisfied winning line: the three cells and the player holding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    cells: [Position; 3],
    player: Player,
}

impl WinningLine {
    /// Returns the three cells forming the line.
    pub fn cells(&self) -> [Position; 3] {
        self.cells
    }

    /// Returns the player holding the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Checks whether the given position is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Finds the first winning line on the board.
///
/// Returns `None` if no line has three identical non-empty cells.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(WinningLine {
                    cells: [a, b, c],
                    player,
                }),
                Square::Empty => None,
            };
        }
    }

    None
}
