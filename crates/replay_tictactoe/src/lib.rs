//! Tic-tac-toe game logic with immutable board history and time travel.
//!
//! Every move produces a fresh board snapshot; the full sequence of
//! snapshots is retained so the view can jump to any prior move. Whose
//! turn it is falls out of the pointer parity rather than a stored field.
//!
//! # Architecture
//!
//! - **types / position**: board, squares, players, and cell coordinates
//! - **rules**: win and draw detection over a single snapshot
//! - **engine**: stateless move application and status derivation
//! - **history**: the owning store - snapshots, positions, view pointer
//! - **describe**: human-readable labels for the move list
//!
//! # Example
//!
//! ```
//! use replay_tictactoe::{GameHistory, Position, compute_status};
//!
//! let mut history = GameHistory::new();
//! history.try_play(Position::TopLeft)?;
//! history.try_play(Position::Center)?;
//!
//! let status = compute_status(history.board(), history.next_player());
//! assert_eq!(status.to_string(), "Next player: X");
//!
//! history.jump_to(1);
//! assert_eq!(history.next_player().to_string(), "O");
//! # Ok::<(), replay_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod describe;
mod engine;
mod history;
mod position;
mod rules;
mod types;

pub use describe::{describe_move, move_labels};
pub use engine::{MoveError, apply_move, compute_status};
pub use history::GameHistory;
pub use position::Position;
pub use rules::{WinningLine, winning_line};
pub use types::{Board, Player, Square, Status};
