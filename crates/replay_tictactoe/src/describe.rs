//! Move-list label derivation.
//!
//! Labels are rebuilt from the recorded positions on every render. Each
//! entry reads the positions slot sharing its own index, which sits one
//! move ahead of the entry it describes: the game-start entry shows the
//! first move's line and column, and the tip entry has no slot at all.

use crate::history::GameHistory;
use crate::position::Position;

/// Derives the label for one history entry.
///
/// - the entry at `current_move` is the "you are here" marker;
/// - entry 0 is the jump-to-game-start label, annotated with the
///   coordinates found in slot 0 (the first move's);
/// - any other entry is a jump label with the coordinates from its slot,
///   or "not chosen" when the slot is absent.
pub fn describe_move(mv: usize, current_move: usize, positions: &[u8]) -> String {
    if mv == current_move {
        return format!("You are in the move # {}", mv + 1);
    }

    let pos = positions.get(mv).copied().and_then(Position::from_one_based);
    if mv == 0 {
        return match pos {
            Some(p) => format!("Go to game start (line: {}, column: {})", p.line(), p.column()),
            None => "Go to game start (line: -, column: -)".to_string(),
        };
    }

    match pos {
        Some(p) => format!(
            "Go to move #{} (line: {}, column: {})",
            mv + 1,
            p.line(),
            p.column()
        ),
        None => format!("Go to move #{} (line: not chosen, column: not chosen)", mv + 1),
    }
}

/// Builds the label for every history entry, oldest first.
///
/// Display ordering (ascending or descending) is the renderer's concern.
pub fn move_labels(history: &GameHistory) -> Vec<String> {
    (0..history.boards().len())
        .map(|mv| describe_move(mv, history.current_move(), history.positions()))
        .collect()
}
