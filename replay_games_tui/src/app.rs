//! Application state and event handling.

use crossterm::event::KeyCode;
use replay_tictactoe::{GameHistory, Position, Status, compute_status, move_labels};
use tracing::debug;

use crate::input;

/// Main application state.
///
/// Everything the UI shows is derived from the history store plus the two
/// view-only fields (cursor and list selection) on each draw; nothing is
/// cached between frames.
pub struct App {
    history: GameHistory,
    cursor: Position,
    selected: usize,
    ascending: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(ascending: bool) -> Self {
        Self {
            history: GameHistory::new(),
            cursor: Position::Center,
            selected: 0,
            ascending,
        }
    }

    /// Gets the history store.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the selected move index.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Checks whether the move list renders oldest-first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the status line for the viewed board.
    pub fn status(&self) -> Status {
        compute_status(self.history.board(), self.history.next_player())
    }

    /// Returns `(move index, label)` pairs in display order.
    pub fn ordered_moves(&self) -> Vec<(usize, String)> {
        let mut moves: Vec<_> = move_labels(&self.history).into_iter().enumerate().collect();
        if !self.ascending {
            moves.reverse();
        }
        moves
    }

    /// Handles one key event. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('o') => self.ascending = !self.ascending,
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::from_one_based(c as u8 - b'0') {
                    self.play(pos);
                }
            }
            KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char('g') => self.jump_selected(),
            _ => {}
        }
        true
    }

    /// Plays at the given position; rejected moves are silent no-ops.
    fn play(&mut self, pos: Position) {
        match self.history.try_play(pos) {
            Ok(()) => self.selected = self.history.current_move(),
            Err(e) => debug!(%e, "move rejected"),
        }
    }

    fn select_next(&mut self) {
        let last = self.history.boards().len() - 1;
        self.selected = (self.selected + 1).min(last);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn jump_selected(&mut self) {
        debug!(selected = self.selected, "jumping to move");
        self.history.jump_to(self.selected);
    }

    /// Restarts the game; the order flag survives the restart.
    fn restart(&mut self) {
        debug!("restarting game");
        self.history = GameHistory::new();
        self.cursor = Position::Center;
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use replay_tictactoe::Player;

    fn app_with_moves(positions: &[Position]) -> App {
        let mut app = App::new(true);
        for &pos in positions {
            assert!(app.handle_key(KeyCode::Char(
                char::from_digit(pos.one_based() as u32, 10).expect("digit")
            )));
        }
        app
    }

    #[test]
    fn test_digit_keys_play_moves() {
        let app = app_with_moves(&[Position::TopLeft, Position::Center]);
        assert_eq!(app.history().current_move(), 2);
        assert_eq!(app.history().positions(), &[1, 5]);
        assert_eq!(app.status(), Status::NextPlayer(Player::X));
    }

    #[test]
    fn test_occupied_cell_is_silent_noop() {
        let mut app = app_with_moves(&[Position::TopLeft]);
        let before = app.history().clone();
        assert!(app.handle_key(KeyCode::Char('1')));
        assert_eq!(app.history(), &before);
    }

    #[test]
    fn test_select_and_jump() {
        let mut app = app_with_moves(&[Position::TopLeft, Position::Center]);
        assert_eq!(app.selected(), 2);
        app.handle_key(KeyCode::Char('k'));
        app.handle_key(KeyCode::Char('k'));
        assert_eq!(app.selected(), 0);
        app.handle_key(KeyCode::Char('g'));
        assert_eq!(app.history().current_move(), 0);
        // Snapshots survive the jump.
        assert_eq!(app.history().boards().len(), 3);
    }

    #[test]
    fn test_order_toggle_reverses_rendering_only() {
        let mut app = app_with_moves(&[Position::TopLeft, Position::Center]);
        let ascending = app.ordered_moves();
        assert!(app.handle_key(KeyCode::Char('o')));
        let descending = app.ordered_moves();

        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);
        // The underlying history is untouched.
        assert_eq!(app.history().current_move(), 2);
        assert_eq!(app.history().boards().len(), 3);
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::new(true);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.history().board().get(Position::Center),
            replay_tictactoe::Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(true);
        assert!(!app.handle_key(KeyCode::Char('q')));
        assert!(!app.handle_key(KeyCode::Esc));
    }
}
