//! Move-list pane rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::App;

/// Renders the move list in the app's display order.
///
/// The current move's entry is a marker rather than a jump target, so it
/// gets its own styling; the selection highlight tracks the `j`/`k` keys.
pub fn render_moves(f: &mut Frame, area: Rect, app: &App) {
    let current = app.history().current_move();
    let moves = app.ordered_moves();

    let selected_row = moves.iter().position(|(mv, _)| *mv == app.selected());
    let items: Vec<ListItem> = moves
        .into_iter()
        .map(|(mv, label)| {
            let style = if mv == current {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let order = if app.ascending() { "asc" } else { "desc" };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Moves ({})", order)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected_row);
    f.render_stateful_widget(list, area, &mut state);
}
