//! Stateless UI rendering.
//!
//! Every frame is derived from the app state alone; no widget state is
//! kept between draws.

mod board;
mod moves;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use replay_tictactoe::winning_line;

use crate::app::App;

/// Renders the whole screen: title, board and move list, status, help.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Replay Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let winning = winning_line(app.history().board());
    board::render_board(f, panes[0], app.history().board(), app.cursor(), winning.as_ref());
    moves::render_moves(f, panes[1], app);

    let status = Paragraph::new(app.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "1-9 or arrows+enter: play | j/k: select move | g: jump | o: order | r: restart | q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    f.render_widget(help, chunks[3]);
}
