//! Board pane rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use replay_tictactoe::{Board, Player, Position, Square, WinningLine};

/// Renders the viewed board with cursor and winning-line highlights.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning: Option<&WinningLine>,
) {
    let board_area = center_rect(area, 40, 12);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(
        f,
        rows[0],
        board,
        cursor,
        winning,
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
    );
    render_separator(f, rows[1]);
    render_row(
        f,
        rows[2],
        board,
        cursor,
        winning,
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    );
    render_separator(f, rows[3]);
    render_row(
        f,
        rows[4],
        board,
        cursor,
        winning,
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
    );
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning: Option<&WinningLine>,
    positions: [Position; 3],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (slot, pos) in [0, 2, 4].into_iter().zip(positions) {
        render_square(f, cols[slot], board, cursor, winning, pos);
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    winning: Option<&WinningLine>,
    pos: Position,
) {
    let (text, mut style) = match board.get(pos) {
        Square::Empty => (
            pos.one_based().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning.is_some_and(|line| line.contains(pos)) {
        style = style.fg(Color::Green).add_modifier(Modifier::BOLD);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep =
        Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
