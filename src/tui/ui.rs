//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::controller::ViewState;
use noughts_engine::{Mark, Position};

const HELP: &str = "Arrows move · Enter/Space or 1-9 place · r reset · q quit";

/// Renders the board, status, and key help.
pub fn draw(frame: &mut Frame, view: &ViewState, cursor: Position) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status + error
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view, cursor);
    draw_status(frame, chunks[2], view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &ViewState) {
    let headline = match view.result_banner() {
        Some(result) => Span::styled(
            result.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(view.turn_banner().as_str(), Style::default().fg(Color::Yellow)),
    };
    let error = Span::styled(view.error().as_str(), Style::default().fg(Color::Red));

    let status = Paragraph::new(vec![Line::from(headline), Line::from(error)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, view: &ViewState, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

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

    for (i, chunk) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[i * 2], view, cursor, chunk);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &ViewState,
    cursor: Position,
    positions: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], view, cursor, pos);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &ViewState, cursor: Position, pos: Position) {
    let (symbol, base_style) = match view.cells()[pos.row()][pos.col()] {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = view.winning_line().is_some_and(|line| line.contains(pos));
    let style = cell_style(base_style, pos == cursor, on_winning_line);

    // Vertically center the symbol in the three-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Layers the cursor over the winning-line highlight so both stay visible.
fn cell_style(base: Style, under_cursor: bool, on_winning_line: bool) -> Style {
    match (under_cursor, on_winning_line) {
        (true, true) => base
            .bg(Color::Green)
            .fg(Color::Black)
            .add_modifier(Modifier::UNDERLINED),
        (true, false) => base.bg(Color::White).fg(Color::Black),
        (false, true) => base.bg(Color::Green),
        (false, false) => base,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
