//! Stateless UI rendering.

use super::app::App;
use noughts_core::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let show_help = *app.settings().show_help();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                              // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2),               // Board
            Constraint::Length(3),                              // Status
            Constraint::Length(if show_help { 3 } else { 0 }), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let status_style = if app.game().status().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    if show_help {
        let help = Paragraph::new("1-9 / arrows+Enter: move | R/N: new game | Q: quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, pos);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let symbol = match game.board().get(pos) {
        Square::Empty => (pos.index() + 1).to_string(),
        Square::Occupied(player) => player.to_string(),
    };

    let mut style = match game.board().get(pos) {
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::X) => {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        }
        Square::Empty => Style::default().fg(Color::Gray),
    };
    if !app.is_enabled(pos) {
        style = style.add_modifier(Modifier::DIM);
    }
    let highlight = *app.settings().highlight_winner();
    if highlight && game.winning_line().is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black).remove_modifier(Modifier::DIM);
    } else if pos == app.cursor() && !game.status().is_over() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
