use crate::game::{GameStatus, Player, Snapshot, BOARD_SIZE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Two columns per cell plus padding and the border on each side
const BOARD_WIDTH: u16 = BOARD_SIZE as u16 * 2 + 3;
const BOARD_HEIGHT: u16 = BOARD_SIZE as u16 + 2;

pub fn render(frame: &mut Frame, snapshot: &Snapshot, hint: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Length(1),
            Constraint::Length(1), // Status
            Constraint::Length(1),
            Constraint::Length(1), // Controls
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_board(frame, snapshot, chunks[0]);
    render_status(frame, snapshot, chunks[2]);
    render_controls(frame, hint, chunks[4]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Cyan,
        Player::B => Color::Magenta,
    }
}

fn render_board(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let area = Rect {
        width: area.width.min(BOARD_WIDTH),
        ..area
    };

    let mut lines = Vec::with_capacity(BOARD_SIZE);
    for y in 0..BOARD_SIZE {
        let mut spans = vec![Span::raw(" ")];
        for x in 0..BOARD_SIZE {
            let (symbol, mut style) = match snapshot.cell(x, y).owner() {
                None => ('.', Style::default().fg(Color::DarkGray)),
                Some(player) => (player.mark(), Style::default().fg(player_color(player))),
            };
            if snapshot.is_cursor(x, y) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol.to_string(), style));
            if x + 1 < BOARD_SIZE {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, area);
}

fn render_status(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let style = match snapshot.status {
        GameStatus::InProgress => Style::default().fg(player_color(snapshot.current_player)),
        GameStatus::Won(winner) => Style::default()
            .fg(player_color(winner))
            .add_modifier(Modifier::BOLD),
    };
    frame.render_widget(Paragraph::new(snapshot.message.as_str()).style(style), area);
}

fn render_controls(frame: &mut Frame, hint: &str, area: Rect) {
    let controls = Paragraph::new(hint).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(controls, area);
}
