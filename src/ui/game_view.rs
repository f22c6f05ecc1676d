use super::board_widget::{board_lines, player_color};
use crate::game::{GameEngine, GameStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: &Option<String>,
) {
    let board_height = engine.height() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(4),            // Controls
        ])
        .split(frame.area());

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let player = engine.current_player();
            (
                format!("Current Player: {}  |  Move {}", player, engine.history_len() + 1),
                player_color(player),
            )
        }
        GameStatus::Win(player) => (format!("Game Over  |  {player} wins"), player_color(player)),
        GameStatus::Tie => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let board_widget =
        Paragraph::new(board_lines(engine, selected_column)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→ or 1-9: Select  |  Enter: Drop");
    let line2 = Line::from("U: Undo  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
