use crate::error::{MoveError, UndoError};
use crate::game::{GameEngine, GameStatus};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    start_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// `start_column` is clamped to the board
    pub fn new(engine: GameEngine, start_column: usize) -> Self {
        let start_column = start_column.min(engine.width() - 1);
        App {
            engine,
            selected_column: start_column,
            start_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.engine.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < self.engine.width() {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('u') | KeyCode::Backspace => {
                self.undo();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.start_column;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.engine.drop_piece(self.selected_column) {
            Ok(result) => {
                self.message = match result.status {
                    GameStatus::Win(player) => Some(format!("{player} wins!")),
                    GameStatus::Tie => Some("It's a tie!".to_string()),
                    GameStatus::InProgress => None,
                };
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameAlreadyOver) => {
                self.message = Some("Game over! Press 'u' to undo or 'r' to restart.".to_string());
            }
        }
    }

    fn undo(&mut self) {
        match self.engine.undo() {
            Ok(undone) => {
                debug!(column = undone.column, "undo from ui");
                self.selected_column = undone.column;
                self.message = Some(format!("Took back {}'s move", undone.player));
            }
            Err(UndoError::NothingToUndo) => {
                self.message = Some("Nothing to undo!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameEngine::default(), 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, Player};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_selector_stays_on_board() {
        let mut app = App::new(GameEngine::new(4, 4).unwrap(), 10);
        assert_eq!(app.selected_column, 3);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_column, 3);
        for _ in 0..5 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.selected_column, 0);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.selected_column, 1);
    }

    #[test]
    fn test_drop_and_undo_through_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().cell(5, 3), Some(Cell::Occupied(Player::One)));

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.engine().history_len(), 0);
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.message.as_deref(), Some("Took back Player 1's move"));

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.message.as_deref(), Some("Nothing to undo!"));
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::default();
        for _ in 0..6 {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Column is full!"));
        assert_eq!(app.engine().history_len(), 6);
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = App::default();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.message.as_deref(), Some("Player 1 wins!"));

        press(&mut app, KeyCode::Enter);
        assert!(app.message.as_deref().unwrap().starts_with("Game over!"));

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine().history_len(), 0);
        assert_eq!(app.selected_column, 3);
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_smoke() {
        let mut app = App::default();
        press(&mut app, KeyCode::Enter);
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Connect Four"));
        assert!(text.contains("Player 2"));
    }
}
