use crate::game::{GameState, Placement};
use crate::input::{Action, Keymap};
use crossterm::event::{self, Event, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::{debug, info};

pub struct App {
    game_state: GameState,
    keymap: Keymap,
    hint: String,
    should_quit: bool,
}

impl App {
    pub fn new(keymap: Keymap) -> Self {
        App {
            game_state: GameState::initial(),
            hint: keymap.hint(),
            keymap,
            should_quit: false,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop: redraw, then block for the next event
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!("session started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_event(event::read()?);
        }
        info!("quit requested");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        // Resizes and everything else just trigger the redraw
        if let Event::Key(key) = event {
            self.handle_key(key);
        }
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.keymap.action_for(key) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: Action) {
        debug!(%action, "action");
        if let Some(direction) = action.direction() {
            self.game_state.move_cursor(direction);
            return;
        }

        match action {
            Action::Place => self.place_mark(),
            Action::Reset => {
                self.game_state.reset();
                info!("session reset");
            }
            Action::Quit => self.should_quit = true,
            Action::MoveUp | Action::MoveDown | Action::MoveLeft | Action::MoveRight => {}
        }
    }

    fn place_mark(&mut self) {
        let player = self.game_state.current_player();
        let cursor = self.game_state.cursor();
        let (x, y) = (cursor.x(), cursor.y());

        match self.game_state.place_mark() {
            Placement::Placed => debug!(mark = %player.mark(), x, y, "mark placed"),
            Placement::Won => info!(winner = %player.mark(), x, y, "game won"),
            outcome @ (Placement::Occupied | Placement::GameOver) => {
                debug!(?outcome, x, y, "placement ignored")
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state.snapshot(), &self.hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyBindings;
    use crate::game::{Cell, Cursor, GameStatus, Player};
    use crossterm::event::{KeyCode, KeyModifiers};
    use crate::ui::terminal::tests::NoHideBackend;
    use crate::ui::terminal::CursorTolerantBackend;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Keymap::from_config(&KeyBindings::default(), true).unwrap())
    }

    fn key(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn keys(app: &mut App, codes: &str) {
        for c in codes.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_new_app() {
        let app = app();
        assert_eq!(app.game_state(), &GameState::initial());
        assert!(!app.should_quit);
        assert_eq!(app.hint, "(p)lace (r)eset (q)uit move [←↓↑→]");
    }

    #[test]
    fn test_keys_drive_the_game() {
        let mut app = app();
        key(&mut app, KeyCode::Char(' '));
        key(&mut app, KeyCode::Down);
        keys(&mut app, "p");
        keys(&mut app, "khp");

        let board = app.game_state().board();
        assert_eq!(board.get(7, 7), Cell::A);
        assert_eq!(board.get(7, 8), Cell::B);
        assert_eq!(board.get(6, 7), Cell::A);
        assert_eq!(app.game_state().current_player(), Player::B);
        assert_eq!(app.game_state().cursor(), Cursor::new(6, 7));
    }

    #[test]
    fn test_scenario_from_centre() {
        let mut app = app();
        // A (7,7), B (7,8), A (6,7), B (0,8), A (8,7), B (13,8), A (5,7)
        keys(&mut app, "p");
        keys(&mut app, "jp");
        keys(&mut app, "khp");
        keys(&mut app, &format!("j{}p", "h".repeat(6)));
        keys(&mut app, &format!("k{}p", "l".repeat(8)));
        keys(&mut app, &format!("j{}p", "l".repeat(5)));
        keys(&mut app, &format!("k{}p", "h".repeat(8)));

        let state = app.game_state();
        for x in [5, 6, 7, 8] {
            assert_eq!(state.board().get(x, 7), Cell::A, "({x}, 7)");
        }
        assert_eq!(state.board().filled(), 7);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), Player::B);
    }

    #[test]
    fn test_win_then_reset() {
        let mut app = app();
        // A across row 7 from column 3, B just below
        keys(&mut app, "hhhh");
        for _ in 0..4 {
            keys(&mut app, "pjpkl");
        }
        keys(&mut app, "p");
        assert_eq!(app.game_state().status(), GameStatus::Won(Player::A));

        // Board frozen, cursor still free
        let before = *app.game_state().board();
        keys(&mut app, "lp");
        assert_eq!(app.game_state().board(), &before);
        assert_eq!(app.game_state().cursor(), Cursor::new(8, 7));

        keys(&mut app, "r");
        assert_eq!(app.game_state(), &GameState::initial());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        keys(&mut app, "q");
        assert!(app.should_quit);

        let mut app = self::app();
        key(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut app = app();
        keys(&mut app, "zxv");
        key(&mut app, KeyCode::F(5));
        assert_eq!(app.game_state(), &GameState::initial());
    }

    #[test]
    fn test_run_exits_without_reading_once_quit() {
        let mut app = app();
        app.apply(Action::Quit);
        let mut terminal = Terminal::new(TestBackend::new(40, 24)).unwrap();
        app.run(&mut terminal).unwrap();
    }

    #[test]
    fn test_run_survives_terminal_without_cursor_hiding() {
        let mut app = app();
        keys(&mut app, "p");
        app.apply(Action::Quit);
        let backend = CursorTolerantBackend::new(NoHideBackend(TestBackend::new(40, 24)));
        let mut terminal = Terminal::new(backend).unwrap();

        app.run(&mut terminal).unwrap();
        let buffer = terminal.backend().inner().0.buffer();
        let status: String = buffer.content[18 * 40..18 * 40 + 12]
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert_eq!(status, "x is to move");
    }
}
