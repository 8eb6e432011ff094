//! Terminal setup and teardown.
//!
//! [`TerminalGuard`] puts the terminal into raw mode on the alternate screen
//! and puts it back when dropped. A panic hook does the same before the
//! panic message is printed, so the terminal is restored on every exit path.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, ClearType, CrosstermBackend, WindowSize},
    buffer::Cell,
    layout::{Position, Size},
    Terminal,
};
use tracing::{debug, warn};

pub type Tui = Terminal<CursorTolerantBackend<CrosstermBackend<Stdout>>>;

static PANIC_HOOK: Once = Once::new();

/// Backend wrapper that treats a failure to hide the cursor as success.
///
/// Hiding the cursor is cosmetic, and ratatui asks for it on every frame, so
/// a terminal that refuses would otherwise fail every draw. The first
/// failure is logged; later ones are silent.
pub struct CursorTolerantBackend<B> {
    inner: B,
    hide_failed: bool,
}

impl<B: Backend> CursorTolerantBackend<B> {
    pub fn new(inner: B) -> Self {
        CursorTolerantBackend {
            inner,
            hide_failed: false,
        }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }
}

impl<B: Backend> Backend for CursorTolerantBackend<B> {
    fn draw<'a, I>(&mut self, content: I) -> io::Result<()>
    where
        I: Iterator<Item = (u16, u16, &'a Cell)>,
    {
        self.inner.draw(content)
    }

    fn append_lines(&mut self, n: u16) -> io::Result<()> {
        self.inner.append_lines(n)
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        if let Err(err) = self.inner.hide_cursor() {
            if !self.hide_failed {
                warn!(error = %err, "could not hide terminal cursor");
                self.hide_failed = true;
            }
        }
        Ok(())
    }

    fn show_cursor(&mut self) -> io::Result<()> {
        self.inner.show_cursor()
    }

    fn get_cursor_position(&mut self) -> io::Result<Position> {
        self.inner.get_cursor_position()
    }

    fn set_cursor_position<P: Into<Position>>(&mut self, position: P) -> io::Result<()> {
        self.inner.set_cursor_position(position)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.inner.clear()
    }

    fn clear_region(&mut self, clear_type: ClearType) -> io::Result<()> {
        self.inner.clear_region(clear_type)
    }

    fn size(&self) -> io::Result<Size> {
        self.inner.size()
    }

    fn window_size(&mut self) -> io::Result<WindowSize> {
        self.inner.window_size()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, hiding the cursor if the
    /// terminal allows it.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        let terminal = match Self::setup() {
            Ok(terminal) => terminal,
            Err(err) => {
                restore();
                return Err(err);
            }
        };
        debug!("terminal entered raw mode");

        Ok(TerminalGuard { terminal })
    }

    fn setup() -> io::Result<Tui> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CursorTolerantBackend::new(CrosstermBackend::new(stdout));
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(terminal)
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
        debug!("terminal restored");
    }
}

/// Leave raw mode and the alternate screen and show the cursor. Errors are
/// ignored: this runs while already unwinding or exiting.
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore();
            previous(info);
        }));
    });
}
