//! Terminal UI: the game view, the event loop that drives a session, and
//! raw-mode setup/teardown.

mod app;
mod game_view;
pub mod terminal;

pub use app::App;
pub use terminal::TerminalGuard;
