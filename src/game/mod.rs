//! Core five-in-a-row logic: board, cursor, players, win detection and the
//! session state machine.

mod board;
mod cursor;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, BOARD_SIZE};
pub use cursor::{Cursor, Direction};
pub use player::Player;
pub use state::{GameState, GameStatus, Placement, Snapshot};
pub use win::has_won;
