//! # TUI Gomoku
//!
//! Two-player five-in-a-row on a 15x15 board, played in one terminal.
//! Players take turns moving a cursor and placing their mark; the first to
//! line up five in a row, column or diagonal wins.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, cursor, players, win detection, session state
//! - [`input`] — Logical actions and the key bindings that trigger them
//! - [`ui`] — Terminal UI: board view, event loop, terminal setup
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod ui;
