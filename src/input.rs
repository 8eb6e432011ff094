//! Key handling: the logical actions a player can take, parsing of key
//! names from the config file, and the lookup from key events to actions.

use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::KeyBindings;
use crate::error::{ConfigError, KeyParseError};
use crate::game::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Place,
    Reset,
    Quit,
}

impl Action {
    /// Cursor direction for the movement actions
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::MoveUp => Some(Direction::Up),
            Action::MoveDown => Some(Direction::Down),
            Action::MoveLeft => Some(Direction::Left),
            Action::MoveRight => Some(Direction::Right),
            Action::Place | Action::Reset | Action::Quit => None,
        }
    }

    /// Name used in the config file and the controls hint
    pub fn name(self) -> &'static str {
        match self {
            Action::MoveUp => "up",
            Action::MoveDown => "down",
            Action::MoveLeft => "left",
            Action::MoveRight => "right",
            Action::Place => "place",
            Action::Reset => "reset",
            Action::Quit => "quit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a key name such as `"p"`, `"space"` or `"left-arrow"`.
///
/// A single character stands for itself (case-sensitive). Longer names are
/// matched case-insensitively.
pub fn parse_key(name: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return Err(KeyParseError::Empty),
        (Some(' '), None) => return Ok(KeyCode::Char(' ')),
        (Some(c), None) if !c.is_control() => return Ok(KeyCode::Char(c)),
        _ => {}
    }

    match name.to_ascii_lowercase().as_str() {
        "space" => Ok(KeyCode::Char(' ')),
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Esc),
        "tab" => Ok(KeyCode::Tab),
        "left-arrow" | "left" => Ok(KeyCode::Left),
        "right-arrow" | "right" => Ok(KeyCode::Right),
        "up-arrow" | "up" => Ok(KeyCode::Up),
        "down-arrow" | "down" => Ok(KeyCode::Down),
        _ => Err(KeyParseError::Unknown(name.to_string())),
    }
}

/// Short label for a key, for on-screen hints
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        other => format!("{other:?}"),
    }
}

/// Maps key presses to actions.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyCode, Action>,
    /// Keys per action in configured order, for the controls hint
    keys: Vec<(Action, Vec<KeyCode>)>,
}

impl Keymap {
    /// Build the keymap from configured bindings. Escape is added to Quit
    /// when `quit_on_escape` is set.
    pub fn from_config(keys: &KeyBindings, quit_on_escape: bool) -> Result<Self, ConfigError> {
        let mut keymap = Keymap {
            bindings: HashMap::new(),
            keys: Vec::new(),
        };

        for (action, names) in keys.by_action() {
            if names.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "keys.{action} must list at least one key"
                )));
            }
            let mut codes = Vec::with_capacity(names.len());
            for name in names {
                let code = parse_key(name).map_err(|source| ConfigError::Key {
                    action: action.name().to_string(),
                    source,
                })?;
                keymap.bind(code, action)?;
                codes.push(code);
            }
            keymap.keys.push((action, codes));
        }

        if quit_on_escape {
            keymap.bind(KeyCode::Esc, Action::Quit)?;
            if let Some((_, codes)) = keymap.keys.iter_mut().find(|(a, _)| *a == Action::Quit) {
                if !codes.contains(&KeyCode::Esc) {
                    codes.push(KeyCode::Esc);
                }
            }
        }

        Ok(keymap)
    }

    fn bind(&mut self, code: KeyCode, action: Action) -> Result<(), ConfigError> {
        match self.bindings.insert(code, action) {
            Some(previous) if previous != action => Err(ConfigError::Validation(format!(
                "key '{}' is bound to both {previous} and {action}",
                key_label(code)
            ))),
            _ => Ok(()),
        }
    }

    /// Action for a key event. Releases and repeats of non-press kinds are
    /// ignored; Ctrl+C always quits since raw mode swallows SIGINT.
    pub fn action_for(&self, key: KeyEvent) -> Option<Action> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::Quit),
                _ => None,
            };
        }
        self.bindings.get(&key.code).copied()
    }

    /// Keys bound to `action`, in configured order
    pub fn keys_for(&self, action: Action) -> &[KeyCode] {
        self.keys
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, codes)| codes.as_slice())
            .unwrap_or(&[])
    }

    /// One-line controls summary, e.g. `(p)lace (r)eset (q)uit`
    pub fn hint(&self) -> String {
        let mut parts: Vec<String> = [Action::Place, Action::Reset, Action::Quit]
            .into_iter()
            .filter_map(|action| {
                let code = *self.keys_for(action).first()?;
                let name = action.name();
                Some(match code {
                    KeyCode::Char(c) if name.starts_with(c) => format!("({c}){}", &name[1..]),
                    _ => format!("{name} [{}]", key_label(code)),
                })
            })
            .collect();

        let moves: Vec<String> = [
            Action::MoveLeft,
            Action::MoveDown,
            Action::MoveUp,
            Action::MoveRight,
        ]
        .into_iter()
        .filter_map(|action| self.keys_for(action).first().map(|&c| key_label(c)))
        .collect();
        if !moves.is_empty() {
            parts.push(format!("move [{}]", moves.join("")));
        }

        parts.join(" ")
    }
}
