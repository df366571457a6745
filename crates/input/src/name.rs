//! Name entry for a new high score.

use arrayvec::ArrayString;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{DEFAULT_PLAYER_NAME, MAX_NAME_LEN};

/// What a key did to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameInput {
    /// Keep editing
    Editing,
    /// Enter pressed; the final name (never empty)
    Submitted(String),
    /// Esc or Ctrl-C pressed
    Cancelled,
}

/// Line editor accepting up to `MAX_NAME_LEN` ASCII alphanumerics
#[derive(Debug, Clone, Default)]
pub struct NameEntry {
    buf: ArrayString<MAX_NAME_LEN>,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Append a character. Returns false when it is rejected or the name is full.
    pub fn push(&mut self, c: char) -> bool {
        c.is_ascii_alphanumeric() && self.buf.try_push(c).is_ok()
    }

    pub fn backspace(&mut self) {
        self.buf.pop();
    }

    /// Name to record: the typed text or the default player name
    pub fn finish(&self) -> String {
        if self.buf.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            self.buf.to_string()
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> NameInput {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NameInput::Cancelled
            }
            KeyCode::Esc => NameInput::Cancelled,
            KeyCode::Enter => NameInput::Submitted(self.finish()),
            KeyCode::Backspace => {
                self.backspace();
                NameInput::Editing
            }
            KeyCode::Char(c) => {
                self.push(c);
                NameInput::Editing
            }
            _ => NameInput::Editing,
        }
    }
}
