//! Platform-agnostic input event types.
//!
//! Every front-end maps its native input to these enums. The terminal shell
//! never sees raw platform input.

use std::str::FromStr;

use crate::error::FolioError;

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Character typed into the focused input.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// A named editing key.
    Key(Key),
    /// A modified key combination (global shortcuts).
    Chord(KeyChord),
    /// The floating terminal launcher was clicked.
    LauncherClick,
    /// The host gained focus.
    FocusGained,
    /// The host lost focus.
    FocusLost,
    /// User requested quit (window close, etc.).
    Quit,
}

/// Named keys the terminal input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Up,
    Down,
    Tab,
    Escape,
}

/// A key combined with modifiers, e.g. `ctrl+o`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl: bool,
    pub alt: bool,
    /// Lower-cased key character.
    pub key: char,
}

impl KeyChord {
    /// `ctrl+<key>`.
    pub const fn ctrl(key: char) -> Self {
        Self {
            ctrl: true,
            alt: false,
            key,
        }
    }
}

impl FromStr for KeyChord {
    type Err = FolioError;

    /// Parse chords such as `ctrl+o`, `alt+t` or `ctrl+alt+k`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ctrl = false;
        let mut alt = false;
        let mut key = None;
        for part in s.split('+').map(str::trim) {
            match part.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "alt" | "option" => alt = true,
                other => {
                    let mut chars = other.chars();
                    match (chars.next(), chars.next(), key) {
                        (Some(c), None, None) => key = Some(c),
                        _ => {
                            return Err(FolioError::Config(format!("invalid key chord: {s}")));
                        },
                    }
                },
            }
        }
        match key {
            Some(key) if ctrl || alt => Ok(Self { ctrl, alt, key }),
            _ => Err(FolioError::Config(format!(
                "key chord needs a modifier and one key: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for KeyChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}
