//! Terminal configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::input::KeyChord;
use crate::theme::Theme;

/// Top-level terminal configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// User name shown in the prompt and by `whoami`.
    pub user: String,
    /// Host name shown in the prompt.
    pub host: String,
    /// Prompt terminator.
    pub prompt_symbol: String,
    /// Initial presentation theme.
    pub theme: Theme,
    /// Maximum transcript entries kept (0 = unbounded).
    pub max_transcript: usize,
    /// Cursor blink half-period in milliseconds.
    pub cursor_blink_ms: u64,
    /// Welcome banner override.
    pub welcome: Option<String>,
    /// Portfolio content file replacing the embedded content.
    pub content_path: Option<PathBuf>,
    /// Global keyboard shortcuts.
    pub shortcuts: ShortcutConfig,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            user: "visitor".to_string(),
            host: "portfolio".to_string(),
            prompt_symbol: "$".to_string(),
            theme: Theme::Dark,
            max_transcript: 500,
            cursor_blink_ms: 530,
            welcome: None,
            content_path: None,
            shortcuts: ShortcutConfig::default(),
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    /// The prompt prefix, e.g. `visitor@portfolio:~$`.
    pub fn prompt(&self) -> String {
        format!("{}@{}:~{}", self.user, self.host, self.prompt_symbol)
    }
}

/// Key-chord spellings for the global shortcuts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub toggle: String,
    pub minimize: String,
    pub theme: String,
    pub quit: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            toggle: "ctrl+o".to_string(),
            minimize: "ctrl+n".to_string(),
            theme: "ctrl+t".to_string(),
            quit: "ctrl+q".to_string(),
        }
    }
}

/// Parsed global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcuts {
    pub toggle: KeyChord,
    pub minimize: KeyChord,
    pub theme: KeyChord,
    pub quit: KeyChord,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            toggle: KeyChord::ctrl('o'),
            minimize: KeyChord::ctrl('n'),
            theme: KeyChord::ctrl('t'),
            quit: KeyChord::ctrl('q'),
        }
    }
}

impl ShortcutConfig {
    /// Parse every chord, keeping the default for any that fail to parse.
    pub fn resolve(&self) -> Shortcuts {
        let defaults = Shortcuts::default();
        Shortcuts {
            toggle: parse_or(&self.toggle, defaults.toggle),
            minimize: parse_or(&self.minimize, defaults.minimize),
            theme: parse_or(&self.theme, defaults.theme),
            quit: parse_or(&self.quit, defaults.quit),
        }
    }
}

fn parse_or(spelling: &str, fallback: KeyChord) -> KeyChord {
    match spelling.parse() {
        Ok(chord) => chord,
        Err(e) => {
            log::warn!("{e} -- using {fallback}");
            fallback
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg = TerminalConfig::from_toml("").unwrap();
        assert_eq!(cfg.user, "visitor");
        assert_eq!(cfg.theme, Theme::Dark);
        assert_eq!(cfg.max_transcript, 500);
        assert!(cfg.content_path.is_none());
    }

    #[test]
    fn partial_override() {
        let cfg = TerminalConfig::from_toml(
            r#"
            user = "guest"
            theme = "light"

            [shortcuts]
            toggle = "alt+k"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.user, "guest");
        assert_eq!(cfg.host, "portfolio");
        assert_eq!(cfg.theme, Theme::Light);
        let keys = cfg.shortcuts.resolve();
        assert_eq!(
            keys.toggle,
            KeyChord {
                ctrl: false,
                alt: true,
                key: 'k'
            }
        );
        assert_eq!(keys.theme, KeyChord::ctrl('t'));
    }

    #[test]
    fn bad_shortcut_falls_back() {
        let shortcuts = ShortcutConfig {
            toggle: "banana".to_string(),
            ..ShortcutConfig::default()
        };
        assert_eq!(shortcuts.resolve().toggle, KeyChord::ctrl('o'));
    }

    #[test]
    fn invalid_toml_is_error() {
        assert!(TerminalConfig::from_toml("max_transcript = \"many\"").is_err());
    }

    #[test]
    fn prompt_format() {
        let cfg = TerminalConfig::default();
        assert_eq!(cfg.prompt(), "visitor@portfolio:~$");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = TerminalConfig::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(format!("{err}").contains("I/O error"));
    }
}
