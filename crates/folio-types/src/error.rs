//! Error types for the portfolio terminal.

use std::io;

/// Errors produced by the portfolio terminal.
///
/// Command bodies report bad arguments through `Usage` and
/// `InvalidSubcommand`; the dispatcher renders those as ordinary transcript
/// output, so none of them ever reach the user as a failure.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("usage: {0}")]
    Usage(String),

    #[error("{command}: '{sub}' is not a {command} command")]
    InvalidSubcommand { command: String, sub: String },

    #[error("command not found: {0}. Type 'help' to see available commands.")]
    UnknownCommand(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl FolioError {
    /// Build a usage error from a usage string such as `"grep <term>"`.
    pub fn usage(text: impl Into<String>) -> Self {
        Self::Usage(text.into())
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
