//! Foundation types for the portfolio terminal.
//!
//! Platform-agnostic types shared by every `folio` crate: the error type,
//! input events and key chords, the presentation theme flag, and the
//! TOML-backed configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod theme;
