//! Command interpreter and terminal shell.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. A `TerminalSession` tokenizes
//! submitted lines, dispatches them through the registry, and records the
//! results in its transcript and recall buffer. A `TerminalShell` owns the
//! session and drives it from input events.

mod commands;
mod dev_commands;
mod fun_commands;
mod info_commands;
mod interpreter;
pub mod palette;
pub mod rich;
mod session;
mod shell;

/// Register every built-in command into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Result of executing a command (output or control signal).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only context passed to every command.
pub use interpreter::Environment;
/// A tokenized command line.
pub use interpreter::{Invocation, Resolved, tokenize};
/// Theme palette used to color rich output.
pub use palette::{Color, Palette};
/// Styled output model.
pub use rich::{RichLine, RichText, Span, Style};
/// Session state: transcript, recall buffer, edit buffer.
pub use session::{Dispatch, Output, RecallBuffer, RecallStep, TerminalSession, TranscriptEntry};
/// Presentation shell: lifecycle, focus, key routing.
pub use shell::{ShellEffect, ShellState, TerminalShell};
