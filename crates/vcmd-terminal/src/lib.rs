//! Command resolution, execution, and history core for the vcmd terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait (or are built from closures) and are registered by name.
//! The executor records each submitted line, resolves its first word,
//! runs the command (awaiting it if deferred), and appends the result to
//! a transcript that a `RenderSink` mirrors.

mod command;
mod commands;
mod hint;
mod history;
mod output;
mod registry;
mod sink;
mod terminal;
mod transcript;

/// A boxed future resolving to a command's output.
pub use command::BoxFuture;
/// A single executable command trait.
pub use command::Command;
/// Read-only session state passed to every command.
pub use command::Context;
/// A closure-backed command.
pub use command::FnCommand;
/// Immediate or deferred result of running a command.
pub use command::Reply;
/// Build closure-backed commands.
pub use command::{deferred, immediate};
/// The default built-in commands (clear, help, history).
pub use commands::builtin_commands;
/// Cancellable delayed placeholder hint.
pub use hint::PlaceholderHint;
/// Submitted-line history with a recall cursor.
pub use history::History;
/// Output produced by a command.
pub use output::CommandOutput;
/// Registry of available commands.
pub use registry::Registry;
/// Presentation-layer callbacks.
pub use sink::{NullSink, RenderSink};
/// The executor and its builder.
pub use terminal::{Submission, Terminal, TerminalBuilder};
/// Transcript records.
pub use transcript::{Entry, EntryKind, Transcript};

/// Re-exported foundation types.
pub use vcmd_types::config::TerminalConfig;
pub use vcmd_types::error::{Result, TerminalError};
