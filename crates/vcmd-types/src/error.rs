//! Error types for vcmd.

use std::io;

/// Errors produced by the vcmd terminal core and its command handlers.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("command error: {0}")]
    Command(String),

    #[error("handler failed: {0}")]
    Handler(String),

    #[error("runtime error: {0}")]
    Runtime(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TerminalError>;
