//! Widget configuration loaded from TOML.
//!
//! Only `not_found_message` affects the core's behavior. The remaining
//! fields are cosmetic and are carried through for the presentation layer.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TerminalError};

/// Configuration consumed when a terminal is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Appended after `"<name>: "` when a command cannot be resolved.
    pub not_found_message: String,
    /// Title shown in the window bar.
    pub title: String,
    /// Prompt text shown before the input line.
    pub prompt: String,
    /// Intro line shown above the transcript.
    pub intro: String,
    pub show_intro: bool,
    pub hide_bar: bool,
    pub hide_prompt: bool,
    /// Whether the placeholder hint is scheduled at mount.
    pub show_help: bool,
    /// Placeholder text delivered once the hint delay elapses.
    pub help_text: String,
    /// Delay before the placeholder hint appears, in milliseconds.
    pub help_timeout_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            not_found_message: "command not found".to_string(),
            title: "neil@moon: ~".to_string(),
            prompt: "~neil@moon:#".to_string(),
            intro: "Fly me to the moon".to_string(),
            show_intro: false,
            hide_bar: false,
            hide_prompt: false,
            show_help: false,
            help_text: "Type help".to_string(),
            help_timeout_ms: 4000,
        }
    }
}

impl TerminalConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        log::debug!("Loaded terminal config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Delay before the placeholder hint is shown.
    pub fn help_delay(&self) -> Duration {
        Duration::from_millis(self.help_timeout_ms)
    }

    /// Text rendered for an unresolved command name.
    pub fn not_found_text(&self, name: &str) -> String {
        format!("{name}: {}", self.not_found_message)
    }

    fn validate(&self) -> Result<()> {
        if self.not_found_message.trim().is_empty() {
            return Err(TerminalError::Config(
                "not_found_message must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
