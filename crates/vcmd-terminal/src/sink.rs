//! The presentation-layer boundary.

use crate::transcript::Entry;

/// Receives transcript and navigation updates from a terminal.
///
/// Every method defaults to a no-op. Calls are made after the terminal has
/// released its internal lock, so implementations may query the terminal.
pub trait RenderSink: Send + Sync {
    /// A complete entry was appended.
    fn on_append(&self, _entry: &Entry) {}

    /// The transcript was emptied.
    fn on_clear(&self) {}

    /// The busy flag changed.
    fn on_busy(&self, _busy: bool) {}

    /// History navigation produced a line for the input field.
    fn on_recall(&self, _line: &str) {}

    /// The placeholder hint delay elapsed.
    fn on_placeholder(&self, _text: &str) {}
}

/// A sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {}
