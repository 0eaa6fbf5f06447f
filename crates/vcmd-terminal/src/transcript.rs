//! Append-only record of echoed input and rendered output.

use crate::output::CommandOutput;

/// How a transcript entry came about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A resolved command's output.
    Output,
    /// The command name had no registry entry.
    NotFound,
    /// The handler failed.
    Failure,
}

/// One echoed input line and its output.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Submission sequence number. Never reused, even across a clear.
    pub seq: u64,
    /// The raw line as submitted.
    pub input: String,
    pub kind: EntryKind,
    pub output: CommandOutput,
}

impl Entry {
    /// Text to display under the echoed input.
    pub fn rendered(&self) -> String {
        self.output.render()
    }
}

/// Ordered list of entries. Entries are only appended; `clear` drops all
/// of them at once.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return a copy of it.
    pub fn push(&mut self, input: &str, kind: EntryKind, output: CommandOutput) -> Entry {
        let entry = Entry {
            seq: self.next_seq,
            input: input.to_string(),
            kind,
            output,
        };
        self.next_seq += 1;
        self.entries.push(entry.clone());
        entry
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
