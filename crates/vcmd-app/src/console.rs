//! Render sink that writes transcript updates to stdout.

use parking_lot::Mutex;
use vcmd_terminal::{Entry, EntryKind, RenderSink};

/// Prints each appended entry under an echo of its input line.
pub struct ConsoleSink {
    prompt: String,
    hide_prompt: bool,
    /// Last line produced by history navigation.
    recalled: Mutex<String>,
}

impl ConsoleSink {
    pub fn new(prompt: &str, hide_prompt: bool) -> Self {
        Self {
            prompt: prompt.to_string(),
            hide_prompt,
            recalled: Mutex::new(String::new()),
        }
    }

    /// Take the line most recently recalled from history, leaving it empty.
    pub fn take_recalled(&self) -> String {
        std::mem::take(&mut *self.recalled.lock())
    }

    fn format_entry(&self, entry: &Entry) -> String {
        let mut out = if self.hide_prompt {
            entry.input.clone()
        } else {
            format!("{} {}", self.prompt, entry.input)
        };
        let rendered = entry.rendered();
        if !rendered.is_empty() {
            out.push('\n');
            if entry.kind == EntryKind::Failure {
                out.push_str("! ");
            }
            out.push_str(&rendered);
        }
        out
    }
}

impl RenderSink for ConsoleSink {
    fn on_append(&self, entry: &Entry) {
        println!("{}", self.format_entry(entry));
    }

    fn on_clear(&self) {
        // ANSI: clear screen, cursor home.
        print!("\x1b[2J\x1b[H");
    }

    fn on_busy(&self, busy: bool) {
        log::debug!("busy = {busy}");
    }

    fn on_recall(&self, line: &str) {
        *self.recalled.lock() = line.to_string();
        println!("{} {line}", self.prompt);
    }

    fn on_placeholder(&self, text: &str) {
        println!("({text})");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcmd_terminal::CommandOutput;

    fn entry(input: &str, kind: EntryKind, output: CommandOutput) -> Entry {
        Entry {
            seq: 0,
            input: input.to_string(),
            kind,
            output,
        }
    }

    #[test]
    fn entry_echoes_prompt_and_output() {
        let sink = ConsoleSink::new("$", false);
        let e = entry("echo hi", EntryKind::Output, "hi".into());
        assert_eq!(sink.format_entry(&e), "$ echo hi\nhi");
    }

    #[test]
    fn blank_output_is_echo_only() {
        let sink = ConsoleSink::new("$", true);
        let e = entry("noop", EntryKind::Output, CommandOutput::None);
        assert_eq!(sink.format_entry(&e), "noop");
    }

    #[test]
    fn failures_are_marked() {
        let sink = ConsoleSink::new("$", false);
        let e = entry("bad", EntryKind::Failure, "error: nope".into());
        assert_eq!(sink.format_entry(&e), "$ bad\n! error: nope");
    }

    #[test]
    fn recall_is_remembered() {
        let sink = ConsoleSink::new("$", false);
        sink.on_recall("echo a");
        assert_eq!(sink.take_recalled(), "echo a");
        assert_eq!(sink.take_recalled(), "");
    }
}
