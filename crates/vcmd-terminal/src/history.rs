//! Submitted-line history with a recall cursor.

/// Ordered record of submitted lines plus a navigation cursor.
///
/// The list only grows. Recall moves the cursor and never touches the
/// list. `None` for the cursor means "no selection", i.e. past the newest
/// entry.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and reset the cursor to "no selection".
    pub fn record(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = None;
    }

    /// Step toward older entries.
    ///
    /// Returns the selected line. At the oldest entry the selection stays
    /// put and the oldest line is returned again. Returns `None` only when
    /// nothing has been recorded.
    pub fn recall_older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(idx);
        Some(self.entries[idx].as_str())
    }

    /// Step toward newer entries.
    ///
    /// Moving past the newest entry clears the selection and returns the
    /// empty line. With no selection this is a no-op that also returns the
    /// empty line.
    pub fn recall_newer(&mut self) -> &str {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.entries[i + 1].as_str()
            },
            _ => {
                self.cursor = None;
                ""
            },
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(lines: &[&str]) -> History {
        let mut h = History::new();
        for line in lines {
            h.record(line);
        }
        h
    }

    #[test]
    fn empty_history_recalls_nothing() {
        let mut h = History::new();
        assert_eq!(h.recall_older(), None);
        assert_eq!(h.recall_newer(), "");
        assert!(h.is_empty());
    }

    #[test]
    fn older_starts_at_newest() {
        let mut h = history_of(&["a", "b"]);
        assert_eq!(h.recall_older(), Some("b"));
        assert_eq!(h.recall_older(), Some("a"));
    }

    #[test]
    fn older_clamps_at_oldest() {
        let mut h = history_of(&["a", "b"]);
        h.recall_older();
        h.recall_older();
        assert_eq!(h.recall_older(), Some("a"));
        assert_eq!(h.recall_newer(), "b");
    }

    #[test]
    fn newer_walks_forward_then_clears() {
        let mut h = history_of(&["a", "b", "c"]);
        h.recall_older();
        h.recall_older();
        h.recall_older();
        assert_eq!(h.recall_newer(), "b");
        assert_eq!(h.recall_newer(), "c");
        assert_eq!(h.recall_newer(), "");
        assert_eq!(h.recall_newer(), "");
        assert_eq!(h.recall_older(), Some("c"));
    }

    #[test]
    fn newer_without_selection_is_noop() {
        let mut h = history_of(&["a"]);
        assert_eq!(h.recall_newer(), "");
        assert_eq!(h.recall_older(), Some("a"));
    }

    #[test]
    fn record_resets_cursor() {
        let mut h = history_of(&["a", "b"]);
        h.recall_older();
        h.recall_older();
        h.record("c");
        assert_eq!(h.recall_older(), Some("c"));
    }

    #[test]
    fn duplicates_are_kept() {
        let h = history_of(&["ls", "ls", "ls"]);
        assert_eq!(h.len(), 3);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_lines() -> impl Strategy<Value = Vec<String>> {
            proptest::collection::vec("[a-z ]{1,12}", 1..20)
        }

        proptest! {
            #[test]
            fn length_equals_records(lines in arb_lines()) {
                let mut h = History::new();
                for line in &lines {
                    h.record(line);
                }
                prop_assert_eq!(h.entries(), lines.as_slice());
            }

            #[test]
            fn excess_older_stays_on_oldest(lines in arb_lines(), extra in 1usize..10) {
                let mut h = History::new();
                for line in &lines {
                    h.record(line);
                }
                for _ in 0..lines.len() + extra {
                    h.recall_older();
                }
                prop_assert_eq!(h.recall_older(), Some(lines[0].as_str()));
            }

            #[test]
            fn recall_never_mutates_list(lines in arb_lines(), moves in proptest::collection::vec(any::<bool>(), 0..40)) {
                let mut h = History::new();
                for line in &lines {
                    h.record(line);
                }
                for older in moves {
                    if older {
                        h.recall_older();
                    } else {
                        h.recall_newer();
                    }
                }
                prop_assert_eq!(h.entries(), lines.as_slice());
            }
        }
    }
}
