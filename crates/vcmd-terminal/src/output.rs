//! Renderable values produced by commands.

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    /// Plain text, rendered verbatim.
    Text(String),
    /// Tabular data (header row + data rows).
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// A structured value.
    Json(serde_json::Value),
    /// Command produced no visible output.
    None,
    /// Signal to clear the transcript.
    Clear,
}

impl CommandOutput {
    /// Text shown in the transcript for this output.
    pub fn render(&self) -> String {
        match self {
            CommandOutput::Text(text) => text.clone(),
            CommandOutput::Table { headers, rows } => {
                let mut out = headers.join(" | ");
                for row in rows {
                    out.push('\n');
                    out.push_str(&row.join(" | "));
                }
                out
            },
            CommandOutput::Json(serde_json::Value::String(s)) => s.clone(),
            CommandOutput::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            },
            CommandOutput::None | CommandOutput::Clear => String::new(),
        }
    }
}

impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Text(text)
    }
}

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Text(text.to_string())
    }
}

impl From<serde_json::Value> for CommandOutput {
    fn from(value: serde_json::Value) -> Self {
        CommandOutput::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_renders_verbatim() {
        let out = CommandOutput::from("  spaced\nlines ");
        assert_eq!(out.render(), "  spaced\nlines ");
    }

    #[test]
    fn table_renders_pipe_separated() {
        let out = CommandOutput::Table {
            headers: vec!["name".into(), "size".into()],
            rows: vec![
                vec!["a".into(), "1".into()],
                vec!["b".into(), "2".into()],
            ],
        };
        assert_eq!(out.render(), "name | size\na | 1\nb | 2");
    }

    #[test]
    fn json_string_renders_bare() {
        assert_eq!(CommandOutput::from(json!("moon")).render(), "moon");
    }

    #[test]
    fn json_object_renders_pretty() {
        let out = CommandOutput::from(json!({ "planet": "moon" }));
        assert_eq!(out.render(), "{\n  \"planet\": \"moon\"\n}");
    }

    #[test]
    fn none_and_clear_render_empty() {
        assert_eq!(CommandOutput::None.render(), "");
        assert_eq!(CommandOutput::Clear.render(), "");
    }
}
