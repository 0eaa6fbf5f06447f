//! Sample user commands registered by the console front end.

use std::sync::Arc;
use std::time::Duration;

use vcmd_terminal::{Command, CommandOutput, TerminalError, deferred, immediate};

/// The demo command set.
pub fn demo_commands() -> Vec<Arc<dyn Command>> {
    vec![
        Arc::new(immediate("echo", |args| Ok(args.into())).with_description("Print arguments")),
        Arc::new(
            immediate("upper", |args| Ok(args.to_uppercase().into()))
                .with_description("Print arguments in upper case"),
        ),
        Arc::new(
            immediate("info", |_| {
                Ok(serde_json::json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                })
                .into())
            })
            .with_description("Show build information"),
        ),
        Arc::new(
            deferred("sleep", |args| async move {
                let secs: u64 = args
                    .trim()
                    .parse()
                    .map_err(|_| TerminalError::Command("usage: sleep <seconds>".to_string()))?;
                tokio::time::sleep(Duration::from_secs(secs)).await;
                Ok(CommandOutput::Text(format!("slept {secs}s")))
            })
            .with_description("Wait, then report"),
        ),
    ]
}
