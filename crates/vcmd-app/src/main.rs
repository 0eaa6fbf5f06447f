//! vcmd console entry point.
//!
//! Reads lines from stdin and submits them to a terminal. `:up` and
//! `:down` navigate history, `:complete <prefix>` lists matching commands,
//! and `:quit` (or end of input) exits.

mod console;
mod demo_commands;

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use vcmd_terminal::{RenderSink, Terminal, TerminalConfig};

use console::ConsoleSink;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg or VCMD_CONFIG env var.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VCMD_CONFIG").ok())
    {
        Some(path) => TerminalConfig::load(&path)?,
        None => TerminalConfig::default(),
    };
    log::info!("Starting vcmd ({})", config.title);

    let sink = Arc::new(ConsoleSink::new(&config.prompt, config.hide_prompt));
    let terminal = Terminal::builder()
        .config(config.clone())
        .commands(demo_commands::demo_commands())
        .sink(Arc::clone(&sink) as Arc<dyn RenderSink>)
        .build();

    if !config.hide_bar {
        println!("== {} ==", config.title);
    }
    if config.show_intro {
        println!("{}", config.intro);
    }
    terminal.start_hint()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" => break,
            ":up" => {
                terminal.recall_older();
            },
            ":down" => {
                terminal.recall_newer();
            },
            other => {
                if let Some(partial) = other.strip_prefix(":complete") {
                    println!("{}", terminal.complete(partial.trim()).join("  "));
                    continue;
                }
                let input = input_line(&line, sink.take_recalled());
                terminal.submit(&input);
                terminal.settled().await;
            },
        }
    }

    terminal.teardown();
    log::info!("Exiting vcmd");
    Ok(())
}

/// The line to submit. A blank line re-submits the recalled one.
fn input_line(line: &str, recalled: String) -> String {
    if line.trim().is_empty() {
        recalled
    } else {
        line.to_string()
    }
}
