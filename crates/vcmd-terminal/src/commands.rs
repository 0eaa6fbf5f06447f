//! Built-in commands shipped with every terminal.

use std::sync::Arc;

use vcmd_types::error::{Result, TerminalError};

use crate::command::{Command, Context, Reply};
use crate::output::CommandOutput;

/// The default built-in set: `clear`, `help`, and `history`.
pub fn builtin_commands() -> Vec<Arc<dyn Command>> {
    vec![Arc::new(ClearCmd), Arc::new(HelpCmd), Arc::new(HistoryCmd)]
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(&self, _args: &str, _ctx: &Context<'_>) -> Result<Reply> {
        Ok(Reply::Ready(CommandOutput::Clear))
    }
}

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help [command]"
    }
    fn execute(&self, args: &str, ctx: &Context<'_>) -> Result<Reply> {
        if let Some(name) = args.split_whitespace().next() {
            let cmd = ctx
                .registry
                .resolve(name)
                .ok_or_else(|| TerminalError::Command(format!("help: no such command: {name}")))?;
            let mut out = cmd.name().to_string();
            if ctx.registry.is_builtin(name) {
                out.push_str(" (built-in)");
            }
            if !cmd.description().is_empty() {
                out.push_str(&format!("\n  {}", cmd.description()));
            }
            out.push_str(&format!("\n  Usage: {}", cmd.usage()));
            return Ok(Reply::Ready(CommandOutput::Text(out)));
        }

        let cmds = ctx.registry.list_commands();
        let mut out = format!("Commands ({}):", cmds.len());
        for (name, desc) in &cmds {
            if desc.is_empty() {
                out.push_str(&format!("\n  {name}"));
            } else {
                out.push_str(&format!("\n  {name:12} {desc}"));
            }
        }
        Ok(Reply::Ready(CommandOutput::Text(out)))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Show command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(&self, _args: &str, ctx: &Context<'_>) -> Result<Reply> {
        if ctx.history.is_empty() {
            return Ok(Reply::Ready(CommandOutput::Text("(no history)".to_string())));
        }
        let mut out = String::new();
        for (i, entry) in ctx.history.iter().enumerate() {
            out.push_str(&format!("  {:4}  {entry}\n", i + 1));
        }
        Ok(Reply::Ready(CommandOutput::Text(out.trim_end().to_string())))
    }
}
