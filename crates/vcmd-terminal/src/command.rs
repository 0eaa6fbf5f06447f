//! The command contract and closure-backed commands.

use std::future::Future;
use std::pin::Pin;

use vcmd_types::error::Result;

use crate::output::CommandOutput;
use crate::registry::Registry;

/// A boxed future resolving to a command's output.
pub type BoxFuture = Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'static>>;

/// What a command hands back to the executor.
pub enum Reply {
    /// The output is available now.
    Ready(CommandOutput),
    /// The output arrives once the future settles.
    Deferred(BoxFuture),
}

impl std::fmt::Debug for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Reply::Ready(output) => f.debug_tuple("Ready").field(output).finish(),
            Reply::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

impl From<CommandOutput> for Reply {
    fn from(output: CommandOutput) -> Self {
        Reply::Ready(output)
    }
}

/// Read-only session state visible to a command while it executes.
pub struct Context<'a> {
    /// The composed registry the command was resolved from.
    pub registry: &'a Registry,
    /// Every line recorded so far, oldest first, including the current one.
    pub history: &'a [String],
}

/// A single executable command.
pub trait Command: Send + Sync {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str {
        ""
    }

    /// Usage string (e.g. "greet \[name\]").
    fn usage(&self) -> &str {
        self.name()
    }

    /// Execute the command with the argument text following its name.
    fn execute(&self, args: &str, ctx: &Context<'_>) -> Result<Reply>;
}

type ImmediateFn = dyn Fn(&str) -> Result<CommandOutput> + Send + Sync;
type DeferredFn = dyn Fn(String) -> BoxFuture + Send + Sync;

enum Handler {
    Immediate(Box<ImmediateFn>),
    Deferred(Box<DeferredFn>),
}

/// A command backed by a closure.
pub struct FnCommand {
    name: String,
    description: String,
    handler: Handler,
}

impl FnCommand {
    /// Attach a description shown by `help`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Build a command whose closure produces its output synchronously.
pub fn immediate<F>(name: impl Into<String>, f: F) -> FnCommand
where
    F: Fn(&str) -> Result<CommandOutput> + Send + Sync + 'static,
{
    FnCommand {
        name: name.into(),
        description: String::new(),
        handler: Handler::Immediate(Box::new(f)),
    }
}

/// Build a command whose closure returns a future.
pub fn deferred<F, Fut>(name: impl Into<String>, f: F) -> FnCommand
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CommandOutput>> + Send + 'static,
{
    FnCommand {
        name: name.into(),
        description: String::new(),
        handler: Handler::Deferred(Box::new(move |args| Box::pin(f(args)))),
    }
}

impl Command for FnCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn execute(&self, args: &str, _ctx: &Context<'_>) -> Result<Reply> {
        match &self.handler {
            Handler::Immediate(f) => f(args).map(Reply::Ready),
            Handler::Deferred(f) => Ok(Reply::Deferred(f(args.to_string()))),
        }
    }
}
