//! The executor: submission, dispatch, busy gating, and history recall.
//!
//! One command is in flight at a time. A submission that arrives while a
//! command is running is dropped without being recorded, so transcript
//! order always equals submission order.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex};
use tokio::runtime::Handle;
use tokio::sync::watch;

use vcmd_types::config::TerminalConfig;
use vcmd_types::error::{Result, TerminalError};

use crate::command::{BoxFuture, Command, Context, Reply};
use crate::commands::builtin_commands;
use crate::hint::PlaceholderHint;
use crate::history::History;
use crate::output::CommandOutput;
use crate::registry::Registry;
use crate::sink::{NullSink, RenderSink};
use crate::transcript::{Entry, EntryKind, Transcript};

/// Outcome of a single `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input; nothing was recorded.
    Empty,
    /// A command was still running; the line was dropped.
    Rejected,
    /// The command name did not resolve.
    NotFound,
    /// The handler finished and its output was appended.
    Completed,
    /// The handler failed and an error entry was appended.
    Failed,
    /// The handler returned a future; its entry is appended once it settles.
    Pending,
}

struct Session {
    registry: Arc<Registry>,
    history: History,
    transcript: Transcript,
    busy: bool,
}

struct Shared {
    config: TerminalConfig,
    builtins: Vec<Arc<dyn Command>>,
    session: Mutex<Session>,
    /// Held across a session change and its sink callback so the sink
    /// observes changes in the order they were applied. Taken before
    /// `session`. Reentrant so a sink may drive the terminal.
    notify: ReentrantMutex<()>,
    busy_tx: watch::Sender<bool>,
    sink: Arc<dyn RenderSink>,
    hint: Mutex<Option<PlaceholderHint>>,
}

impl Shared {
    /// Append the outcome of the in-flight command and leave the busy state.
    fn settle(&self, input: &str, result: Result<CommandOutput>) -> Submission {
        let _order = self.notify.lock();
        let mut session = self.session.lock();
        let (appended, outcome) = match result {
            Ok(CommandOutput::Clear) => {
                session.transcript.clear();
                (None, Submission::Completed)
            },
            Ok(output) => {
                let entry = session.transcript.push(input, EntryKind::Output, output);
                (Some(entry), Submission::Completed)
            },
            Err(e) => {
                log::warn!("Command '{input}' failed: {e}");
                let text = CommandOutput::Text(format!("error: {e}"));
                let entry = session.transcript.push(input, EntryKind::Failure, text);
                (Some(entry), Submission::Failed)
            },
        };
        drop(session);

        match appended {
            Some(entry) => self.sink.on_append(&entry),
            None => self.sink.on_clear(),
        }

        // Busy is released only after the sink has seen the entry, so the
        // next submission cannot overtake it.
        self.session.lock().busy = false;
        self.busy_tx.send_replace(false);
        self.sink.on_busy(false);
        outcome
    }
}

/// Builder for a [`Terminal`].
pub struct TerminalBuilder {
    config: TerminalConfig,
    builtins: Vec<Arc<dyn Command>>,
    commands: Vec<Arc<dyn Command>>,
    sink: Arc<dyn RenderSink>,
}

impl Default for TerminalBuilder {
    fn default() -> Self {
        Self {
            config: TerminalConfig::default(),
            builtins: builtin_commands(),
            commands: Vec::new(),
            sink: Arc::new(NullSink),
        }
    }
}

impl TerminalBuilder {
    pub fn config(mut self, config: TerminalConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a user command.
    pub fn command(mut self, cmd: impl Command + 'static) -> Self {
        self.commands.push(Arc::new(cmd));
        self
    }

    /// Register several user commands.
    pub fn commands(mut self, cmds: impl IntoIterator<Item = Arc<dyn Command>>) -> Self {
        self.commands.extend(cmds);
        self
    }

    /// Register an additional built-in. Built-ins win name collisions.
    pub fn builtin(mut self, cmd: impl Command + 'static) -> Self {
        self.builtins.push(Arc::new(cmd));
        self
    }

    /// Drop the default `clear`/`help`/`history` built-ins.
    pub fn without_default_builtins(mut self) -> Self {
        self.builtins.clear();
        self
    }

    pub fn sink(mut self, sink: Arc<dyn RenderSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn build(self) -> Terminal {
        let builtins = self.builtins;
        let registry = Registry::new(builtins.iter().map(Arc::clone).collect(), self.commands);
        log::debug!("Terminal composed with {} commands", registry.len());
        let (busy_tx, _) = watch::channel(false);
        Terminal {
            shared: Arc::new(Shared {
                config: self.config,
                builtins,
                notify: ReentrantMutex::new(()),
                session: Mutex::new(Session {
                    registry: Arc::new(registry),
                    history: History::new(),
                    transcript: Transcript::new(),
                    busy: false,
                }),
                busy_tx,
                sink: self.sink,
                hint: Mutex::new(None),
            }),
        }
    }
}

/// Handle to a terminal session. Clones share the same session.
#[derive(Clone)]
pub struct Terminal {
    shared: Arc<Shared>,
}

impl Terminal {
    pub fn builder() -> TerminalBuilder {
        TerminalBuilder::default()
    }

    /// A terminal with the default built-ins and no user commands.
    pub fn new(config: TerminalConfig) -> Self {
        Self::builder().config(config).build()
    }

    /// Submit one raw input line.
    ///
    /// Synchronous handlers and resolution failures are fully reflected in
    /// the transcript when this returns. A deferred handler is spawned on
    /// the current tokio runtime and the call returns [`Submission::Pending`].
    pub fn submit(&self, raw: &str) -> Submission {
        if raw.trim().is_empty() {
            return Submission::Empty;
        }
        let (name, args) = split_command(raw);

        let order = self.shared.notify.lock();
        let mut session = self.shared.session.lock();
        if session.busy {
            log::warn!("Dropping '{raw}': a command is still running");
            return Submission::Rejected;
        }
        session.history.record(raw);

        let Some(cmd) = session.registry.resolve(name) else {
            let text = CommandOutput::Text(self.shared.config.not_found_text(name));
            let entry = session.transcript.push(raw, EntryKind::NotFound, text);
            drop(session);
            log::debug!("No command named '{name}'");
            self.shared.sink.on_append(&entry);
            return Submission::NotFound;
        };

        session.busy = true;
        self.shared.busy_tx.send_replace(true);
        let registry = Arc::clone(&session.registry);
        let history = session.history.entries().to_vec();
        drop(session);
        self.shared.sink.on_busy(true);
        drop(order);

        log::debug!("Dispatching '{name}'");
        let ctx = Context {
            registry: &registry,
            history: &history,
        };
        let reply = panic::catch_unwind(AssertUnwindSafe(|| cmd.execute(args, &ctx)))
            .unwrap_or_else(|_| Err(TerminalError::Handler(format!("{name} panicked"))));

        match reply {
            Ok(Reply::Ready(output)) => self.shared.settle(raw, Ok(output)),
            Ok(Reply::Deferred(fut)) => self.spawn_deferred(raw, name, fut),
            Err(e) => self.shared.settle(raw, Err(e)),
        }
    }

    fn spawn_deferred(&self, raw: &str, name: &str, fut: BoxFuture) -> Submission {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                let err = TerminalError::Runtime(format!("cannot await {name}: {e}"));
                return self.shared.settle(raw, Err(err));
            },
        };
        let shared = Arc::clone(&self.shared);
        let input = raw.to_string();
        let name = name.to_string();
        handle.spawn(async move {
            let result = match tokio::spawn(fut).await {
                Ok(result) => result,
                Err(e) if e.is_panic() => Err(TerminalError::Handler(format!("{name} panicked"))),
                Err(_) => Err(TerminalError::Handler(format!("{name} was cancelled"))),
            };
            shared.settle(&input, result);
        });
        Submission::Pending
    }

    /// Step back through history and return the selected line.
    pub fn recall_older(&self) -> Option<String> {
        let _order = self.shared.notify.lock();
        let line = self
            .shared
            .session
            .lock()
            .history
            .recall_older()
            .map(str::to_string);
        if let Some(ref line) = line {
            self.shared.sink.on_recall(line);
        }
        line
    }

    /// Step forward through history. Returns `""` past the newest entry.
    pub fn recall_newer(&self) -> String {
        let _order = self.shared.notify.lock();
        let line = self.shared.session.lock().history.recall_newer().to_string();
        self.shared.sink.on_recall(&line);
        line
    }

    /// Empty the transcript. History is kept.
    pub fn reset(&self) {
        let _order = self.shared.notify.lock();
        self.shared.session.lock().transcript.clear();
        self.shared.sink.on_clear();
    }

    /// Replace the user command set, keeping the built-ins.
    pub fn set_commands(&self, commands: Vec<Arc<dyn Command>>) {
        let builtins = self.shared.builtins.iter().map(Arc::clone).collect();
        let registry = Registry::new(builtins, commands);
        log::debug!("Registry rebuilt with {} commands", registry.len());
        self.shared.session.lock().registry = Arc::new(registry);
    }

    pub fn is_busy(&self) -> bool {
        *self.shared.busy_tx.borrow()
    }

    /// Watch the busy flag.
    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.shared.busy_tx.subscribe()
    }

    /// Wait until no command is in flight.
    pub async fn settled(&self) {
        let mut rx = self.shared.busy_tx.subscribe();
        // The sender lives in `shared`, which `self` keeps alive.
        let _ = rx.wait_for(|busy| !*busy).await;
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Vec<Entry> {
        self.shared.session.lock().transcript.entries().to_vec()
    }

    pub fn last_entry(&self) -> Option<Entry> {
        self.shared.session.lock().transcript.last().cloned()
    }

    /// Snapshot of the history list, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.shared.session.lock().history.entries().to_vec()
    }

    /// Command names starting with `partial`.
    pub fn complete(&self, partial: &str) -> Vec<String> {
        self.shared.session.lock().registry.completions(partial)
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.shared.config
    }

    /// Schedule the placeholder hint if `show_help` is set.
    ///
    /// Restarting replaces (and cancels) any hint still pending.
    pub fn start_hint(&self) -> Result<()> {
        let config = &self.shared.config;
        if !config.show_help {
            return Ok(());
        }
        let hint = PlaceholderHint::schedule(
            config.help_delay(),
            config.help_text.clone(),
            Arc::clone(&self.shared.sink),
        )?;
        *self.shared.hint.lock() = Some(hint);
        Ok(())
    }

    /// Cancel any pending placeholder hint.
    pub fn teardown(&self) {
        if let Some(hint) = self.shared.hint.lock().take() {
            hint.cancel();
        }
    }
}

/// Split a line into the command name and the argument text after it.
///
/// Leading whitespace of the arguments is dropped; the rest is kept as is.
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(i) => (&line[..i], line[i..].trim_start()),
        None => (line, ""),
    }
}
