//! Delayed placeholder hint, independent of command execution.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use vcmd_types::error::{Result, TerminalError};

use crate::sink::RenderSink;

/// A scheduled delivery of the placeholder text to a sink.
///
/// Aborted on drop, so it cannot fire after its owner is gone.
#[derive(Debug)]
pub struct PlaceholderHint {
    task: JoinHandle<()>,
}

impl PlaceholderHint {
    /// Schedule `text` to reach `sink` after `delay` on the current runtime.
    pub fn schedule(delay: Duration, text: String, sink: Arc<dyn RenderSink>) -> Result<Self> {
        let handle = Handle::try_current().map_err(|e| TerminalError::Runtime(e.to_string()))?;
        let task = handle.spawn(async move {
            tokio::time::sleep(delay).await;
            log::debug!("Showing placeholder hint");
            sink.on_placeholder(&text);
        });
        Ok(Self { task })
    }

    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for PlaceholderHint {
    fn drop(&mut self) {
        self.task.abort();
    }
}
