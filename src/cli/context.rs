use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::cli::console::{Console, StandardConsole};

/// Per-run execution context handed to command handlers.
///
/// The cancellation token is threaded through for host integration;
/// no shipped command triggers or polls it.
pub struct ExecutionContext {
    cancel: CancellationToken,
    console: Arc<dyn Console>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::with_console(Arc::new(StandardConsole::new()))
    }

    /// Context with a custom output sink, used by tests.
    pub fn with_console(console: Arc<dyn Console>) -> Self {
        Self {
            cancel: CancellationToken::new(),
            console,
        }
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn console(&self) -> &dyn Console {
        self.console.as_ref()
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}
