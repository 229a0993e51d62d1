use std::time::Duration;

use tokio::task::JoinHandle;

use crate::tokio::TOKIO_RUNTIME;

// Simulated network latency before a demo "send" completes
const MOCK_SEND_DELAY: Duration = Duration::from_millis(900);

/// Demo-only submission path. After full-form acceptance the binding layer
/// can hand the send to this instead of a real network call: a fixed delay
/// runs on the shared runtime, then the completion callback fires (which is
/// where the form and its warnings get reset).
///
/// A second submit while one is pending aborts the pending send first, so
/// a double submit can never complete twice.
pub struct MockSubmitter {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        Self::with_delay(MOCK_SEND_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        MockSubmitter {
            delay,
            pending: None,
        }
    }

    pub fn submit(&mut self, on_complete: impl FnOnce() + Send + 'static) {
        self.abort_pending();
        let delay = self.delay;
        let handle = TOKIO_RUNTIME.spawn(async move {
            tokio::time::sleep(delay).await;
            on_complete();
        });
        self.pending = Some(handle);
    }

    /// Cancel a pending send, if any. The completion callback will not run.
    pub fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        MockSubmitter::new()
    }
}

impl Drop for MockSubmitter {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
