//! Cancellable trailing-edge debounce.
//!
//! Every `schedule` supersedes the previous one: the earlier timer is
//! cancelled and its action never runs.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
struct Pending {
    generation: u64,
    token: Option<CancellationToken>,
}

pub struct Debouncer {
    window: Duration,
    pending: Arc<Mutex<Pending>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: Arc::new(Mutex::new(Pending::default())),
        }
    }

    /// Run `action` once `window` has passed without another `schedule` call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        let generation = {
            let mut pending = self.pending.lock();
            if let Some(prev) = pending.token.replace(token.clone()) {
                prev.cancel();
            }
            pending.generation += 1;
            pending.generation
        };

        let pending = self.pending.clone();
        let window = self.window;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => return,
                _ = tokio::time::sleep(window) => {}
            }
            {
                let mut pending = pending.lock();
                // Superseded between the timer firing and this task running
                if pending.generation != generation {
                    return;
                }
                pending.token = None;
            }
            action();
        });
    }

    /// Drop the pending action, if any.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock();
        pending.generation += 1;
        if let Some(token) = pending.token.take() {
            token.cancel();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.lock().token.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
