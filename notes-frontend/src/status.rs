//! Ephemeral, self-clearing status line.
//!
//! Each announcement is tagged with a sequence number. A clear timer only
//! erases the message it was started for, so a late timer from an older
//! message never wipes a newer one, even when both carry the same text.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusKind::Info => write!(f, "info"),
            StatusKind::Success => write!(f, "success"),
            StatusKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub issued_at: DateTime<Utc>,
    pub sequence: u64,
}

#[derive(Debug, Default)]
struct Slot {
    sequence: u64,
    current: Option<StatusMessage>,
}

type ChangeHook = Arc<dyn Fn() + Send + Sync>;

pub struct StatusNotifier {
    slot: Arc<Mutex<Slot>>,
    clear_after: Duration,
    on_change: ChangeHook,
}

impl StatusNotifier {
    /// `on_change` runs after every visible change, including timer clears.
    pub fn new(clear_after: Duration, on_change: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            clear_after,
            on_change: Arc::new(on_change),
        }
    }

    /// Replace the current message. Empty text clears immediately.
    ///
    /// Must be called from within a tokio runtime; the clear timer is a spawned task.
    pub fn announce(&self, text: impl Into<String>, kind: StatusKind) {
        let text = text.into();
        let sequence = {
            let mut slot = self.slot.lock();
            slot.sequence += 1;
            slot.current = if text.is_empty() {
                None
            } else {
                Some(StatusMessage {
                    text: text.clone(),
                    kind,
                    issued_at: Utc::now(),
                    sequence: slot.sequence,
                })
            };
            slot.sequence
        };
        (self.on_change)();

        if text.is_empty() {
            return;
        }

        let slot = self.slot.clone();
        let on_change = self.on_change.clone();
        let clear_after = self.clear_after;
        tokio::spawn(async move {
            tokio::time::sleep(clear_after).await;
            let cleared = {
                let mut slot = slot.lock();
                let still_shown = slot
                    .current
                    .as_ref()
                    .is_some_and(|m| m.sequence == sequence);
                if still_shown {
                    slot.current = None;
                }
                still_shown
            };
            if cleared {
                on_change();
            }
        });
    }

    pub fn clear(&self) {
        self.announce("", StatusKind::Info);
    }

    pub fn current(&self) -> Option<StatusMessage> {
        self.slot.lock().current.clone()
    }
}
