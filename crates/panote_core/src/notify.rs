//! Transient single-slot user notifications.
//!
//! # Responsibility
//! - Hold at most one visible notification at a time.
//! - Expire the slot a fixed interval after it was last set.
//!
//! # Invariants
//! - A newer `show` replaces the slot and restarts the expiry timer;
//!   notifications are never queued.
//! - Expiry is checked on read; no background timer thread exists.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Fixed visible lifetime of a notification.
pub const NOTIFICATION_TTL: Duration = Duration::from_millis(3000);

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

/// One user-visible transient message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Single-slot emitter with deadline-based expiry.
#[derive(Debug)]
pub struct Notifier {
    slot: Option<(Notification, Instant)>,
    ttl: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    /// Emitter using the fixed production lifetime.
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    /// Emitter with a custom lifetime. Production callers keep the fixed
    /// default; tests shorten it to observe expiry.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { slot: None, ttl }
    }

    /// Shows a message, replacing any current one and restarting the
    /// expiry timer.
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification {
            message: message.into(),
            kind,
        };
        self.slot = Some((notification, Instant::now()));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message);
    }

    /// Returns the visible notification, clearing the slot first when its
    /// lifetime has elapsed.
    pub fn current(&mut self) -> Option<&Notification> {
        let expired = self
            .slot
            .as_ref()
            .is_some_and(|(_, shown_at)| shown_at.elapsed() >= self.ttl);
        if expired {
            self.slot = None;
        }
        self.slot.as_ref().map(|(notification, _)| notification)
    }

    /// Drops the slot immediately without waiting for expiry.
    pub fn clear(&mut self) {
        self.slot = None;
    }
}
