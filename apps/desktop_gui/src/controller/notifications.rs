//! Transient user-facing notifications with independent per-record expiry.
//!
//! Every `notify` call appends a new record, even for an identical message;
//! duplicates stack rather than merge, and a later call never resets an
//! earlier record's timer.

use std::time::{Duration, Instant};

pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    created_at: Instant,
}

impl Notification {
    fn expires_at(&self) -> Instant {
        self.created_at + NOTIFICATION_LIFETIME
    }
}

#[derive(Debug, Default)]
pub struct NotificationStack {
    entries: Vec<Notification>,
}

impl NotificationStack {
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notify_at(message, severity, Instant::now());
    }

    pub fn notify_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.entries.push(Notification {
            message: message.into(),
            severity,
            created_at: now,
        });
    }

    /// Drop every record whose lifetime has elapsed. Called once per frame.
    pub fn prune(&mut self, now: Instant) {
        self.entries.retain(|entry| now < entry.expires_at());
    }

    /// Live records in insertion order.
    pub fn active(&self) -> &[Notification] {
        &self.entries
    }
}
