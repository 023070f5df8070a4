//! Transient user notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a notification stays on screen.
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);

/// Styling variant of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Capability to show a notification. Fire-and-forget.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// On-screen notifications, each expiring a fixed time after it was shown.
#[derive(Debug)]
pub struct NotificationQueue {
    duration: Duration,
    entries: VecDeque<(Notification, Instant)>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NOTIFICATION_DURATION)
    }
}

impl NotificationQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            entries: VecDeque::new(),
        }
    }

    /// Show `notification` starting at `now`.
    pub fn push(&mut self, notification: Notification, now: Instant) {
        match notification.kind {
            NotificationKind::Success => tracing::info!("{}", notification.message),
            NotificationKind::Error => tracing::warn!("{}", notification.message),
        }
        self.entries.push_back((notification, now));
    }

    /// Drop notifications whose time is up.
    pub fn prune(&mut self, now: Instant) {
        let duration = self.duration;
        self.entries
            .retain(|(_, shown_at)| now.saturating_duration_since(*shown_at) < duration);
    }

    /// Notifications still visible, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|(notification, _)| notification)
    }

    /// Time until the oldest notification expires.
    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.entries
            .front()
            .map(|(_, shown_at)| self.duration.saturating_sub(now.saturating_duration_since(*shown_at)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
