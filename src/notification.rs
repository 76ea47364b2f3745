//! Transient user notifications.
//!
//! At most one notification is visible at a time. Showing a new notification
//! replaces the current one and restarts the dismiss timer.

use std::{
    fmt,
    time::{Duration, Instant},
};

/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// The action completed.
    Success,
    /// The action was rejected or failed.
    Error,
}

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Success or failure.
    pub kind: NotificationKind,
    /// The text to display.
    pub message: String,
}

impl Notification {
    /// A success notification.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    /// An error notification.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Whether this is an error notification.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Holds the visible notification and dismisses it after a fixed delay.
#[derive(Debug, Clone)]
pub struct Notifier {
    timeout: Duration,
    current: Option<(Notification, Instant)>,
}

impl Notifier {
    /// Creates a notifier that dismisses notifications after `timeout`.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            current: None,
        }
    }

    /// Shows a notification now, replacing any visible one.
    pub fn show(&mut self, notification: Notification) {
        self.show_at(notification, Instant::now());
    }

    /// Shows a notification as of `at`, replacing any visible one.
    pub fn show_at(&mut self, notification: Notification, at: Instant) {
        if notification.is_error() {
            tracing::debug!(message = %notification.message, "error notification");
        }
        self.current = Some((notification, at));
    }

    /// The notification visible now, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current_at(Instant::now())
    }

    /// The notification visible at `now`, if any.
    #[must_use]
    pub fn current_at(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|(_, shown)| now.saturating_duration_since(*shown) < self.timeout)
            .map(|(notification, _)| notification)
    }

    /// Takes the most recent notification regardless of expiry.
    ///
    /// Used by front ends that render once per action rather than on a timer.
    pub fn take(&mut self) -> Option<Notification> {
        self.current.take().map(|(notification, _)| notification)
    }

    /// Dismisses the visible notification.
    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_secs(3))
    }
}
