// SPDX-License-Identifier: MPL-2.0
//! A single host notification and its severity.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Identifier assigned by the [`Manager`](super::Manager) on push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub(super) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Info,
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// Returns `None` when the notification must be dismissed by hand.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A message to show the user, stored as an i18n key resolved at render time.
#[derive(Debug, Clone)]
pub struct Notification {
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument for the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Whether the notification has outlived its severity's lifetime at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .lifetime()
            .is_some_and(|lifetime| now.saturating_duration_since(self.created_at) >= lifetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn errors_never_expire() {
        let notification = Notification::error("notification-delete-error");
        let far_future = Instant::now() + Duration::from_secs(3600);
        assert!(!notification.is_expired(far_future));
    }

    #[test]
    fn success_expires_after_its_lifetime() {
        let notification = Notification::success("notification-delete-success");
        assert!(!notification.is_expired(Instant::now()));
        assert!(notification.is_expired(Instant::now() + Duration::from_secs(4)));
    }

    #[test]
    fn warnings_outlive_successes() {
        assert!(Severity::Warning.lifetime() > Severity::Success.lifetime());
    }

    #[test]
    fn builder_collects_arguments() {
        let notification = Notification::error("notification-feed-load-error")
            .with_arg("path", "feed.toml")
            .with_arg("reason", "missing");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "notification-feed-load-error");
        assert_eq!(notification.message_args().len(), 2);
    }
}
