// SPDX-License-Identifier: MPL-2.0
//! Notification queue with a cap on visible toasts.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    /// Periodic check for expired notifications.
    Tick(Instant),
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<(NotificationId, Notification)>,
    queue: VecDeque<(NotificationId, Notification)>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notification now, or queues it if the visible slots are full.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        match notification.severity() {
            Severity::Error => {
                tracing::error!(key = notification.message_key(), "notification")
            }
            Severity::Warning => {
                tracing::warn!(key = notification.message_key(), "notification")
            }
            Severity::Success | Severity::Info => {
                tracing::debug!(key = notification.message_key(), "notification")
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front((id, notification));
        } else {
            self.queue.push_back((id, notification));
        }
        id
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|(i, _)| *i == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|(i, _)| *i == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|(_, n)| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue();
        }
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = (NotificationId, &Notification)> {
        self.visible.iter().map(|(id, n)| (*id, n))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether a tick subscription is needed.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(entry) => self.visible.push_back(entry),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_goes_to_queue() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::error("notification-delete-error"));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 2);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = manager.push(Notification::error("a"));
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::error("b"));
        }
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.dismiss(first));
    }

    #[test]
    fn tick_drops_expired_notifications_only() {
        let mut manager = Manager::new();
        manager.push(Notification::success("notification-delete-success"));
        manager.push(Notification::error("notification-delete-error"));

        manager.handle_message(Message::Tick(Instant::now() + Duration::from_secs(10)));

        assert_eq!(manager.visible_count(), 1);
        let (_, remaining) = manager.visible().next().unwrap();
        assert_eq!(remaining.severity(), Severity::Error);
    }

    #[test]
    fn newest_notification_is_listed_first() {
        let mut manager = Manager::new();
        manager.push(Notification::info("first"));
        manager.push(Notification::info("second"));
        let keys: Vec<&str> = manager.visible().map(|(_, n)| n.message_key()).collect();
        assert_eq!(keys, vec!["second", "first"]);
    }
}
