// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId};
use crate::app::config::MAX_VISIBLE_NOTIFICATIONS;
use std::collections::VecDeque;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE_NOTIFICATIONS` are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            key = %notification.message_key(),
            severity = ?notification.severity(),
            "notification pushed"
        );

        if self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible notification whose timer has run out.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued notifications.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all notifications (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE_NOTIFICATIONS {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;

    fn success() -> Notification {
        Notification::success(keys::WAITLIST_ALERT)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_adds_to_visible_when_space_available() {
        let mut manager = Manager::new();
        manager.push(success());

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for _ in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(success());
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);

        manager.push(success());
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();

        let first = success();
        let first_id = first.id();
        manager.push(first);
        for _ in 1..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(success());
        }
        manager.push(success());
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id));

        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn dismiss_queued_notification() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE_NOTIFICATIONS {
            manager.push(success());
        }
        let queued = success();
        let queued_id = queued.id();
        manager.push(queued);

        assert!(manager.dismiss(queued_id));
        assert_eq!(manager.queued_count(), 0);
        assert_eq!(manager.visible_count(), MAX_VISIBLE_NOTIFICATIONS);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stranger = success().id();

        assert!(!manager.dismiss(stranger));
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(success());
        }

        manager.clear();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = success();
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn error_notifications_do_not_auto_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::error(keys::NOTICE_CONFIG_LOAD_ERROR);
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Tick);
        assert_eq!(manager.visible_count(), 1);

        manager.dismiss(id);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn newest_notification_is_shown_first() {
        let mut manager = Manager::new();
        manager.push(Notification::warning(keys::WAITLIST_INVALID));
        manager.push(success());

        let first = manager.visible().next().expect("one visible");
        assert_eq!(first.message_key(), keys::WAITLIST_ALERT);
    }
}
