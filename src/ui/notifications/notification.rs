// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::app::config::{SUCCESS_DISMISS_SECS, WARNING_DISMISS_SECS};
use crate::i18n::keys::Key;
use crate::i18n::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(SUCCESS_DISMISS_SECS)),
            Severity::Warning => Some(Duration::from_secs(WARNING_DISMISS_SECS)),
            Severity::Error => None,
        }
    }

    /// Glyph shown at the left of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }
}

/// A notification to be displayed to the user.
///
/// The message is stored as a [`Key`] and resolved at render time, so a
/// visible toast follows a language switch.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: Key,
    /// Untranslated value appended to the message, e.g. an email address.
    subject: Option<String>,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    pub fn new(severity: Severity, message_key: Key) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key,
            subject: None,
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: Key) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: Key) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates a warning notification.
    pub fn warning(message_key: Key) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: Key) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Appends `subject` to the translated message as `"<message> <subject>."`.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message key.
    #[must_use]
    pub fn message_key(&self) -> Key {
        self.message_key
    }

    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Resolves the display text in the active locale.
    #[must_use]
    pub fn text(&self, i18n: &I18n) -> String {
        let message = i18n.t(self.message_key);
        match &self.subject {
            Some(subject) => format!("{message} {subject}."),
            None => message.to_string(),
        }
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Returns whether this notification should auto-dismiss.
    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| self.age() >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;
    use crate::i18n::{Catalog, Locale, LocaleStore, MemoryStorage};

    fn english() -> I18n {
        let store = LocaleStore::new(Box::new(MemoryStorage::new()))
            .with_session_override(Some(Locale::En));
        I18n::new(Catalog::embedded(), store)
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success(keys::WAITLIST_ALERT);
        let n2 = Notification::success(keys::WAITLIST_ALERT);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success_duration = Severity::Success.auto_dismiss_duration().unwrap();
        let warning_duration = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning_duration > success_duration);
    }

    #[test]
    fn fresh_notification_is_not_dismissed() {
        assert!(!Notification::success(keys::WAITLIST_ALERT).should_auto_dismiss());
    }

    #[test]
    fn constructors_set_correct_severity() {
        let key = keys::WAITLIST_INVALID;
        assert_eq!(Notification::success(key).severity(), Severity::Success);
        assert_eq!(Notification::info(key).severity(), Severity::Info);
        assert_eq!(Notification::warning(key).severity(), Severity::Warning);
        assert_eq!(Notification::error(key).severity(), Severity::Error);
    }

    #[test]
    fn text_without_subject_is_translation() {
        let i18n = english();
        let notification = Notification::warning(keys::WAITLIST_INVALID);
        assert_eq!(notification.text(&i18n), i18n.t(keys::WAITLIST_INVALID));
    }

    #[test]
    fn subject_is_appended_as_sentence() {
        let i18n = english();
        let notification =
            Notification::success(keys::WAITLIST_ALERT).with_subject("user@example.com");

        assert_eq!(
            notification.text(&i18n),
            format!("{} user@example.com.", i18n.t(keys::WAITLIST_ALERT))
        );
    }
}
