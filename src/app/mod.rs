// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the landing page.
//!
//! The `App` struct owns the translator (and through it the locale store),
//! the landing page state and the toast manager. It translates page events
//! into side effects: switching and persisting the locale, scrolling to a
//! section, and showing waitlist notifications.

pub mod config;
mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::i18n::keys::{self, Key};
use crate::i18n::{Catalog, I18n, Locale, LocaleStore};
use crate::ui::landing::{self, Event as LandingEvent, Section};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::StateFile;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    landing: landing::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Year shown in the footer, fixed at startup.
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("notifications", &self.notifications.visible_count())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            landing: landing::State::default(),
            notifications: notifications::Manager::new(),
            year: landing::current_year(),
        }
    }
}

impl App {
    /// Loads settings, dictionaries and the stored language preference.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();

        // `--i18n-dir` wins over the settings file.
        let dictionary_dir = flags
            .i18n_dir
            .map(PathBuf::from)
            .or_else(|| config.i18n.dictionary_dir.clone());
        let catalog = Catalog::with_overrides(dictionary_dir.as_deref());

        let session_locale = flags.lang.as_deref().and_then(|raw| {
            let locale = Locale::from_language_identifier(raw);
            if locale.is_none() {
                tracing::warn!(lang = raw, "ignoring unsupported --lang value");
            }
            locale
        });
        let store = LocaleStore::new(StateFile::open_default()).with_session_override(session_locale);

        let app = Self::with_parts(I18n::new(catalog, store), config.general.theme_mode, config_warning);
        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = ?app.theme_mode,
            "landing page started"
        );

        (app, Task::none())
    }

    /// Assembles the application from already loaded parts. A startup
    /// warning, if any, is shown as the first toast.
    pub fn with_parts(i18n: I18n, theme_mode: ThemeMode, startup_warning: Option<Key>) -> Self {
        let mut app = Self {
            i18n,
            theme_mode,
            ..Self::default()
        };
        if let Some(key) = startup_warning {
            app.notifications.push(Notification::warning(key));
        }
        app
    }

    fn title(&self) -> String {
        self.i18n.t(keys::APP_TITLE).to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Landing(landing_message) => {
                let event = landing::update(&mut self.landing, landing_message);
                self.handle_landing_event(event)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn handle_landing_event(&mut self, event: LandingEvent) -> Task<Message> {
        match event {
            LandingEvent::None => Task::none(),
            LandingEvent::LanguageSelected(locale) => {
                self.i18n.set_locale(locale);
                Task::none()
            }
            LandingEvent::ScrollTo(section) => scroll_to(section),
            LandingEvent::WaitlistConfirmed(email) => {
                self.notifications
                    .push(Notification::success(keys::WAITLIST_ALERT).with_subject(email));
                Task::none()
            }
            LandingEvent::WaitlistRejected => {
                self.notifications
                    .push(Notification::warning(keys::WAITLIST_INVALID));
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            landing: &self.landing,
            notifications: &self.notifications,
            year: self.year,
        })
    }

    /// Toast manager, exposed for inspection.
    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}

fn scroll_to(section: Section) -> Task<Message> {
    operation::snap_to(
        Id::new(landing::SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: section.anchor(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MemoryStorage;
    use crate::ui::landing::waitlist;
    use crate::ui::notifications::Severity;

    fn app() -> App {
        let store = LocaleStore::new(Box::new(MemoryStorage::new()));
        App::with_parts(I18n::new(Catalog::embedded(), store), ThemeMode::Light, None)
    }

    fn submit_email(app: &mut App, email: &str) {
        let _ = app.update(Message::Landing(landing::Message::Waitlist(
            waitlist::Message::EmailChanged(email.to_string()),
        )));
        let _ = app.update(Message::Landing(landing::Message::Waitlist(
            waitlist::Message::Submit,
        )));
    }

    #[test]
    fn valid_waitlist_submission_shows_one_confirmation() {
        let mut app = app();
        submit_email(&mut app, "user@example.com");

        let shown: Vec<&Notification> = app.notifications().visible().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity(), Severity::Success);
        assert!(shown[0].text(&app.i18n).contains("user@example.com"));
    }

    #[test]
    fn invalid_waitlist_submission_shows_warning_only() {
        let mut app = app();
        submit_email(&mut app, "user@");

        let shown: Vec<&Notification> = app.notifications().visible().collect();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].severity(), Severity::Warning);
        assert_eq!(shown[0].message_key(), keys::WAITLIST_INVALID);
    }

    #[test]
    fn language_selection_switches_translator() {
        let mut app = app();
        let _ = app.update(Message::Landing(landing::Message::LanguageSelected(Locale::Es)));
        assert_eq!(app.i18n.current_locale(), Locale::Es);
        assert_eq!(app.title(), app.i18n.t(keys::APP_TITLE));
    }

    #[test]
    fn startup_warning_becomes_toast() {
        let store = LocaleStore::new(Box::new(MemoryStorage::new()));
        let app = App::with_parts(
            I18n::new(Catalog::embedded(), store),
            ThemeMode::Dark,
            Some(keys::NOTICE_CONFIG_LOAD_ERROR),
        );
        assert_eq!(app.notifications().visible_count(), 1);
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn dismissing_confirmation_clears_it() {
        let mut app = app();
        submit_email(&mut app, "user@example.com");
        let id = app.notifications().visible().next().map(Notification::id);
        let Some(id) = id else {
            panic!("confirmation toast missing");
        };
        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications().has_notifications());
    }
}
