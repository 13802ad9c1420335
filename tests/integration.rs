// SPDX-License-Identifier: MPL-2.0
use lowuder::app::config::{self, Config, GeneralConfig, I18nConfig};
use lowuder::app::persisted_state::StateFile;
use lowuder::app::{App, Message};
use lowuder::i18n::keys;
use lowuder::i18n::{Catalog, I18n, Locale, LocaleStore, MemoryStorage, PREFERENCE_KEY};
use lowuder::ui::landing::{self, waitlist};
use lowuder::ui::notifications::Severity;
use lowuder::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

fn i18n_with(store: LocaleStore) -> I18n {
    I18n::new(Catalog::embedded(), store)
}

#[test]
fn language_choice_survives_restart() {
    let dir = tempdir().expect("failed to create temp dir");

    let mut first = i18n_with(LocaleStore::new(Box::new(StateFile::open_in(dir.path()))));
    assert_eq!(first.current_locale(), Locale::Id);
    first.set_locale(Locale::Es);
    let spanish_title = first.t(keys::HERO_TITLE).to_string();
    drop(first);

    let second = i18n_with(LocaleStore::new(Box::new(StateFile::open_in(dir.path()))));
    assert_eq!(second.current_locale(), Locale::Es);
    assert_eq!(second.t(keys::HERO_TITLE), spanish_title);
}

#[test]
fn every_locale_round_trips_through_the_state_file() {
    let dir = tempdir().expect("failed to create temp dir");
    for locale in Locale::ALL {
        let mut store = LocaleStore::new(Box::new(StateFile::open_in(dir.path())));
        store.set_locale(locale);
        assert_eq!(store.locale(), locale);

        let reopened = LocaleStore::new(Box::new(StateFile::open_in(dir.path())));
        assert_eq!(reopened.locale(), locale);
    }
}

#[test]
fn session_override_is_not_persisted() {
    let dir = tempdir().expect("failed to create temp dir");

    let store = LocaleStore::new(Box::new(StateFile::open_in(dir.path())))
        .with_session_override(Some(Locale::En));
    assert_eq!(store.locale(), Locale::En);
    drop(store);

    let state = StateFile::open_in(dir.path());
    assert!(!state.path().exists());
    let reopened = LocaleStore::new(Box::new(state));
    assert_eq!(reopened.locale(), Locale::Id);
}

#[test]
fn garbage_state_file_falls_back_to_default_locale() {
    let dir = tempdir().expect("failed to create temp dir");
    let state = StateFile::open_in(dir.path());
    fs::write(state.path(), [0xff, 0x00, 0x13]).expect("write garbage");

    let store = LocaleStore::new(Box::new(state));
    assert_eq!(store.locale(), Locale::Id);
}

#[test]
fn unknown_paths_resolve_to_themselves_in_every_locale() {
    let mut i18n = i18n_with(LocaleStore::new(Box::new(MemoryStorage::new())));
    for locale in Locale::ALL {
        i18n.set_locale(locale);
        assert_eq!(i18n.tr("nonexistent.key"), "nonexistent.key");
        assert_eq!(i18n.tr("hero"), "hero");
        assert_eq!(i18n.tr("hero.title.extra"), "hero.title.extra");
    }
}

#[test]
fn hero_title_differs_between_english_and_indonesian() {
    let mut i18n = i18n_with(LocaleStore::new(Box::new(MemoryStorage::new())));
    i18n.set_locale(Locale::En);
    let english = i18n.t(keys::HERO_TITLE).to_string();
    i18n.set_locale(Locale::Id);
    assert_ne!(i18n.t(keys::HERO_TITLE), english);
}

#[test]
fn shipped_dictionaries_define_every_key() {
    let catalog = Catalog::embedded();
    assert!(catalog.parity_reports().is_empty());

    let mut i18n = i18n_with(LocaleStore::new(Box::new(MemoryStorage::new())));
    for locale in Locale::ALL {
        i18n.set_locale(locale);
        for key in keys::ALL {
            let value = i18n.t(*key);
            assert!(!value.is_empty(), "{locale}: `{key}` is empty");
            assert_ne!(value, key.path(), "{locale}: `{key}` is untranslated");
        }
    }
}

#[test]
fn dictionary_override_replaces_embedded_locale() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(
        dir.path().join("es.json"),
        r#"{ "hero": { "title": "Título de prueba" } }"#,
    )
    .expect("write override");
    fs::write(dir.path().join("id.json"), "{ invalid json").expect("write broken override");

    let catalog = Catalog::with_overrides(Some(dir.path()));
    assert_eq!(catalog.lookup(Locale::Es, "hero.title"), "Título de prueba");
    // The partial override is reported, the broken one is ignored.
    assert!(catalog
        .parity_reports()
        .iter()
        .any(|(locale, report)| *locale == Locale::Es && !report.missing.is_empty()));
    assert_ne!(catalog.lookup(Locale::Id, "hero.title"), "hero.title");
}

#[test]
fn waitlist_submission_confirms_once_with_email() {
    let store = LocaleStore::new(Box::new(MemoryStorage::new()));
    let mut app = App::with_parts(i18n_with(store), ThemeMode::Light, None);

    let _ = app.update(Message::Landing(landing::Message::Waitlist(
        waitlist::Message::EmailChanged("user@example.com".into()),
    )));
    let _ = app.update(Message::Landing(landing::Message::Waitlist(
        waitlist::Message::Submit,
    )));

    let toasts: Vec<_> = app.notifications().visible().collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity(), Severity::Success);
    let text = toasts[0].text(&app.i18n);
    assert_eq!(
        text,
        format!("{} user@example.com.", app.i18n.t(keys::WAITLIST_ALERT))
    );
}

#[test]
fn settings_file_round_trip_and_invalid_fallback() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("nested").join(config::CONFIG_FILE);

    let written = Config {
        general: GeneralConfig {
            theme_mode: ThemeMode::Dark,
        },
        i18n: I18nConfig {
            dictionary_dir: Some(dir.path().join("dicts")),
        },
    };
    config::save_to_path(&written, &path).expect("save settings");
    let loaded = config::load_from_path(&path).expect("load settings");
    assert_eq!(loaded, written);

    fs::write(&path, "[general\ntheme_mode = ").expect("write broken settings");
    let (fallback, warning) = config::load_with_override(Some(dir.path().join("nested")));
    assert_eq!(fallback, Config::default());
    assert_eq!(warning, Some(keys::NOTICE_CONFIG_LOAD_ERROR));
}

#[test]
fn preference_key_is_namespaced() {
    assert_eq!(PREFERENCE_KEY, "lowuder:lang");
}
