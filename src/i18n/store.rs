// SPDX-License-Identifier: MPL-2.0
//! Active-locale state and its persisted preference.
//!
//! The store is the single owner of the active [`Locale`]. It reads the
//! preference record once at construction and writes it back on every
//! explicit change. Storage problems never escape: a failed read means "no
//! preference", a failed write is logged and the in-memory change stands.

use super::locale::Locale;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;

/// Storage key of the language preference record.
pub const PREFERENCE_KEY: &str = "lowuder:lang";

/// Locale used when no valid preference is available.
pub const DEFAULT_LOCALE: Locale = Locale::Id;

/// Key/value persistence for small client-side preferences.
pub trait PreferenceStorage {
    /// Reads the value stored under `key`, `Ok(None)` when absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Volatile storage, used in tests and as a stand-in for a real backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage for environments with no writable location: nothing is ever
/// found and writes are discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStorage;

impl PreferenceStorage for NoStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}

/// Owns the active locale and persists every explicit change.
pub struct LocaleStore {
    locale: Locale,
    storage: Box<dyn PreferenceStorage>,
}

impl fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleStore")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Box::new(NoStorage))
    }
}

impl LocaleStore {
    /// Builds the store from the persisted preference, or [`DEFAULT_LOCALE`]
    /// when the record is absent, unreadable or names an unknown tag.
    pub fn new(storage: Box<dyn PreferenceStorage>) -> Self {
        let locale = read_preference(storage.as_ref()).unwrap_or(DEFAULT_LOCALE);
        Self { locale, storage }
    }

    /// Applies a locale for this session only, leaving the stored
    /// preference untouched (used for `--lang`).
    #[must_use]
    pub fn with_session_override(mut self, locale: Option<Locale>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }

    /// Returns the active locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Makes `locale` active and persists it.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        match self.storage.set_item(PREFERENCE_KEY, locale.tag()) {
            Ok(()) => tracing::info!(locale = %locale, "locale changed"),
            Err(error) => {
                tracing::warn!(locale = %locale, %error, "failed to persist locale preference");
            }
        }
    }

    /// Releases the backing storage, e.g. to reopen it as a fresh session.
    #[must_use]
    pub fn into_storage(self) -> Box<dyn PreferenceStorage> {
        self.storage
    }
}

fn read_preference(storage: &dyn PreferenceStorage) -> Option<Locale> {
    let raw = match storage.get_item(PREFERENCE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(error) => {
            tracing::debug!(%error, "locale preference unreadable, using default");
            return None;
        }
    };

    match raw.parse() {
        Ok(locale) => Some(locale),
        Err(error) => {
            tracing::debug!(%error, "ignoring stored locale preference");
            None
        }
    }
}
