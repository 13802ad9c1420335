// SPDX-License-Identifier: MPL-2.0
//! Dictionary loading and string lookup for the active locale.

use super::dictionary::{check_schema, Dictionary, ParityReport};
use super::keys::{self, Key};
use super::locale::Locale;
use super::store::LocaleStore;
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/locales/"]
struct Asset;

/// The shipped dictionaries, one per [`Locale`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dictionaries: HashMap<Locale, Dictionary>,
}

impl Catalog {
    /// Loads the dictionaries embedded in the binary.
    pub fn embedded() -> Self {
        let mut dictionaries = HashMap::new();
        for locale in Locale::ALL {
            let file = format!("{}.json", locale.tag());
            let Some(content) = Asset::get(&file) else {
                tracing::error!(%locale, "embedded dictionary missing");
                continue;
            };
            match Dictionary::from_bytes(content.data.as_ref()) {
                Ok(dict) => {
                    dictionaries.insert(locale, dict);
                }
                Err(error) => tracing::error!(%locale, %error, "embedded dictionary invalid"),
            }
        }
        Self { dictionaries }
    }

    /// Loads the embedded dictionaries, then replaces each one for which
    /// `dir` holds a valid `<tag>.json`. Unreadable or invalid files are
    /// skipped with a warning.
    pub fn with_overrides(dir: Option<&Path>) -> Self {
        let mut catalog = Self::embedded();
        let Some(dir) = dir else {
            return catalog;
        };

        for locale in Locale::ALL {
            let path = dir.join(format!("{}.json", locale.tag()));
            if !path.exists() {
                continue;
            }
            let loaded = fs::read(&path)
                .map_err(crate::error::Error::from)
                .and_then(|content| Dictionary::from_bytes(&content));
            match loaded {
                Ok(dict) => {
                    tracing::info!(%locale, path = %path.display(), "using dictionary override");
                    catalog.dictionaries.insert(locale, dict);
                }
                Err(error) => tracing::warn!(
                    %locale,
                    path = %path.display(),
                    %error,
                    "ignoring dictionary override"
                ),
            }
        }
        catalog
    }

    /// Builds a catalog from explicit dictionaries.
    pub fn from_dictionaries(dictionaries: impl IntoIterator<Item = (Locale, Dictionary)>) -> Self {
        Self {
            dictionaries: dictionaries.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn dictionary(&self, locale: Locale) -> Option<&Dictionary> {
        self.dictionaries.get(&locale)
    }

    /// Compares every loaded dictionary, the canonical one included, against
    /// the generated key table in [`keys::ALL`].
    ///
    /// Only dictionaries with gaps are returned. A locale with no dictionary
    /// at all reports every key as missing.
    #[must_use]
    pub fn parity_reports(&self) -> Vec<(Locale, ParityReport)> {
        let schema: BTreeSet<&str> = keys::ALL.iter().map(|key| key.path()).collect();
        let empty = Dictionary::default();

        Locale::ALL
            .into_iter()
            .map(|locale| {
                let candidate = self.dictionary(locale).unwrap_or(&empty);
                (locale, check_schema(&schema, candidate))
            })
            .filter(|(_, report)| !report.is_clean())
            .collect()
    }

    /// Resolves `path` in `locale`'s dictionary, falling back to `path`.
    #[must_use]
    pub fn lookup<'a>(&'a self, locale: Locale, path: &'a str) -> &'a str {
        self.dictionary(locale)
            .and_then(|dict| dict.resolve(path))
            .unwrap_or(path)
    }
}

/// Localization context handed to every view: the shipped dictionaries plus
/// the store that selects among them.
#[derive(Debug, Default)]
pub struct I18n {
    catalog: Catalog,
    store: LocaleStore,
}

impl I18n {
    /// Combines a catalog and a locale store, logging any dictionary that
    /// does not match the generated key table.
    pub fn new(catalog: Catalog, store: LocaleStore) -> Self {
        for (locale, report) in catalog.parity_reports() {
            for path in &report.missing {
                tracing::warn!(%locale, key = %path, "dictionary is missing key");
            }
            for path in &report.extra {
                tracing::warn!(%locale, key = %path, "dictionary has key outside the generated key table");
            }
        }
        tracing::debug!(locale = %store.locale(), "localization ready");

        Self { catalog, store }
    }

    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.store.locale()
    }

    /// Switches and persists the active locale.
    pub fn set_locale(&mut self, locale: Locale) {
        self.store.set_locale(locale);
    }

    /// Resolves a generated key for the active locale.
    #[must_use]
    pub fn t(&self, key: Key) -> &str {
        self.catalog.lookup(self.current_locale(), key.path())
    }

    /// Resolves an arbitrary dotted path for the active locale.
    ///
    /// Missing paths, paths through a leaf, and paths ending on a mapping
    /// all return `path` unchanged.
    #[must_use]
    pub fn tr<'a>(&'a self, path: &'a str) -> &'a str {
        self.catalog.lookup(self.current_locale(), path)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
