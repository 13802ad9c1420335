// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the landing page.
//!
//! Display strings live in one JSON dictionary per supported locale,
//! embedded at build time. Views resolve them through [`I18n`] using the
//! generated constants in [`keys`].
//!
//! # Features
//!
//! - Closed set of locales (`en`, `es`, `id`), Indonesian by default
//! - Persisted language preference that survives restarts
//! - Dotted key-path lookup with fallback to the key itself
//! - Build-time and startup checks that every dictionary matches the
//!   canonical English key set

pub mod dictionary;
pub mod keys;
pub mod locale;
pub mod store;
pub mod translator;

pub use dictionary::{check_parity, check_schema, Dictionary, ParityReport};
pub use locale::{Locale, UnknownLocale};
pub use store::{LocaleStore, MemoryStorage, NoStorage, PreferenceStorage, PREFERENCE_KEY};
pub use translator::{Catalog, I18n};
