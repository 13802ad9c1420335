// SPDX-License-Identifier: MPL-2.0
//! `lowuder` is the Lowuder landing page built with the Iced GUI framework.
//!
//! The page is a single scrollable window available in English, Spanish and
//! Indonesian. The localization core ([`i18n`]) holds the active locale,
//! persists the user's choice across restarts, and resolves dotted key paths
//! against embedded JSON dictionaries.

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
