// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! keeps its own state, turns messages into events in `update`, and renders
//! from a `ViewContext` that borrows the translator.
//!
//! # Screens
//!
//! - [`landing`] - The scrollable landing page and its sections
//!
//! # Shared Infrastructure
//!
//! - [`language_switch`] - Locale picker used by the navbar
//! - [`notifications`] - Toast notifications with auto-dismiss
//! - [`design_tokens`] - Colors, spacing, sizing and typography constants
//! - [`styles`] - Button and container styles built on the tokens
//! - [`theming`] - Light, dark and system theme selection

pub mod design_tokens;
pub mod landing;
pub mod language_switch;
pub mod notifications;
pub mod styles;
pub mod theming;
