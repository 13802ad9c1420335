// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::landing;
use crate::ui::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Landing(landing::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toast auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override for this session (e.g. `es`, `id-ID`).
    pub lang: Option<String>,
    /// Optional directory whose `<tag>.json` files replace the embedded
    /// dictionaries.
    pub i18n_dir: Option<String>,
    /// Optional data directory override (for state files).
    /// Takes precedence over `LOWUDER_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `LOWUDER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
