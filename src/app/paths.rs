// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`LOWUDER_DATA_DIR`, `LOWUDER_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the app name appended
//!
//! The data directory holds persisted state (the language preference); the
//! config directory holds `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Lowuder";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "LOWUDER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "LOWUDER_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--data-dir` / `--config-dir` flags.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let data_set = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config_set = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data_set && config_set) {
        tracing::warn!("directory overrides were already initialized");
    }
}

/// Returns the application data directory, or `None` when the platform
/// offers no data directory and nothing overrides it.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_DATA_DIR.get().and_then(Clone::clone),
        ENV_DATA_DIR,
        dirs::data_dir,
    )
}

/// Returns the application config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        CLI_CONFIG_DIR.get().and_then(Clone::clone),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

fn resolve(
    override_path: Option<PathBuf>,
    cli_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path.or(cli_path) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-wide; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/data/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path.clone())
        );
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/test/data/dir")));

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_uses_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_beats_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn platform_default_appends_app_name() {
        let resolved = resolve(None, None, "LOWUDER_TEST_UNSET_VAR", || {
            Some(PathBuf::from("/platform"))
        });
        assert_eq!(resolved, Some(PathBuf::from("/platform").join(APP_NAME)));
    }

    #[test]
    fn missing_platform_dir_yields_none() {
        assert_eq!(resolve(None, None, "LOWUDER_TEST_UNSET_VAR", || None), None);
    }
}
