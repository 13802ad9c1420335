// SPDX-License-Identifier: MPL-2.0
//! Small key/value state persisted across sessions in CBOR format.
//!
//! This is where the language preference record lives. It is kept apart
//! from user-editable settings (`settings.toml`) and stored as a flat CBOR
//! map of string to string in the data directory.
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to [`StateFile::open_in`]
//! 2. `LOWUDER_DATA_DIR` environment variable / `--data-dir`
//! 3. Platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use crate::i18n::store::{NoStorage, PreferenceStorage};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// File-backed [`PreferenceStorage`].
///
/// Every read and write goes to disk so that two handles on the same
/// directory observe each other's changes.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Opens the state file in the resolved data directory.
    ///
    /// Returns [`NoStorage`] when no data directory can be determined, so
    /// callers always get a usable backend.
    pub fn open_default() -> Box<dyn PreferenceStorage> {
        match paths::get_app_data_dir() {
            Some(dir) => Box::new(Self::open_in(&dir)),
            None => {
                tracing::warn!("no data directory available, preferences will not persist");
                Box::new(NoStorage)
            }
        }
    }

    /// Opens the state file inside `dir`. Nothing is created until the
    /// first write.
    #[must_use]
    pub fn open_in(dir: &Path) -> Self {
        Self {
            path: dir.join(STATE_FILE),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        decode(BufReader::new(fs::File::open(&self.path)?))
    }

    fn write_all(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(&self.path)?);
        ciborium::into_writer(items, writer)?;
        Ok(())
    }
}

/// Decodes a CBOR string map. Read failures surface as [`Error::Io`], bad
/// content as [`Error::State`].
fn decode(reader: impl Read) -> Result<BTreeMap<String, String>> {
    ciborium::from_reader(reader).map_err(|error| match error {
        ciborium::de::Error::Io(io) => Error::from(io),
        other => Error::from(other),
    })
}

impl PreferenceStorage for StateFile {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = match self.read_all() {
            Ok(items) => items,
            // Content that is not a CBOR string map is replaced so later
            // writes are not blocked. I/O failures keep the file as is.
            Err(Error::State(error)) => {
                tracing::warn!(path = %self.path.display(), %error, "replacing unreadable state file");
                BTreeMap::new()
            }
            Err(error) => return Err(error),
        };
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, LocaleStore, PREFERENCE_KEY};
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let state = StateFile::open_in(dir.path());
        assert_eq!(state.get_item(PREFERENCE_KEY).unwrap(), None);
        assert!(!state.path().exists());
    }

    #[test]
    fn set_item_creates_parent_directories() {
        let dir = tempdir().expect("failed to create temp dir");
        let nested = dir.path().join("deep").join("path");
        let mut state = StateFile::open_in(&nested);

        state.set_item(PREFERENCE_KEY, "es").expect("write succeeds");
        assert!(state.path().exists());
    }

    #[test]
    fn items_round_trip_and_coexist() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut state = StateFile::open_in(dir.path());

        state.set_item(PREFERENCE_KEY, "en").expect("write succeeds");
        state.set_item("lowuder:other", "value").expect("write succeeds");

        let reopened = StateFile::open_in(dir.path());
        assert_eq!(reopened.get_item(PREFERENCE_KEY).unwrap(), Some("en".into()));
        assert_eq!(reopened.get_item("lowuder:other").unwrap(), Some("value".into()));
    }

    #[test]
    fn corrupt_file_is_an_error_on_read_and_replaced_on_write() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut state = StateFile::open_in(dir.path());
        fs::write(state.path(), [0xff, 0x13, 0x37]).expect("write garbage");

        assert!(state.get_item(PREFERENCE_KEY).is_err());

        state.set_item(PREFERENCE_KEY, "id").expect("write replaces garbage");
        assert_eq!(state.get_item(PREFERENCE_KEY).unwrap(), Some("id".into()));
    }

    #[test]
    fn locale_survives_restart_on_disk() {
        let dir = tempdir().expect("failed to create temp dir");

        let mut store = LocaleStore::new(Box::new(StateFile::open_in(dir.path())));
        store.set_locale(Locale::Es);
        drop(store);

        let reopened = LocaleStore::new(Box::new(StateFile::open_in(dir.path())));
        assert_eq!(reopened.locale(), Locale::Es);
    }

    #[test]
    fn corrupt_file_falls_back_to_default_locale() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::write(dir.path().join(STATE_FILE), b"not cbor at all").expect("write garbage");

        let store = LocaleStore::new(Box::new(StateFile::open_in(dir.path())));
        assert_eq!(store.locale(), Locale::default());
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device went away"))
        }
    }

    #[test]
    fn decode_separates_io_failures_from_bad_content() {
        assert!(matches!(decode(FailingReader), Err(Error::Io(_))));
        assert!(matches!(decode(&[0xff, 0x00, 0x13][..]), Err(Error::State(_))));
    }

    #[test]
    fn unreadable_state_path_is_an_error_not_a_reset() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut state = StateFile::open_in(dir.path());
        // A directory where the file should be cannot be read as a file.
        fs::create_dir(state.path()).expect("create directory in place of file");

        let err = state.set_item(PREFERENCE_KEY, "es").unwrap_err();
        assert!(matches!(err, Error::Io(_)), "unexpected error: {err}");
        assert!(state.path().is_dir());
    }
}
