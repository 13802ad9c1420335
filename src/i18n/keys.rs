// SPDX-License-Identifier: MPL-2.0
//! Statically known translation keys.
//!
//! The constants in this module are generated by `build.rs` from the leaf
//! paths of `assets/locales/en.json`. Because [`Key`] can only be built here,
//! a view cannot ask for a string the canonical dictionary does not define:
//! misspelling `HERO_TITLE` is a compile error, not a runtime fallback.
//!
//! ```
//! use lowuder::i18n::keys;
//!
//! assert_eq!(keys::HERO_TITLE.path(), "hero.title");
//! assert_eq!(keys::HOW_1_TITLE.path(), "how.1.title");
//! ```

use std::fmt;

/// A dotted key path that exists in the canonical dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(&'static str);

impl Key {
    /// Returns the dotted path, e.g. `"hero.title"`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

include!(concat!(env!("OUT_DIR"), "/keys.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_paths_are_unique() {
        let unique: HashSet<&str> = ALL.iter().map(|key| key.path()).collect();
        assert_eq!(unique.len(), ALL.len());
    }

    #[test]
    fn camel_case_segments_become_snake_case() {
        assert_eq!(HERO_CTA_WAITLIST.path(), "hero.ctaWaitlist");
        assert_eq!(FOOTER_CTA_TITLE.path(), "footer.ctaTitle");
    }

    #[test]
    fn language_labels_are_generated() {
        assert_eq!(LANG_EN.path(), "lang.en");
        assert_eq!(LANG_ES.path(), "lang.es");
        assert_eq!(LANG_ID.path(), "lang.id");
    }
}
