// SPDX-License-Identifier: MPL-2.0
//! The closed set of supported display locales.

use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported display locale.
///
/// The set is closed: dictionaries exist for exactly these three tags and
/// nothing else can be selected or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    En,
    Es,
    #[default]
    Id,
}

impl Locale {
    /// All supported locales in switcher order.
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Es, Locale::Id];

    /// Locale whose dictionary defines the key schema.
    pub const CANONICAL: Locale = Locale::En;

    /// Returns the persisted tag (`"en"`, `"es"`, `"id"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Id => "id",
        }
    }

    /// Matches a BCP-47 identifier by its language subtag, so `es-MX` and
    /// `id-ID` select their base dictionaries.
    ///
    /// Only used for explicit user input such as `--lang`; persisted values
    /// must be exact tags.
    pub fn from_language_identifier(raw: &str) -> Option<Locale> {
        let langid: LanguageIdentifier = raw.parse().ok()?;
        langid.language.as_str().parse().ok()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when a tag does not name a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported locale tag: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            "id" => Ok(Locale::Id),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for locale in Locale::ALL {
            assert_eq!(locale.tag().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn default_locale_is_indonesian() {
        assert_eq!(Locale::default(), Locale::Id);
    }

    #[test]
    fn from_str_is_exact() {
        assert!("EN".parse::<Locale>().is_err());
        assert!("en-US".parse::<Locale>().is_err());
        assert!(" es".parse::<Locale>().is_err());
        assert!("".parse::<Locale>().is_err());
    }

    #[test]
    fn language_identifier_matches_base_language() {
        assert_eq!(Locale::from_language_identifier("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_language_identifier("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_language_identifier("id"), Some(Locale::Id));
        assert_eq!(Locale::from_language_identifier("fr"), None);
        assert_eq!(Locale::from_language_identifier("not a tag!"), None);
    }

    #[test]
    fn unknown_locale_reports_tag() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(err.to_string().contains("fr"));
    }
}
