// SPDX-License-Identifier: MPL-2.0
//! Language picker shown in the navbar.
//!
//! Offers exactly the supported locales, each labelled in the active
//! language, and emits the chosen [`Locale`].

use crate::i18n::keys::{self, Key};
use crate::i18n::{I18n, Locale};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{pick_list, Row, Text};
use iced::{alignment::Vertical, Element, Length};
use std::fmt;

/// A pick-list entry pairing a locale with its translated label.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageOption<'a> {
    pub locale: Locale,
    label: &'a str,
}

impl fmt::Display for LanguageOption<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Dictionary key of a locale's display name.
#[must_use]
pub fn label_key(locale: Locale) -> Key {
    match locale {
        Locale::En => keys::LANG_EN,
        Locale::Es => keys::LANG_ES,
        Locale::Id => keys::LANG_ID,
    }
}

/// Builds one option per supported locale, in switcher order.
#[must_use]
pub fn options(i18n: &I18n) -> Vec<LanguageOption<'_>> {
    Locale::ALL
        .into_iter()
        .map(|locale| LanguageOption {
            locale,
            label: i18n.t(label_key(locale)),
        })
        .collect()
}

/// Renders the labelled picker. The element yields the selected locale.
pub fn view(i18n: &I18n) -> Element<'_, Locale> {
    let options = options(i18n);
    let current = i18n.current_locale();
    let selected = options.iter().find(|opt| opt.locale == current).cloned();

    let picker = pick_list(options, selected, |opt: LanguageOption<'_>| opt.locale)
        .placeholder(i18n.t(keys::LANG_LABEL))
        .text_size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::LANGUAGE_PICKER_WIDTH));

    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.t(keys::LANG_LABEL)).size(typography::CAPTION))
        .push(picker)
        .into()
}
