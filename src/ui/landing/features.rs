// SPDX-License-Identifier: MPL-2.0
//! Feature cards.

use super::components::{self, SEMIBOLD};
use super::{Message, ViewContext};
use crate::app::config::GRID_COLUMNS;
use crate::i18n::keys::{self, Key};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

/// Glyph, title and description of each card, in display order.
const FEATURES: [(&str, Key, Key); 6] = [
    ("🛡", keys::FEATURES_PRIVACY_TITLE, keys::FEATURES_PRIVACY_DESC),
    ("🧠", keys::FEATURES_AI_TITLE, keys::FEATURES_AI_DESC),
    ("🗺", keys::FEATURES_HEATMAP_TITLE, keys::FEATURES_HEATMAP_DESC),
    ("🔔", keys::FEATURES_SMS_TITLE, keys::FEATURES_SMS_DESC),
    ("👥", keys::FEATURES_CONTACTS_TITLE, keys::FEATURES_CONTACTS_DESC),
    ("☰", keys::FEATURES_AUDIT_TITLE, keys::FEATURES_AUDIT_DESC),
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let cards: Vec<Element<'a, Message>> = FEATURES
        .iter()
        .map(|&(glyph, title, desc)| {
            components::card(
                Column::new()
                    .spacing(spacing::SM)
                    .push(components::icon_tile(glyph))
                    .push(Text::new(i18n.t(title)).size(typography::BODY_LG).font(SEMIBOLD))
                    .push(components::muted(i18n.t(desc), typography::BODY)),
            )
            .into()
        })
        .collect();

    let content = Column::new()
        .spacing(spacing::XL)
        .push(components::section_header(
            i18n.t(keys::FEATURES_TITLE),
            Some(i18n.t(keys::FEATURES_SUBTITLE)),
        ))
        .push(components::grid(cards, GRID_COLUMNS));

    components::section(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_card_pairs_title_with_its_description() {
        for (_, title, desc) in FEATURES {
            let title_group = title.path().trim_end_matches(".title");
            let desc_group = desc.path().trim_end_matches(".desc");
            assert_eq!(title_group, desc_group);
        }
    }
}
