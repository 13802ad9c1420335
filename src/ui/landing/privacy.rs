// SPDX-License-Identifier: MPL-2.0
//! Privacy and safety commitments.

use super::components;
use super::{Message, ViewContext};
use crate::app::config::GRID_COLUMNS;
use crate::i18n::keys::{self, Key};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::Column;
use iced::Element;

struct Commitment {
    glyph: &'static str,
    title: Key,
    desc: Key,
    bullets: [Key; 3],
}

const COMMITMENTS: [Commitment; 3] = [
    Commitment {
        glyph: "🔒",
        title: keys::PRIVACY_MIN_TITLE,
        desc: keys::PRIVACY_MIN_DESC,
        bullets: [keys::PRIVACY_MIN_B1, keys::PRIVACY_MIN_B2, keys::PRIVACY_MIN_B3],
    },
    Commitment {
        glyph: "🛡",
        title: keys::PRIVACY_ABUSE_TITLE,
        desc: keys::PRIVACY_ABUSE_DESC,
        bullets: [
            keys::PRIVACY_ABUSE_B1,
            keys::PRIVACY_ABUSE_B2,
            keys::PRIVACY_ABUSE_B3,
        ],
    },
    Commitment {
        glyph: "📈",
        title: keys::PRIVACY_TRANSP_TITLE,
        desc: keys::PRIVACY_TRANSP_DESC,
        bullets: [
            keys::PRIVACY_TRANSP_B1,
            keys::PRIVACY_TRANSP_B2,
            keys::PRIVACY_TRANSP_B3,
        ],
    },
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let cards: Vec<Element<'a, Message>> = COMMITMENTS
        .iter()
        .map(|commitment| {
            let bullets = commitment
                .bullets
                .iter()
                .fold(Column::new().spacing(spacing::XS), |column, key| {
                    column.push(components::bullet(i18n.t(*key)))
                });

            components::card(
                Column::new()
                    .spacing(spacing::SM)
                    .push(components::card_title(commitment.glyph, i18n.t(commitment.title)))
                    .push(components::muted(i18n.t(commitment.desc), typography::BODY))
                    .push(bullets),
            )
            .into()
        })
        .collect();

    let content = Column::new()
        .spacing(spacing::XL)
        .push(components::section_header(
            i18n.t(keys::PRIVACY_TITLE),
            Some(i18n.t(keys::PRIVACY_SUBTITLE)),
        ))
        .push(components::grid(cards, GRID_COLUMNS));

    components::section(content)
}
