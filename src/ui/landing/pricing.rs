// SPDX-License-Identifier: MPL-2.0
//! Pricing tiers.

use super::components::{self, SEMIBOLD};
use super::{Message, Section, ViewContext};
use crate::app::config::GRID_COLUMNS;
use crate::i18n::keys::{self, Key};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

struct Tier {
    name: Key,
    desc: Key,
    price: Key,
    /// Suffix after the price, e.g. "/month".
    per: Option<Key>,
    bullets: [Key; 3],
    cta: Key,
    highlighted: bool,
    primary_cta: bool,
}

const TIERS: [Tier; 3] = [
    Tier {
        name: keys::PRICING_STARTER_NAME,
        desc: keys::PRICING_STARTER_DESC,
        price: keys::PRICING_STARTER_PRICE,
        per: None,
        bullets: [
            keys::PRICING_STARTER_B1,
            keys::PRICING_STARTER_B2,
            keys::PRICING_STARTER_B3,
        ],
        cta: keys::PRICING_STARTER_CTA,
        highlighted: true,
        primary_cta: false,
    },
    Tier {
        name: keys::PRICING_COMM_NAME,
        desc: keys::PRICING_COMM_DESC,
        price: keys::PRICING_COMM_PRICE,
        per: Some(keys::PRICING_COMM_PER),
        bullets: [
            keys::PRICING_COMM_B1,
            keys::PRICING_COMM_B2,
            keys::PRICING_COMM_B3,
        ],
        cta: keys::PRICING_COMM_CTA,
        highlighted: false,
        primary_cta: true,
    },
    Tier {
        name: keys::PRICING_INST_NAME,
        desc: keys::PRICING_INST_DESC,
        price: keys::PRICING_INST_PRICE,
        per: None,
        bullets: [
            keys::PRICING_INST_B1,
            keys::PRICING_INST_B2,
            keys::PRICING_INST_B3,
        ],
        cta: keys::PRICING_INST_CTA,
        highlighted: false,
        primary_cta: false,
    },
];

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let cards: Vec<Element<'a, Message>> = TIERS.iter().map(|tier| tier_card(ctx, tier)).collect();

    let content = Column::new()
        .spacing(spacing::XL)
        .push(components::section_header(
            i18n.t(keys::PRICING_TITLE),
            Some(i18n.t(keys::PRICING_SUBTITLE)),
        ))
        .push(components::grid(cards, GRID_COLUMNS));

    components::section(content)
}

fn tier_card<'a>(ctx: &ViewContext<'a>, tier: &Tier) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let mut price = Row::new().align_y(Vertical::Bottom).push(
        Text::new(i18n.t(tier.price))
            .size(typography::TITLE_LG)
            .font(SEMIBOLD),
    );
    if let Some(per) = tier.per {
        price = price.push(components::muted(i18n.t(per), typography::BODY));
    }

    let bullets = tier
        .bullets
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, key| {
            column.push(components::bullet(i18n.t(*key)))
        });

    // Every tier is still pre-launch, so each call to action leads to the waitlist.
    let cta = button(
        Container::new(Text::new(i18n.t(tier.cta)).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(if tier.primary_cta {
        styles::button::primary
    } else {
        styles::button::outline
    })
    .on_press(Message::ScrollTo(Section::Waitlist));

    let body = Column::new()
        .spacing(spacing::MD)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(i18n.t(tier.name)).size(typography::TITLE_SM).font(SEMIBOLD))
                .push(components::muted(i18n.t(tier.desc), typography::BODY)),
        )
        .push(price)
        .push(bullets)
        .push(cta);

    let card = components::card(body);
    if tier.highlighted {
        card.style(styles::container::card_highlighted).into()
    } else {
        card.into()
    }
}
