// SPDX-License-Identifier: MPL-2.0
//! Hero band with the mock phone card, followed by the "designed for" strip.

use super::components::{self, SEMIBOLD};
use super::{Message, Section, ViewContext};
use crate::i18n::keys;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let badges = Row::new()
        .spacing(spacing::SM)
        .push(components::badge(i18n.t(keys::HERO_BADGE1)))
        .push(components::badge(i18n.t(keys::HERO_BADGE2)))
        .push(components::badge(i18n.t(keys::HERO_BADGE3)));

    let ctas = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(format!("🔔 {}", i18n.t(keys::HERO_CTA_WAITLIST))).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::ScrollTo(Section::Waitlist)),
        )
        .push(
            button(Text::new(i18n.t(keys::HERO_CTA_DEMO)).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline)
                .on_press(Message::ScrollTo(Section::HowItWorks)),
        );

    let pitch = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(
            Text::new(i18n.t(keys::HERO_TITLE))
                .size(typography::DISPLAY)
                .font(SEMIBOLD),
        )
        .push(components::muted(i18n.t(keys::HERO_DESC), typography::BODY_LG))
        .push(badges)
        .push(
            Column::new()
                .spacing(spacing::SM)
                .push(ctas)
                .push(components::muted(i18n.t(keys::HERO_NOTE), typography::CAPTION)),
        );

    let layout = Row::new()
        .spacing(spacing::XXL)
        .align_y(Vertical::Center)
        .push(pitch)
        .push(mock_card(ctx));

    Container::new(components::page_width(layout, spacing::XXL))
        .width(Length::Fill)
        .style(styles::container::hero)
        .into()
}

/// Phone-shaped preview of a report being composed.
fn mock_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let preview = Container::new(components::muted(i18n.t(keys::MOCK_PREVIEW), typography::BODY))
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::MOCK_PREVIEW_HEIGHT))
        .align_x(Horizontal::Center)
        .style(styles::container::card);

    let line = |glyph: &'a str, label: &'a str| -> Element<'a, Message> {
        Row::new()
            .spacing(spacing::XS)
            .push(Text::new(glyph).size(typography::BODY))
            .push(Text::new(label).size(typography::BODY))
            .into()
    };

    // The mock button is decorative and has no action.
    let send = button(
        Container::new(Text::new(i18n.t(keys::MOCK_BUTTON)).size(typography::BODY))
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary);

    let screen = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(preview)
            .push(line("🔒", i18n.t(keys::MOCK_GEOJITTER)))
            .push(line("🧠", i18n.t(keys::MOCK_MODERATION)))
            .push(line("➤", i18n.t(keys::MOCK_STATUS)))
            .push(send),
    )
    .padding(spacing::MD)
    .style(styles::container::muted);

    let card = Column::new()
        .spacing(spacing::SM)
        .push(components::card_title("📞", i18n.t(keys::MOCK_TITLE)))
        .push(components::muted(i18n.t(keys::MOCK_DESC), typography::BODY_SM))
        .push(screen);

    components::card(card)
        .width(Length::Fixed(sizing::MOCK_CARD_WIDTH))
        .style(styles::container::card_highlighted)
        .into()
}

/// "Designed for" strip listing the target communities.
pub fn social_proof<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let strip = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(components::muted(i18n.t(keys::DESIGNED_TITLE), typography::CAPTION).font(SEMIBOLD))
        .push(components::badge(i18n.t(keys::DESIGNED_RT)))
        .push(components::badge(i18n.t(keys::DESIGNED_CAMPUS)))
        .push(components::badge(i18n.t(keys::DESIGNED_VOLUNTEERS)))
        .push(components::badge(i18n.t(keys::DESIGNED_EVENTS)));

    components::page_width(strip, spacing::MD)
}
