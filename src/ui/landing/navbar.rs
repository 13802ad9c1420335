// SPDX-License-Identifier: MPL-2.0
//! Top bar: brand, section links, language picker and calls to action.
//!
//! The navbar stays outside the scrollable page so it is always visible.

use super::components::SEMIBOLD;
use super::{Message, Section, ViewContext};
use crate::i18n::keys;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::language_switch;
use crate::ui::styles;
use iced::widget::{button, container, Container, Row, Space, Text};
use iced::{alignment::Vertical, Border, Element, Length, Theme};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let logo = Container::new(Text::new("◎").size(typography::TITLE_MD))
        .center_x(Length::Fixed(sizing::ICON_LG))
        .center_y(Length::Fixed(sizing::ICON_LG))
        .style(|theme: &Theme| container::Style {
            border: Border {
                color: theme.extended_palette().background.strong.color,
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..Default::default()
        });

    let beta = Container::new(Text::new("Beta").size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(styles::container::badge_secondary);

    let brand = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(logo)
            .push(Text::new("Lowuder").size(typography::TITLE_MD).font(SEMIBOLD))
            .push(beta),
    )
    .padding(0)
    .style(styles::button::link)
    .on_press(Message::ScrollTo(Section::Top));

    let links = Section::NAV.into_iter().fold(
        Row::new().spacing(spacing::LG).align_y(Vertical::Center),
        |row, section| {
            let label = section.nav_key().map_or("", |key| i18n.t(key));
            row.push(
                button(Text::new(label).size(typography::BODY))
                    .padding(0)
                    .style(styles::button::link)
                    .on_press(Message::ScrollTo(section)),
            )
        },
    );

    let demo = button(Text::new(i18n.t(keys::NAV_DEMO)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::outline)
        .on_press(Message::ScrollTo(Section::HowItWorks));

    let join = button(Text::new(i18n.t(keys::NAV_WAITLIST)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::ScrollTo(Section::Waitlist));

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(Space::new().width(Length::Fill))
        .push(language_switch::view(i18n).map(Message::LanguageSelected))
        .push(demo)
        .push(join);

    Container::new(bar)
        .width(Length::Fill)
        .center_y(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .style(styles::container::navbar)
        .into()
}
