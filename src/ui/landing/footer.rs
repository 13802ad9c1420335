// SPDX-License-Identifier: MPL-2.0
//! Closing call to action, copyright line and footer links.

use super::components::{self, SEMIBOLD};
use super::{Message, Section, ViewContext};
use crate::i18n::keys;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use chrono::Datelike;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};

/// Copyright notice for `year`.
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} Lowuder")
}

/// The current calendar year in local time.
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let pitch = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(
            Text::new(i18n.t(keys::FOOTER_CTA_TITLE))
                .size(typography::TITLE_MD)
                .font(SEMIBOLD),
        )
        .push(components::muted(i18n.t(keys::FOOTER_CTA_SUB), typography::BODY));

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(format!("🔔 {}", i18n.t(keys::FOOTER_JOIN))).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::ScrollTo(Section::Waitlist)),
        )
        .push(
            button(Text::new(i18n.t(keys::FOOTER_DEMO)).size(typography::BODY))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::outline)
                .on_press(Message::ScrollTo(Section::HowItWorks)),
        );

    let link = |label: &'a str, target: Section| {
        button(Text::new(label).size(typography::CAPTION))
            .padding(0)
            .style(styles::button::link)
            .on_press(Message::ScrollTo(target))
    };

    let bottom = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(copyright(ctx.year))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        )
        .push(Space::new().width(Length::Fill))
        .push(link(i18n.t(keys::FOOTER_PRIVACY), Section::Privacy))
        .push(link(i18n.t(keys::FOOTER_TERMS), Section::Top))
        .push(link(i18n.t(keys::FOOTER_CONTACT), Section::Top));

    let content = Column::new()
        .spacing(spacing::XL)
        .push(
            Row::new()
                .spacing(spacing::XL)
                .align_y(Vertical::Center)
                .push(pitch)
                .push(actions),
        )
        .push(bottom);

    Container::new(components::page_width(content, spacing::XL))
        .width(Length::Fill)
        .style(styles::container::footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(copyright(2031), "© 2031 Lowuder");
    }

    #[test]
    fn current_year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
