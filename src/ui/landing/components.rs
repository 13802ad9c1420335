// SPDX-License-Identifier: MPL-2.0
//! Building blocks shared by the landing sections.

use crate::app::config::CONTENT_MAX_WIDTH;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    Border, Element, Font, Length, Theme,
};

/// Semibold variant of the default font, used for headings.
pub const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

/// Centers `content` in a column no wider than the page width, with the
/// standard vertical rhythm between sections.
pub fn section<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    page_width(content, spacing::SECTION)
}

/// Like [`section`] with custom vertical padding.
pub fn page_width<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    vertical_padding: f32,
) -> Element<'a, Message> {
    let inner = Container::new(content)
        .max_width(CONTENT_MAX_WIDTH)
        .width(Length::Fill)
        .padding([vertical_padding, spacing::LG]);

    Container::new(inner)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

/// Section title with an optional muted subtitle.
pub fn section_header<'a, Message: 'a>(title: &'a str, subtitle: Option<&'a str>) -> Column<'a, Message> {
    let mut header = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_LG).font(SEMIBOLD));

    if let Some(subtitle) = subtitle {
        header = header.push(muted(subtitle, typography::BODY_LG));
    }
    header
}

/// Secondary text in the theme's muted color.
pub fn muted<'a>(content: &'a str, size: f32) -> Text<'a> {
    Text::new(content).size(size).style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    })
}

/// Standard bordered card around `content`.
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
}

/// Card title with a leading glyph.
pub fn card_title<'a, Message: 'a>(glyph: &'a str, title: &'a str) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(glyph).size(typography::BODY_LG))
        .push(Text::new(title).size(typography::BODY_LG).font(SEMIBOLD))
}

/// Check-marked bullet line.
pub fn bullet<'a, Message: 'a>(content: &'a str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new("✓").size(typography::BODY_SM).style(|_theme: &Theme| {
            text::Style {
                color: Some(palette::PRIMARY_500),
            }
        }))
        .push(muted(content, typography::BODY_SM))
        .into()
}

/// Outlined pill badge.
pub fn badge<'a, Message: 'a>(content: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(content).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge)
        .into()
}

/// Icon tile shown at the top of feature cards.
pub fn icon_tile<'a, Message: 'a>(glyph: &'a str) -> Element<'a, Message> {
    Container::new(Text::new(glyph).size(typography::TITLE_MD))
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: radius::XL.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Lays `items` out in rows of `columns` equally wide cells. The last row is
/// padded with empty cells so every card keeps the same width.
pub fn grid<'a, Message: 'a>(items: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::MD);
    let mut items = items.into_iter().peekable();

    while items.peek().is_some() {
        let mut row = Row::new().spacing(spacing::MD);
        for _ in 0..columns {
            let cell: Element<'a, Message> = match items.next() {
                Some(item) => item,
                None => Space::new().into(),
            };
            row = row.push(Container::new(cell).width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semibold_keeps_default_family() {
        assert_eq!(SEMIBOLD.family, Font::DEFAULT.family);
        assert_eq!(SEMIBOLD.weight, Weight::Semibold);
    }
}
