// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let icon_widget = Text::new(severity.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget = Text::new(notification.text(i18n))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [icon] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(icon_widget)
                    .width(Length::Fixed(sizing::ICON_MD))
                    .align_x(alignment::Horizontal::Center),
            )
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Positions toasts in the bottom-right corner, stacked vertically.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    }
    .map(|alpha| {
        iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })
    });

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_only_fills_on_interaction() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }
}
