// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button for primary calls to action.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            })),
            text_color: WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Bordered button on the page background, for secondary calls to action.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let text_color = palette.background.base.text;

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };
    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette.background.strong.color,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button, used for navbar and footer links.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base.text;
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: opacity::OVERLAY_HOVER,
            ..base
        },
        _ => base,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
