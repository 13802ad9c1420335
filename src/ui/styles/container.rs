// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Sticky navbar surface.
///
/// The color is derived from the active Iced `Theme` background with a slight
/// transparency and a bottom hairline, so it reads in both light and dark
/// modes.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Standard card: raised surface with a thin border.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::SM,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Card with a brand-tinted border, used for the highlighted pricing tier.
pub fn card_highlighted(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
            width: border::WIDTH_MD,
            radius: radius::XL.into(),
        },
        shadow: shadow::MD,
        ..card(theme)
    }
}

/// Muted inset area (mock phone screen, flow diagram canvas, FAQ answers).
pub fn muted(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Pill-shaped outlined badge.
pub fn badge(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Filled badge in the secondary brand tint ("Beta").
pub fn badge_secondary(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_100)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::PRIMARY_600),
        ..Default::default()
    }
}

/// Hero band with a faint brand wash.
pub fn hero(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let tint = palette::PRIMARY_100;
    let mix = |a: f32, b: f32| a * 0.6 + b * 0.4;

    container::Style {
        background: Some(Background::Color(Color::from_rgb(
            mix(base.r, tint.r),
            mix(base.g, tint.g),
            mix(base.b, tint.b),
        ))),
        ..Default::default()
    }
}

/// Numbered circle in front of each "how it works" step.
pub fn step_number(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Footer band separated from the page by a hairline.
pub fn footer(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}
