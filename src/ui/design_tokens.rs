// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing and size used by the landing page comes from this module.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use lowuder::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let muted_card = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::PRIMARY_500
};

let gap = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand colors (teal scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.96, 0.94);
    pub const PRIMARY_400: Color = Color::from_rgb(0.2, 0.72, 0.65);
    pub const PRIMARY_500: Color = Color::from_rgb(0.06, 0.6, 0.54);
    pub const PRIMARY_600: Color = Color::from_rgb(0.05, 0.5, 0.45);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_HOVER: f32 = 0.8;

    /// Surface background - Semi-transparent navbar and cards
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const SECTION: f32 = 56.0; // 7 units, vertical padding between sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const NAVBAR_HEIGHT: f32 = 64.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const LANGUAGE_PICKER_WIDTH: f32 = 150.0;
    pub const WAITLIST_FORM_WIDTH: f32 = 560.0;

    /// Mock phone card in the hero.
    pub const MOCK_CARD_WIDTH: f32 = 320.0;
    pub const MOCK_PREVIEW_HEIGHT: f32 = 160.0;

    /// Boxes of the flow diagram.
    pub const FLOW_BOX_WIDTH: f32 = 150.0;
    pub const FLOW_BOX_HEIGHT: f32 = 64.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: hero heading
    //! - Titles: section headings and cards
    //! - Body: primary content text
    //! - Caption: notes, badges, footer

    /// Hero heading
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Section headings, prices
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand name, footer call to action
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Section subtitles, hero description
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Bullets and flow sub-labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, notes, copyright
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Cards, badges, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Highlighted tier, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SOFT_BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT_BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::PRIMARY_500.g >= 0.0 && palette::PRIMARY_500.g <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_color_is_not_grayscale() {
        let brand = palette::PRIMARY_500;
        assert!(brand.g > brand.r);
    }
}
