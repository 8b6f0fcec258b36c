// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (night sky, gold, flame)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Menorah**: Geometry of the drawn lamp, in scene units

## Examples

```
use iced_menorah::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let card_bg = Color {
    a: opacity::OVERLAY_SUBTLE,
    ..palette::WHITE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.62, 0.66);
    pub const GRAY_300: Color = Color::from_rgb(0.72, 0.74, 0.78);

    // Night sky (background scale)
    pub const NIGHT_950: Color = Color::from_rgb(0.035, 0.06, 0.14);
    pub const NIGHT_900: Color = Color::from_rgb(0.05, 0.09, 0.2);
    pub const NIGHT_700: Color = Color::from_rgb(0.1, 0.17, 0.34);

    pub const INDIGO_900: Color = Color::from_rgb(0.19, 0.18, 0.51);
    pub const INDIGO_200: Color = Color::from_rgb(0.78, 0.82, 1.0);

    // Gold (brand scale)
    pub const GOLD_300: Color = Color::from_rgb(1.0, 0.843, 0.0); // #FFD700
    pub const GOLD_500: Color = Color::from_rgb(0.773, 0.627, 0.349); // #C5A059
    pub const GOLD_700: Color = Color::from_rgb(0.722, 0.525, 0.043); // #B8860B

    pub const SILVER: Color = Color::from_rgb(0.75, 0.76, 0.8);

    // Candle details
    pub const WICK: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333
    pub const FLAME: Color = GOLD_300;
    pub const FLAME_CORE: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.6);
    pub const FLAME_GLOW: Color = Color::from_rgba(1.0, 0.843, 0.0, 0.3);

    pub const ERROR_300: Color = Color::from_rgb(1.0, 0.6, 0.6);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_FAINT: f32 = 0.05;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.3;
    pub const DISABLED: f32 = 0.5;
    pub const SURFACE: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
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
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    /// Diameter of a night selector button.
    pub const NIGHT_BUTTON: f32 = 40.0;

    pub const MENORAH_HEIGHT: f32 = 340.0;
    pub const CONTENT_MAX_WIDTH: f32 = 900.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 44.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const GLOW: Shadow = Shadow {
        color: Color::from_rgba(0.773, 0.627, 0.349, 0.5),
        offset: Vector::ZERO,
        blur_radius: 15.0,
    };
}

// ============================================================================
// Menorah Geometry (scene units, origin at the top of the cups' rim)
// ============================================================================

pub mod menorah {
    /// Horizontal distance between two neighbouring slots.
    pub const SLOT_SPACING: f32 = 45.0;

    /// Scene bounds the drawing is fitted into.
    pub const SCENE_LEFT: f32 = -220.0;
    pub const SCENE_TOP: f32 = -150.0;
    pub const SCENE_WIDTH: f32 = 440.0;
    pub const SCENE_HEIGHT: f32 = 250.0;

    pub const BRANCH_WIDTH: f32 = 6.0;
    /// Depth of the control point of each curved branch.
    pub const BRANCH_DIP: f32 = 60.0;
    pub const RIM_Y: f32 = 20.0;

    pub const CANDLE_WIDTH: f32 = 12.0;
    pub const CANDLE_HEIGHT: f32 = 60.0;
    /// Part of each candle hidden inside its cup.
    pub const CANDLE_SINK: f32 = 15.0;
    /// The lighter stands taller than the counted candles.
    pub const LIGHTER_LIFT: f32 = 10.0;
    pub const WICK_LENGTH: f32 = 4.0;
    pub const FLAME_HEIGHT: f32 = 21.0;
    pub const GLOW_RADIUS: f32 = 12.0;
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

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DISABLED > 0.0 && opacity::DISABLED < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Nine slots must fit inside the scene.
    assert!(menorah::SLOT_SPACING * 8.0 + menorah::CANDLE_WIDTH < menorah::SCENE_WIDTH);
};
