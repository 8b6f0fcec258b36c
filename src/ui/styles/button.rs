// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn faded(color: Color) -> Color {
    Color {
        a: opacity::DISABLED,
        ..color
    }
}

/// Gold pill used for the main action (lighting the candles).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (palette::GOLD_500, shadow::MD),
        button::Status::Hovered => (palette::GOLD_300, shadow::GLOW),
        button::Status::Disabled => (faded(palette::GOLD_500), shadow::NONE),
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        faded(palette::NIGHT_900)
    } else {
        palette::NIGHT_900
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::GOLD_700,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

/// Indigo pill used for the insight request.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::SURFACE,
        button::Status::Disabled => opacity::OVERLAY_MEDIUM,
        _ => opacity::DISABLED,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::INDIGO_900
        })),
        text_color: palette::INDIGO_200,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::INDIGO_200
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Barely visible pill for low-emphasis actions (reset).
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => opacity::OVERLAY_FAINT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: palette::GRAY_300,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for selected/active state in toggle groups (language, night).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::GOLD_300,
        _ => palette::GOLD_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::NIGHT_900,
        border: Border {
            color: palette::GOLD_500,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::GLOW,
        snap: true,
    }
}

/// Style for unselected state in toggle groups.
pub fn unselected(_theme: &Theme, status: button::Status) -> button::Style {
    let (text_color, border_alpha, background_alpha) = match status {
        button::Status::Hovered => (WHITE, opacity::OPAQUE, opacity::OVERLAY_SUBTLE),
        _ => (
            Color {
                a: 0.7,
                ..WHITE
            },
            opacity::OVERLAY_MEDIUM,
            opacity::TRANSPARENT,
        ),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: background_alpha,
            ..WHITE
        })),
        text_color,
        border: Border {
            color: Color {
                a: border_alpha,
                ..WHITE
            },
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Picks [`selected`] or [`unselected`] for a toggle group member.
pub fn toggle(is_selected: bool) -> fn(&Theme, button::Status) -> button::Style {
    if is_selected {
        selected
    } else {
        unselected
    }
}
