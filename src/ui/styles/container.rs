// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window night sky behind every other element.
pub fn root(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NIGHT_950)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Frosted surface holding the controls.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: 0.2,
                ..palette::WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dark inset behind the language toggle.
pub fn inset(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.2,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One-pixel separator line.
pub fn divider(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        })),
        ..Default::default()
    }
}

/// Card carrying the blessing text.
pub fn blessing_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::NIGHT_700
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GOLD_500
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Card carrying the daily insight.
pub fn insight_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::INDIGO_900
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::INDIGO_200
            },
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
