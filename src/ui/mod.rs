// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views are pure functions of a session [`Snapshot`](crate::application::session::Snapshot);
//! the only messages they emit are the commands in [`controls::Message`].
//!
//! - [`menorah`] - Canvas drawing of the lamp and candles
//! - [`controls`] - Language toggle, night selector and actions
//! - [`info_panel`] - Blessing and daily insight cards
//! - [`widgets`] - Custom canvas widgets (spinner)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod info_panel;
pub mod menorah;
pub mod styles;
pub mod widgets;
