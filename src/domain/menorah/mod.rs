// SPDX-License-Identifier: MPL-2.0
//! Menorah domain types.
//!
//! This module contains the festival value objects and the placement rule
//! that decides which branches hold a candle and in which order they burn.

pub mod newtypes;
pub mod placement;
pub mod slot;

// Re-export commonly used types
pub use newtypes::{bounds, Day, SlotIndex};
pub use placement::{lighting_order, occupied_slots};
pub use slot::{CandleColor, Slot};
