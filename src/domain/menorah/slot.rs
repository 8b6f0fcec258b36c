// SPDX-License-Identifier: MPL-2.0
//! Candle slots and their display colors.

use super::newtypes::{bounds, Day, SlotIndex};
use super::placement;

// =============================================================================
// CandleColor
// =============================================================================

/// An opaque sRGB color, independent of any rendering toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandleColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CandleColor {
    /// Builds a color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Reserved silver-white of the lighter candle.
    pub const LIGHTER: Self = Self::from_hex(0xF0_F0_F0);

    /// Palette cycled over the count candles by slot index.
    pub const PALETTE: [Self; 8] = [
        Self::from_hex(0xFF_41_36), // red
        Self::from_hex(0x00_74_D9), // blue
        Self::from_hex(0x2E_CC_40), // green
        Self::from_hex(0xFF_DC_00), // yellow
        Self::from_hex(0xB1_0D_C9), // purple
        Self::from_hex(0xFF_85_1B), // orange
        Self::from_hex(0x39_CC_CC), // teal
        Self::from_hex(0xF0_12_BE), // magenta
    ];

    /// Returns the stable color for a slot.
    #[must_use]
    pub fn for_slot(index: SlotIndex) -> Self {
        if index.is_lighter() {
            Self::LIGHTER
        } else {
            Self::PALETTE[index.get() % Self::PALETTE.len()]
        }
    }

    /// Formats the color as `#RRGGBB`.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// =============================================================================
// Slot
// =============================================================================

/// One of the nine candle positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: SlotIndex,
    /// Whether a candle stands on this branch.
    pub occupied: bool,
    /// Whether its flame is showing.
    pub lit: bool,
    pub color: CandleColor,
}

impl Slot {
    fn empty(index: SlotIndex) -> Self {
        Self {
            index,
            occupied: index.is_lighter(),
            lit: false,
            color: CandleColor::for_slot(index),
        }
    }

    /// Builds the unlit arrangement for `day`: the lighter plus `day` count
    /// candles placed by [`placement::occupied_slots`].
    #[must_use]
    pub fn layout(day: Day) -> [Slot; bounds::SLOT_COUNT] {
        let mut slots = SlotIndex::ALL.map(Slot::empty);
        for index in placement::occupied_slots(day) {
            slots[index.get()].occupied = true;
        }
        slots
    }
}
