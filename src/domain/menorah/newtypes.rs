// SPDX-License-Identifier: MPL-2.0
//! Menorah newtypes.
//!
//! This module provides type-safe wrappers for festival values,
//! ensuring they are always within valid ranges.

use crate::domain::error::DayError;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Bounds
// =============================================================================

/// Festival bounds (eight nights, nine branches).
pub mod bounds {
    /// First night of the festival.
    pub const FIRST_DAY: u8 = 1;
    /// Last night of the festival.
    pub const LAST_DAY: u8 = 8;
    /// Number of physical candle positions on the menorah.
    pub const SLOT_COUNT: usize = 9;
    /// Physical position of the lighter candle (center branch).
    pub const LIGHTER_SLOT: u8 = 4;
}

// =============================================================================
// Day
// =============================================================================

/// Night of the festival, guaranteed to be within 1–8.
///
/// Out-of-range input is rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u8);

impl Day {
    /// The first night.
    pub const FIRST: Self = Self(bounds::FIRST_DAY);

    /// The eighth and last night.
    pub const LAST: Self = Self(bounds::LAST_DAY);

    /// All eight nights in order.
    pub const ALL: [Self; 8] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// Creates a day, rejecting values outside 1–8.
    pub fn new(value: u8) -> Result<Self, DayError> {
        if (bounds::FIRST_DAY..=bounds::LAST_DAY).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DayError::OutOfRange(i64::from(value)))
        }
    }

    /// Returns the night number (1–8).
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the night number as a collection length.
    #[must_use]
    pub fn count(self) -> usize {
        usize::from(self.0)
    }
}

impl Default for Day {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Day {
    type Error = DayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Day {
    type Err = DayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| DayError::NotANumber(trimmed.to_string()))?;
        u8::try_from(value)
            .map_err(|_| DayError::OutOfRange(value))
            .and_then(Self::new)
    }
}

// =============================================================================
// SlotIndex
// =============================================================================

/// Physical candle position, 0 (leftmost) to 8 (rightmost).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(u8);

impl SlotIndex {
    /// The lighter candle in the middle of the menorah.
    pub const LIGHTER: Self = Self(bounds::LIGHTER_SLOT);

    /// All positions, left to right.
    pub const ALL: [Self; bounds::SLOT_COUNT] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// Returns the slot at `index`, or `None` past the last branch.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the position as an array index.
    #[must_use]
    pub fn get(self) -> usize {
        usize::from(self.0)
    }

    /// Returns whether this is the lighter slot.
    #[must_use]
    pub fn is_lighter(self) -> bool {
        self == Self::LIGHTER
    }

    /// Signed distance from the lighter slot (-4 on the left, +4 on the right).
    #[must_use]
    pub fn offset_from_center(self) -> i8 {
        // Both operands are at most 8.
        #[allow(clippy::cast_possible_wrap)]
        let offset = self.0 as i8 - bounds::LIGHTER_SLOT as i8;
        offset
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
