// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.

use std::fmt;

/// Errors raised when a raw value cannot become a festival [`Day`](crate::domain::menorah::Day).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayError {
    /// The number is outside the eight nights of the festival.
    OutOfRange(i64),
    /// The text could not be parsed as a number at all.
    NotANumber(String),
}

impl fmt::Display for DayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayError::OutOfRange(value) => {
                write!(f, "day {value} is outside the festival (expected 1-8)")
            }
            DayError::NotANumber(raw) => write!(f, "'{raw}' is not a day number"),
        }
    }
}

impl std::error::Error for DayError {}
