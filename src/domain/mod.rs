// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core festival rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`DayError`](error::DayError))
//! - [`language`]: Display languages ([`Language`](language::Language))
//! - [`menorah`]: Festival value objects ([`Day`](menorah::Day),
//!   [`SlotIndex`](menorah::SlotIndex), [`Slot`](menorah::Slot)) and the
//!   placement/lighting rule

pub mod error;
pub mod language;
pub mod menorah;
