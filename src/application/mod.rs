// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`session`]: The display's state machine (night, slots, ignition, insight)
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer drives the session and renders its snapshots
//!
//! # Example
//!
//! ```
//! use iced_menorah::application::session::Session;
//! use iced_menorah::domain::language::Language;
//! use iced_menorah::domain::menorah::Day;
//!
//! let mut session = Session::new(Day::FIRST, Language::English);
//! let plan = session.begin_lighting().expect("session starts idle");
//! for position in 0..plan.len() {
//!     session.ignite(plan.epoch(), position);
//! }
//! session.finish_lighting(plan.epoch());
//! assert!(session.slots().iter().filter(|s| s.occupied).all(|s| s.lit));
//! ```

pub mod port;
pub mod session;
