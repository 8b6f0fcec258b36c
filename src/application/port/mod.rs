// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`insight`]: Remote text generation for the daily insight
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared with async tasks
//! - Methods return `Result` with port-specific error types
//! - No `async fn` - callers wrap returned futures in Iced's `Task`

pub mod insight;

// Re-export main types for convenience
pub use insight::{DisabledInsight, InsightError, InsightProvider};
