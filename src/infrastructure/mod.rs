// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap external services.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Daily insight via the Gemini REST API (implements [`InsightProvider`])
//!
//! [`InsightProvider`]: crate::application::port::InsightProvider

pub mod gemini;

// Re-export main types for convenience
pub use gemini::GeminiInsightProvider;
