// SPDX-License-Identifier: MPL-2.0
//! Daily insight port definition.
//!
//! This module defines the [`InsightProvider`] trait for the remote
//! text-generation service that writes a short thought for a night.
//!
//! # Design Notes
//!
//! - The provider returns a boxed future; callers wrap it in an Iced `Task`
//! - Errors are reported to the caller, which degrades them to "no insight"
//! - The trait is `Send + Sync` so one provider can serve overlapping requests

use crate::domain::language::Language;
use crate::domain::menorah::Day;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// InsightError
// =============================================================================

/// Errors that can occur while asking for a daily insight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightError {
    /// No API credential is configured, so the service cannot be reached.
    MissingCredential,

    /// The request failed (network, HTTP status, or undecodable body).
    RemoteCallFailure(String),

    /// The service answered but produced no text.
    EmptyResponse,
}

impl fmt::Display for InsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightError::MissingCredential => write!(f, "insight API key is not configured"),
            InsightError::RemoteCallFailure(msg) => write!(f, "insight request failed: {msg}"),
            InsightError::EmptyResponse => write!(f, "insight service returned no text"),
        }
    }
}

impl std::error::Error for InsightError {}

// =============================================================================
// InsightProvider Trait
// =============================================================================

/// Port for the text-generation collaborator.
///
/// # Example
///
/// ```ignore
/// use iced_menorah::application::port::insight::InsightProvider;
///
/// async fn show(provider: &dyn InsightProvider, day: Day, language: Language) {
///     match provider.daily_insight(day, language).await {
///         Ok(text) => println!("{text}"),
///         Err(_) => {} // degrade silently
///     }
/// }
/// ```
pub trait InsightProvider: Send + Sync {
    /// Requests one short sentence for `day`, written in `language`.
    ///
    /// The returned future owns everything it needs, so it can be handed to
    /// the runtime without borrowing the provider.
    fn daily_insight(
        &self,
        day: Day,
        language: Language,
    ) -> BoxFuture<'static, Result<String, InsightError>>;
}

/// Provider used when insights are disabled in the configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledInsight;

impl InsightProvider for DisabledInsight {
    fn daily_insight(
        &self,
        _day: Day,
        _language: Language,
    ) -> BoxFuture<'static, Result<String, InsightError>> {
        Box::pin(async { Err(InsightError::MissingCredential) })
    }
}
