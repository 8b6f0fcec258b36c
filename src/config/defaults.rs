// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lighting**: Delay between two ignition steps
//! - **Insight**: Remote text-generation service settings

// ==========================================================================
// Lighting Defaults
// ==========================================================================

/// Default delay between two candles being lit (in milliseconds).
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 800;

/// Minimum delay between two ignition steps (in milliseconds).
pub const MIN_STEP_INTERVAL_MS: u64 = 100;

/// Maximum delay between two ignition steps (in milliseconds).
pub const MAX_STEP_INTERVAL_MS: u64 = 5_000;

// ==========================================================================
// Insight Defaults
// ==========================================================================

/// Whether the daily insight button is active by default.
pub const DEFAULT_INSIGHT_ENABLED: bool = true;

/// Default text-generation model.
pub const DEFAULT_INSIGHT_MODEL: &str = "gemini-2.5-flash";

/// Default base URL of the text-generation REST API.
pub const DEFAULT_INSIGHT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request timeout (in seconds).
pub const DEFAULT_INSIGHT_TIMEOUT_SECS: u64 = 20;

/// Minimum request timeout (in seconds).
pub const MIN_INSIGHT_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_INSIGHT_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_STEP_INTERVAL_MS > 0);
    assert!(MAX_STEP_INTERVAL_MS >= MIN_STEP_INTERVAL_MS);
    assert!(DEFAULT_STEP_INTERVAL_MS >= MIN_STEP_INTERVAL_MS);
    assert!(DEFAULT_STEP_INTERVAL_MS <= MAX_STEP_INTERVAL_MS);

    assert!(MIN_INSIGHT_TIMEOUT_SECS > 0);
    assert!(MAX_INSIGHT_TIMEOUT_SECS >= MIN_INSIGHT_TIMEOUT_SECS);
    assert!(DEFAULT_INSIGHT_TIMEOUT_SECS >= MIN_INSIGHT_TIMEOUT_SECS);
    assert!(DEFAULT_INSIGHT_TIMEOUT_SECS <= MAX_INSIGHT_TIMEOUT_SECS);
};
