// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! The file on disk is reloaded before each write so settings edited by hand
//! while the application runs are kept.

use crate::config;
use crate::domain::language::Language;
use crate::error::Result;

/// Stores `language` as the preferred display language.
pub fn persist_language(language: Language) -> Result<()> {
    let (mut cfg, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!(%warning, "existing settings unreadable, rewriting with defaults");
    }
    cfg.general.language = Some(language.locale_tag().to_string());
    config::save(&cfg)
}
