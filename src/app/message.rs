// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::application::port::InsightError;
use crate::domain::menorah::Day;
use crate::ui::controls;
use std::time::Instant;

/// Messages driving [`App::update`](super::App).
#[derive(Debug, Clone)]
pub enum Message {
    /// A command issued from the control panel.
    Controls(controls::Message),
    /// Timer fired for `position` of the sequence started in `epoch`.
    LightingStep { epoch: u64, position: usize },
    /// The insight request identified by `ticket` resolved.
    InsightLoaded {
        ticket: u64,
        result: Result<String, InsightError>,
    },
    SpinnerTick(Instant),
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `he`, `en-US`).
    pub lang: Option<String>,
    /// Night to show at startup, already validated.
    pub day: Option<Day>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MENORAH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
