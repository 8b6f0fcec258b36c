// SPDX-License-Identifier: MPL-2.0
//! `iced_menorah` is an interactive festival candle-lighting display built with
//! the Iced GUI framework.
//!
//! It places the candles for the selected night of Hanukkah, lights them one by
//! one in the traditional order, and can fetch a short daily insight from a
//! remote text-generation service. Text is localized with Fluent and user
//! preferences are stored in a TOML settings file.

#![doc(html_root_url = "https://docs.rs/iced_menorah/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
