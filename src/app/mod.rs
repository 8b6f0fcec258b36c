// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the session and its views.
//!
//! The `App` struct wires together the session, localization and the insight
//! provider, and translates messages into session commands plus follow-up
//! tasks (timed lighting steps, insight requests).

mod message;
pub mod paths;
mod persistence;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{DisabledInsight, InsightProvider};
use crate::application::session::Session;
use crate::config::{self, Config};
use crate::domain::menorah::Day;
use crate::i18n::fluent::I18n;
use crate::infrastructure::GeminiInsightProvider;
use iced::{time, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Spinner animation frame interval (~60 fps).
const SPINNER_TICK: Duration = Duration::from_millis(16);

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    insight: Arc<dyn InsightProvider>,
    insight_enabled: bool,
    step_interval: Duration,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("day", &self.session.day())
            .field("language", &self.session.language())
            .field("phase", &self.session.phase())
            .field("insight_enabled", &self.insight_enabled)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Chooses the provider for the configured insight settings.
fn insight_provider(config: &Config) -> Arc<dyn InsightProvider> {
    if !config.insight.is_enabled() {
        return Arc::new(DisabledInsight);
    }
    let provider = GeminiInsightProvider::from_env(&config.insight);
    if !provider.has_credential() {
        tracing::warn!("no API key in GEMINI_API_KEY or API_KEY, daily insight will be unavailable");
    }
    Arc::new(provider)
}

impl App {
    /// Initializes application state from the config file and launch flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "failed to load settings, using defaults");
        }
        let insight = insight_provider(&config);
        (Self::with_provider(&flags, &config, insight), Task::none())
    }

    /// Builds the application around an explicit insight provider.
    pub fn with_provider(flags: &Flags, config: &Config, insight: Arc<dyn InsightProvider>) -> Self {
        let i18n = I18n::new(
            flags.lang.clone(),
            flags.i18n_dir.as_deref().map(Path::new),
            config,
        );

        let configured_day = config.lighting.start_day().unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring configured start day");
            None
        });
        let day = flags.day.or(configured_day).unwrap_or(Day::FIRST);

        tracing::info!(%day, language = %i18n.language(), "display ready");

        Self {
            session: Session::new(day, i18n.language()),
            i18n,
            insight,
            insight_enabled: config.insight.is_enabled(),
            step_interval: config.lighting.step_interval(),
            spinner_rotation: 0.0,
        }
    }

    /// Read-only access to the session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.session.is_insight_loading() {
            time::every(SPINNER_TICK).map(Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            session: &mut self.session,
            insight: &self.insight,
            step_interval: self.step_interval,
            spinner_rotation: &mut self.spinner_rotation,
        };

        match message {
            Message::Controls(message) => update::handle_controls_message(&mut ctx, message),
            Message::LightingStep { epoch, position } => {
                update::handle_lighting_step(&mut ctx, epoch, position)
            }
            Message::InsightLoaded { ticket, result } => {
                update::handle_insight_loaded(&mut ctx, ticket, result);
                Task::none()
            }
            Message::SpinnerTick(_) => {
                update::handle_spinner_tick(&mut ctx);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let snapshot = self.session.snapshot();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            snapshot: &snapshot,
            spinner_rotation: self.spinner_rotation,
            insight_enabled: self.insight_enabled,
        })
    }
}
