// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every handler mutates the session through its commands only and returns
//! the follow-up [`Task`] (a delayed lighting step or an insight request).

use super::{persistence, Message};
use crate::application::port::{InsightError, InsightProvider};
use crate::application::session::Session;
use crate::domain::language::Language;
use crate::domain::menorah::Day;
use crate::i18n::fluent::I18n;
use crate::ui::controls;
use crate::ui::widgets::animated_spinner;
use iced::Task;
use std::sync::Arc;
use std::time::Duration;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub session: &'a mut Session,
    pub insight: &'a Arc<dyn InsightProvider>,
    pub step_interval: Duration,
    pub spinner_rotation: &'a mut f32,
}

/// Resolves to the step message once `delay` has elapsed.
///
/// The timer is only created on first poll, so building the task does not
/// need a running reactor.
async fn lighting_step_after(delay: Duration, epoch: u64, position: usize) -> Message {
    tokio::time::sleep(delay).await;
    Message::LightingStep { epoch, position }
}

/// Schedules `position` of the sequence `epoch` after `delay`.
fn schedule_step(delay: Duration, epoch: u64, position: usize) -> Task<Message> {
    Task::perform(lighting_step_after(delay, epoch, position), std::convert::identity)
}

pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match message {
        controls::Message::LanguageSelected(language) => {
            handle_language_selected(ctx, language);
            Task::none()
        }
        controls::Message::DaySelected(day) => {
            handle_day_selected(ctx, day);
            Task::none()
        }
        controls::Message::Light => handle_light(ctx),
        controls::Message::Reset => {
            ctx.session.reset();
            tracing::debug!(day = %ctx.session.day(), "candles reset");
            Task::none()
        }
        controls::Message::RequestInsight => handle_request_insight(ctx),
    }
}

fn handle_language_selected(ctx: &mut UpdateContext<'_>, language: Language) {
    ctx.i18n.set_language(language);
    let active = ctx.i18n.language();
    ctx.session.set_language(active);

    if let Err(error) = persistence::persist_language(active) {
        tracing::warn!(%error, "failed to save language preference");
    }
}

fn handle_day_selected(ctx: &mut UpdateContext<'_>, day: Day) {
    if ctx.session.set_day(day) {
        tracing::debug!(%day, "night selected");
    }
}

fn handle_light(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(plan) = ctx.session.begin_lighting() else {
        tracing::debug!("lighting already in progress, ignoring");
        return Task::none();
    };
    tracing::info!(day = %ctx.session.day(), candles = plan.len(), "lighting started");

    ctx.session.ignite(plan.epoch(), 0);
    schedule_step(ctx.step_interval, plan.epoch(), 1)
}

/// Lights the next candle, or ends the sequence once every delay elapsed.
pub fn handle_lighting_step(
    ctx: &mut UpdateContext<'_>,
    epoch: u64,
    position: usize,
) -> Task<Message> {
    if ctx.session.ignite(epoch, position) {
        return schedule_step(ctx.step_interval, epoch, position + 1);
    }
    if ctx.session.finish_lighting(epoch) {
        tracing::info!(day = %ctx.session.day(), "lighting finished");
    } else {
        tracing::debug!(epoch, position, "stale lighting step dropped");
    }
    Task::none()
}

fn handle_request_insight(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let request = ctx.session.begin_insight();
    *ctx.spinner_rotation = 0.0;
    tracing::debug!(
        ticket = request.ticket,
        day = %request.day,
        language = %request.language,
        "insight requested"
    );

    let ticket = request.ticket;
    Task::perform(
        ctx.insight.daily_insight(request.day, request.language),
        move |result| Message::InsightLoaded { ticket, result },
    )
}

pub fn handle_insight_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: u64,
    result: Result<String, InsightError>,
) {
    let text = match result {
        Ok(text) => Some(text),
        Err(error) => {
            tracing::warn!(%error, "daily insight unavailable");
            None
        }
    };
    if !ctx.session.complete_insight(ticket, text) {
        tracing::debug!(ticket, "superseded insight response dropped");
    }
}

pub fn handle_spinner_tick(ctx: &mut UpdateContext<'_>) {
    *ctx.spinner_rotation = animated_spinner::advance(*ctx.spinner_rotation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DEFAULT_STEP_INTERVAL_MS;
    use futures_util::FutureExt;

    const STEP: Duration = Duration::from_millis(DEFAULT_STEP_INTERVAL_MS);

    #[tokio::test(start_paused = true)]
    async fn step_message_waits_for_full_interval() {
        let mut step = Box::pin(lighting_step_after(STEP, 3, 2));
        assert!((&mut step).now_or_never().is_none());

        tokio::time::advance(STEP - Duration::from_millis(1)).await;
        assert!((&mut step).now_or_never().is_none());

        tokio::time::advance(Duration::from_millis(1)).await;
        match (&mut step).now_or_never() {
            Some(Message::LightingStep { epoch, position }) => {
                assert_eq!(epoch, 3);
                assert_eq!(position, 2);
            }
            other => panic!("expected the step message, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn closing_step_also_waits() {
        // The step after the last candle only ends the sequence, but it is
        // still delayed by a full interval.
        let start = tokio::time::Instant::now();
        let message = lighting_step_after(STEP, 1, 9).await;
        assert!(matches!(message, Message::LightingStep { position: 9, .. }));
        assert!(start.elapsed() >= STEP);
    }

    #[test]
    fn scheduling_does_not_need_a_runtime() {
        let _task = schedule_step(STEP, 1, 1);
    }
}
