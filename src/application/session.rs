// SPDX-License-Identifier: MPL-2.0
//! Session state machine for the menorah display.
//!
//! A [`Session`] owns the selected night, the display language, the nine
//! candle slots, and the daily insight. It is mutated only through its
//! commands; the presentation layer reads [`Snapshot`]s.
//!
//! # Ignition
//!
//! Lighting is driven from outside (the app schedules one step per interval),
//! so the session only validates each step. Every sequence carries the
//! `epoch` that was current when it started; [`Session::set_day`] and
//! [`Session::reset`] bump the epoch, and steps from an older epoch are
//! refused. An abandoned sequence can therefore never relight a candle.
//!
//! ```text
//!            light()                    ignite(e, 0..n)        finish(e)
//!   Idle ─────────────────▶ Lighting ─────────────────▶ ... ────────────▶ Idle
//!     ▲                        │
//!     └──── set_day / reset ───┘   (epoch += 1, stale steps ignored)
//! ```

use crate::domain::language::Language;
use crate::domain::menorah::{bounds, lighting_order, Day, Slot, SlotIndex};

// =============================================================================
// Phase
// =============================================================================

/// Whether an ignition sequence is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Lighting,
}

impl Phase {
    #[must_use]
    pub fn is_lighting(self) -> bool {
        matches!(self, Phase::Lighting)
    }
}

// =============================================================================
// IgnitionPlan
// =============================================================================

/// An ignition sequence handed out by [`Session::begin_lighting`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnitionPlan {
    epoch: u64,
    order: Vec<SlotIndex>,
}

impl IgnitionPlan {
    /// Generation this plan belongs to.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Slots to light, in order.
    #[must_use]
    pub fn order(&self) -> &[SlotIndex] {
        &self.order
    }

    /// Number of ignition steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// =============================================================================
// Insight
// =============================================================================

/// Ticket identifying one insight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightRequest {
    pub ticket: u64,
    pub day: Day,
    pub language: Language,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct InsightState {
    text: Option<String>,
    loading: bool,
    failed: bool,
    ticket: u64,
}

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only view of a session, rebuilt after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub day: Day,
    pub language: Language,
    pub slots: [Slot; bounds::SLOT_COUNT],
    pub phase: Phase,
    pub insight: Option<String>,
    pub insight_loading: bool,
    /// The last insight request finished without text.
    pub insight_failed: bool,
}

// =============================================================================
// Session
// =============================================================================

/// Controller state behind the display.
#[derive(Debug, Clone)]
pub struct Session {
    day: Day,
    language: Language,
    slots: [Slot; bounds::SLOT_COUNT],
    phase: Phase,
    epoch: u64,
    /// Plan of the running sequence, if any.
    active_order: Vec<SlotIndex>,
    insight: InsightState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Day::default(), Language::default())
    }
}

impl Session {
    /// Creates an idle session with the arrangement for `day`.
    #[must_use]
    pub fn new(day: Day, language: Language) -> Self {
        Self {
            day,
            language,
            slots: Slot::layout(day),
            phase: Phase::Idle,
            epoch: 0,
            active_order: Vec::new(),
            insight: InsightState::default(),
        }
    }

    #[must_use]
    pub fn day(&self) -> Day {
        self.day
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn slots(&self) -> &[Slot; bounds::SLOT_COUNT] {
        &self.slots
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn insight(&self) -> Option<&str> {
        self.insight.text.as_deref()
    }

    #[must_use]
    pub fn is_insight_loading(&self) -> bool {
        self.insight.loading
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            day: self.day,
            language: self.language,
            slots: self.slots,
            phase: self.phase,
            insight: self.insight.text.clone(),
            insight_loading: self.insight.loading,
            insight_failed: self.insight.failed,
        }
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Selects another night.
    ///
    /// Returns `false` (and changes nothing) when `day` is already selected.
    /// Otherwise the arrangement is rebuilt, any running sequence is
    /// abandoned, and the insight is cleared.
    pub fn set_day(&mut self, day: Day) -> bool {
        if day == self.day {
            return false;
        }
        self.day = day;
        self.rebuild();
        self.insight = InsightState {
            ticket: self.insight.ticket.wrapping_add(1),
            ..InsightState::default()
        };
        true
    }

    /// Rebuilds the arrangement for the current night and stops any sequence.
    pub fn reset(&mut self) {
        self.rebuild();
    }

    /// Switches the display language. Slots and insight are untouched.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    fn rebuild(&mut self) {
        self.slots = Slot::layout(self.day);
        self.phase = Phase::Idle;
        self.active_order.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Starts an ignition sequence.
    ///
    /// Returns `None` while a sequence is already running.
    pub fn begin_lighting(&mut self) -> Option<IgnitionPlan> {
        if self.phase.is_lighting() {
            return None;
        }
        self.epoch = self.epoch.wrapping_add(1);
        self.phase = Phase::Lighting;
        self.active_order = lighting_order(self.day);
        Some(IgnitionPlan {
            epoch: self.epoch,
            order: self.active_order.clone(),
        })
    }

    /// Lights the slot at `position` of the sequence started in `epoch`.
    ///
    /// Returns `false` for a stale epoch or a position past the end.
    pub fn ignite(&mut self, epoch: u64, position: usize) -> bool {
        if !self.is_current(epoch) {
            return false;
        }
        let Some(index) = self.active_order.get(position).copied() else {
            return false;
        };
        self.slots[index.get()].lit = true;
        true
    }

    /// Ends the sequence started in `epoch` and returns to idle.
    ///
    /// Returns `false` for a stale epoch.
    pub fn finish_lighting(&mut self, epoch: u64) -> bool {
        if !self.is_current(epoch) {
            return false;
        }
        self.phase = Phase::Idle;
        self.active_order.clear();
        true
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.phase.is_lighting() && epoch == self.epoch
    }

    /// Marks an insight request as in flight and returns its ticket.
    ///
    /// Independent of the ignition phase. A newer request supersedes any
    /// request still in flight.
    pub fn begin_insight(&mut self) -> InsightRequest {
        self.insight.ticket = self.insight.ticket.wrapping_add(1);
        self.insight.loading = true;
        self.insight.failed = false;
        self.insight.text = None;
        InsightRequest {
            ticket: self.insight.ticket,
            day: self.day,
            language: self.language,
        }
    }

    /// Stores the outcome of the request identified by `ticket`.
    ///
    /// `None` (a failed call) leaves the insight absent. Outcomes of
    /// superseded requests are dropped; returns whether this one was kept.
    pub fn complete_insight(&mut self, ticket: u64, text: Option<String>) -> bool {
        if ticket != self.insight.ticket || !self.insight.loading {
            return false;
        }
        self.insight.failed = text.is_none();
        self.insight.text = text;
        self.insight.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(value: u8) -> Day {
        Day::new(value).expect("valid day")
    }

    fn lit_indices(session: &Session) -> Vec<usize> {
        session
            .slots()
            .iter()
            .filter(|slot| slot.lit)
            .map(|slot| slot.index.get())
            .collect()
    }

    fn run_to_completion(session: &mut Session) {
        let plan = session.begin_lighting().expect("idle session");
        for position in 0..plan.len() {
            assert!(session.ignite(plan.epoch(), position));
        }
        assert!(session.finish_lighting(plan.epoch()));
    }

    #[test]
    fn new_session_is_idle_and_unlit() {
        let session = Session::new(day(3), Language::English);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(lit_indices(&session).is_empty());
        assert_eq!(
            session.slots().iter().filter(|slot| slot.occupied).count(),
            4
        );
    }

    #[test]
    fn set_day_then_reset_is_idempotent() {
        let mut session = Session::default();
        session.set_day(day(6));
        let after_set = session.snapshot();

        run_to_completion(&mut session);
        session.reset();

        assert_eq!(session.snapshot().slots, after_set.slots);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn set_same_day_is_noop() {
        let mut session = Session::new(day(2), Language::English);
        let plan = session.begin_lighting().expect("idle");
        session.ignite(plan.epoch(), 0);

        assert!(!session.set_day(day(2)));
        assert_eq!(session.phase(), Phase::Lighting);
        assert_eq!(lit_indices(&session), vec![4]);
    }

    #[test]
    fn full_sequence_lights_exactly_the_order() {
        for d in Day::ALL {
            let mut session = Session::new(d, Language::Russian);
            run_to_completion(&mut session);

            let mut expected: Vec<usize> = lighting_order(d).iter().map(|s| s.get()).collect();
            expected.sort_unstable();
            assert_eq!(lit_indices(&session), expected);
            assert_eq!(session.phase(), Phase::Idle);
        }
    }

    #[test]
    fn steps_are_observable_one_at_a_time() {
        let mut session = Session::new(day(2), Language::English);
        let plan = session.begin_lighting().expect("idle");

        session.ignite(plan.epoch(), 0);
        assert_eq!(lit_indices(&session), vec![4]);
        session.ignite(plan.epoch(), 1);
        assert_eq!(lit_indices(&session), vec![4, 7]);
        session.ignite(plan.epoch(), 2);
        assert_eq!(lit_indices(&session), vec![4, 7, 8]);
    }

    #[test]
    fn light_while_lighting_is_ignored() {
        let mut session = Session::new(day(4), Language::English);
        let plan = session.begin_lighting().expect("idle");
        session.ignite(plan.epoch(), 0);
        let before = session.snapshot();

        assert!(session.begin_lighting().is_none());
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.epoch(), plan.epoch());
        // The first sequence keeps going.
        assert!(session.ignite(plan.epoch(), 1));
    }

    #[test]
    fn day_change_abandons_running_sequence() {
        let mut session = Session::new(day(8), Language::English);
        let plan = session.begin_lighting().expect("idle");
        session.ignite(plan.epoch(), 0);
        session.ignite(plan.epoch(), 1);

        session.set_day(day(2));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(lit_indices(&session).is_empty());

        // Stale steps from the abandoned sequence are refused.
        assert!(!session.ignite(plan.epoch(), 2));
        assert!(!session.finish_lighting(plan.epoch()));
        assert!(lit_indices(&session).is_empty());
    }

    #[test]
    fn stale_steps_do_not_leak_into_a_new_sequence() {
        let mut session = Session::new(day(8), Language::English);
        let old = session.begin_lighting().expect("idle");
        session.reset();
        let new = session.begin_lighting().expect("idle after reset");
        assert_ne!(old.epoch(), new.epoch());

        // Old step for slot 0 would be position 1 in both plans.
        assert!(!session.ignite(old.epoch(), 1));
        assert!(lit_indices(&session).is_empty());
        assert!(!session.finish_lighting(old.epoch()));
        assert_eq!(session.phase(), Phase::Lighting);
    }

    #[test]
    fn ignite_past_end_is_refused() {
        let mut session = Session::new(day(1), Language::English);
        let plan = session.begin_lighting().expect("idle");
        assert!(!session.ignite(plan.epoch(), plan.len()));
    }

    #[test]
    fn insight_failure_degrades_to_absent() {
        let mut session = Session::default();
        let request = session.begin_insight();
        assert!(session.is_insight_loading());

        assert!(session.complete_insight(request.ticket, None));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.insight, None);
        assert!(!snapshot.insight_loading);
        assert!(snapshot.insight_failed);
    }

    #[test]
    fn insight_success_is_stored() {
        let mut session = Session::new(day(5), Language::Hebrew);
        let request = session.begin_insight();
        assert_eq!(request.day, day(5));
        assert_eq!(request.language, Language::Hebrew);

        session.complete_insight(request.ticket, Some("Light grows".into()));
        assert_eq!(session.insight(), Some("Light grows"));
        assert!(!session.snapshot().insight_failed);
    }

    #[test]
    fn insight_does_not_interfere_with_lighting() {
        let mut session = Session::new(day(3), Language::English);
        let plan = session.begin_lighting().expect("idle");
        let request = session.begin_insight();
        session.ignite(plan.epoch(), 0);
        session.complete_insight(request.ticket, Some("text".into()));

        assert_eq!(session.phase(), Phase::Lighting);
        assert!(session.ignite(plan.epoch(), 1));
    }

    #[test]
    fn superseded_insight_is_dropped() {
        let mut session = Session::default();
        let first = session.begin_insight();
        let second = session.begin_insight();

        assert!(session.complete_insight(second.ticket, Some("second".into())));
        assert!(!session.complete_insight(first.ticket, Some("first".into())));
        assert_eq!(session.insight(), Some("second"));
    }

    #[test]
    fn day_change_clears_insight_and_drops_pending_response() {
        let mut session = Session::default();
        let done = session.begin_insight();
        session.complete_insight(done.ticket, Some("night one".into()));

        let pending = session.begin_insight();
        session.set_day(day(2));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.insight, None);
        assert!(!snapshot.insight_loading);

        assert!(!session.complete_insight(pending.ticket, Some("late".into())));
        assert_eq!(session.insight(), None);
    }

    #[test]
    fn language_change_keeps_slots_and_insight() {
        let mut session = Session::new(day(4), Language::English);
        let request = session.begin_insight();
        session.complete_insight(request.ticket, Some("kept".into()));
        let slots = *session.slots();

        session.set_language(Language::Azerbaijani);
        assert_eq!(session.language(), Language::Azerbaijani);
        assert_eq!(*session.slots(), slots);
        assert_eq!(session.insight(), Some("kept"));
    }
}
