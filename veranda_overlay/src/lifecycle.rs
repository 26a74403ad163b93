// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle wrapper around the pure positioner.
//!
//! ## Overview
//!
//! Walks `Closed → Opening → Open → Closing → Closed` and tells the host
//! when to recompute the position, run the enter/exit transitions, and
//! detach. Position recomputes on open start and on viewport resize —
//! deliberately not on scroll; callers that need scroll tracking re-trigger
//! manually.
//!
//! ## Reentrant open
//!
//! An [`open`](OverlayController::open) while the exit transition is still
//! running is queued: the controller finishes the close, emits
//! [`OverlayAction::Detach`], and immediately restarts at
//! [`OverlayPhase::Opening`] with a fresh `[ComputePosition, StartEnter]`.
//! Queuing preserves the user's intent without interleaving enter and exit
//! transitions on the same node.

use alloc::vec::Vec;

use veranda_transition::TransitionTracker;

use crate::types::{
    DismissReason, OverlayAction, OverlayConfig, OverlayPhase, OverlayTransition,
};

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "trace")]
        {
            log::trace!($($arg)*);
        }
    }};
}

/// Stateful open/close controller for one anchored overlay.
///
/// ## Usage
///
/// - Construct with [`OverlayController::new`] when the overlay mounts.
/// - Call [`open`](Self::open) / [`close`](Self::close) /
///   [`dismiss`](Self::dismiss) from interactions, and apply the returned
///   [`OverlayAction`]s in order.
/// - Report transition completion through
///   [`transition_ended`](Self::transition_ended) and call
///   [`poll`](Self::poll) from the host's tick so a lost completion event
///   resolves by deadline.
/// - Forward viewport resizes to [`viewport_resized`](Self::viewport_resized).
/// - Call [`abort`](Self::abort) on unmount; it is idempotent.
///
/// Instances are independent; each owns its phase and transition tracker.
#[derive(Clone, Debug)]
pub struct OverlayController {
    config: OverlayConfig,
    phase: OverlayPhase,
    /// An open arrived while closing; replay it once the exit resolves.
    reopen_queued: bool,
    tracker: TransitionTracker<OverlayTransition>,
    aborted: bool,
}

impl OverlayController {
    /// Create a closed controller.
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            phase: OverlayPhase::Closed,
            reopen_queued: false,
            tracker: TransitionTracker::new(),
            aborted: false,
        }
    }

    /// Request the overlay to open.
    ///
    /// From [`OverlayPhase::Closed`] this computes the position *before* the
    /// enter transition starts. While closing, the request is queued and
    /// replayed when the close completes. While opening or open, it is a
    /// no-op.
    pub fn open(&mut self, now: f64) -> Vec<OverlayAction> {
        if self.aborted {
            return Vec::new();
        }
        match self.phase {
            OverlayPhase::Closed => self.start_opening(now),
            OverlayPhase::Closing => {
                trace!("overlay: open queued behind pending close");
                self.reopen_queued = true;
                Vec::new()
            }
            OverlayPhase::Opening | OverlayPhase::Open => Vec::new(),
        }
    }

    /// Close the overlay programmatically.
    ///
    /// Honored from [`OverlayPhase::Open`] and from
    /// [`OverlayPhase::Opening`] (abandoning the enter transition).
    pub fn close(&mut self, now: f64) -> Vec<OverlayAction> {
        if self.aborted {
            return Vec::new();
        }
        match self.phase {
            OverlayPhase::Open | OverlayPhase::Opening => {
                self.phase = OverlayPhase::Closing;
                self.reopen_queued = false;
                trace!("overlay: closing");
                self.tracker.clear();
                self.tracker
                    .begin(OverlayTransition::Exit, now, self.config.exit_duration_ms);
                let mut out = Vec::new();
                out.push(OverlayAction::StartExit);
                out
            }
            OverlayPhase::Closed | OverlayPhase::Closing => Vec::new(),
        }
    }

    /// Close in response to an interaction, gated by the configured
    /// [`DismissTriggers`](crate::DismissTriggers).
    pub fn dismiss(&mut self, reason: DismissReason, now: f64) -> Vec<OverlayAction> {
        if self.aborted || !self.config.triggers.contains(reason.trigger()) {
            return Vec::new();
        }
        self.close(now)
    }

    /// Report a finished host transition.
    ///
    /// Enter completion settles [`OverlayPhase::Open`]; exit completion
    /// settles [`OverlayPhase::Closed`], emits [`OverlayAction::Detach`],
    /// and replays a queued reopen.
    pub fn transition_ended(
        &mut self,
        transition: OverlayTransition,
        now: f64,
    ) -> Vec<OverlayAction> {
        if self.aborted || self.tracker.complete(transition).is_none() {
            return Vec::new();
        }
        self.advance(transition, now)
    }

    /// Resolve transitions whose completion event never arrived; a timed-out
    /// transition advances the lifecycle exactly as a completed one.
    pub fn poll(&mut self, now: f64) -> Vec<OverlayAction> {
        if self.aborted {
            return Vec::new();
        }
        let mut out = Vec::new();
        for r in self.tracker.poll(now) {
            out.extend(self.advance(r.property, now));
        }
        out
    }

    /// The viewport resized.
    ///
    /// Emits exactly one [`OverlayAction::ComputePosition`] while the
    /// overlay is opening or open; nothing otherwise.
    pub fn viewport_resized(&mut self) -> Vec<OverlayAction> {
        if self.aborted {
            return Vec::new();
        }
        match self.phase {
            OverlayPhase::Opening | OverlayPhase::Open => {
                let mut out = Vec::new();
                out.push(OverlayAction::ComputePosition);
                out
            }
            OverlayPhase::Closed | OverlayPhase::Closing => Vec::new(),
        }
    }

    /// Release the instance. Idempotent; everything afterwards is a no-op.
    pub fn abort(&mut self) {
        if self.aborted {
            return;
        }
        self.aborted = true;
        self.reopen_queued = false;
        self.tracker.clear();
        trace!("overlay: aborted");
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// The controller's configuration.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// True after [`abort`](Self::abort).
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    fn start_opening(&mut self, now: f64) -> Vec<OverlayAction> {
        self.phase = OverlayPhase::Opening;
        trace!("overlay: opening");
        self.tracker
            .begin(OverlayTransition::Enter, now, self.config.enter_duration_ms);
        let mut out = Vec::new();
        // Position is applied before the visible class toggles.
        out.push(OverlayAction::ComputePosition);
        out.push(OverlayAction::StartEnter);
        out
    }

    fn advance(&mut self, transition: OverlayTransition, now: f64) -> Vec<OverlayAction> {
        match (self.phase, transition) {
            (OverlayPhase::Opening, OverlayTransition::Enter) => {
                self.phase = OverlayPhase::Open;
                trace!("overlay: open");
                Vec::new()
            }
            (OverlayPhase::Closing, OverlayTransition::Exit) => {
                self.phase = OverlayPhase::Closed;
                trace!("overlay: closed");
                let mut out = Vec::new();
                out.push(OverlayAction::Detach);
                if self.reopen_queued {
                    self.reopen_queued = false;
                    out.extend(self.start_opening(now));
                }
                out
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn open_controller() -> OverlayController {
        let mut c = OverlayController::new(OverlayConfig::default());
        let _ = c.open(0.0);
        let _ = c.transition_ended(OverlayTransition::Enter, 160.0);
        assert_eq!(c.phase(), OverlayPhase::Open);
        c
    }

    #[test]
    fn open_computes_position_before_enter() {
        let mut c = OverlayController::new(OverlayConfig::default());
        let actions = c.open(0.0);
        assert_eq!(
            actions,
            vec![OverlayAction::ComputePosition, OverlayAction::StartEnter]
        );
        assert_eq!(c.phase(), OverlayPhase::Opening);
    }

    #[test]
    fn enter_completion_settles_open() {
        let mut c = OverlayController::new(OverlayConfig::default());
        let _ = c.open(0.0);
        assert!(c.transition_ended(OverlayTransition::Enter, 160.0).is_empty());
        assert_eq!(c.phase(), OverlayPhase::Open);
    }

    #[test]
    fn open_is_noop_while_opening_or_open() {
        let mut c = OverlayController::new(OverlayConfig::default());
        let _ = c.open(0.0);
        assert!(c.open(10.0).is_empty());
        let _ = c.transition_ended(OverlayTransition::Enter, 160.0);
        assert!(c.open(200.0).is_empty());
        assert_eq!(c.phase(), OverlayPhase::Open);
    }

    #[test]
    fn close_runs_exit_then_detaches() {
        let mut c = open_controller();
        let actions = c.close(200.0);
        assert_eq!(actions, vec![OverlayAction::StartExit]);
        assert_eq!(c.phase(), OverlayPhase::Closing);

        let actions = c.transition_ended(OverlayTransition::Exit, 360.0);
        assert_eq!(actions, vec![OverlayAction::Detach]);
        assert_eq!(c.phase(), OverlayPhase::Closed);
    }

    #[test]
    fn dismiss_respects_trigger_flags() {
        let mut c = open_controller();
        // Focus-outside is not in the default trigger set.
        assert!(c.dismiss(DismissReason::FocusOutside, 200.0).is_empty());
        assert_eq!(c.phase(), OverlayPhase::Open);

        let actions = c.dismiss(DismissReason::EscapeKey, 210.0);
        assert_eq!(actions, vec![OverlayAction::StartExit]);
        assert_eq!(c.phase(), OverlayPhase::Closing);
    }

    #[test]
    fn reopen_while_closing_restarts_after_close() {
        let mut c = open_controller();
        let _ = c.close(200.0);
        assert!(c.open(220.0).is_empty());
        assert_eq!(c.phase(), OverlayPhase::Closing);

        // Exit resolves: detach, then an immediate fresh opening.
        let actions = c.transition_ended(OverlayTransition::Exit, 360.0);
        assert_eq!(
            actions,
            vec![
                OverlayAction::Detach,
                OverlayAction::ComputePosition,
                OverlayAction::StartEnter,
            ]
        );
        assert_eq!(c.phase(), OverlayPhase::Opening);
    }

    #[test]
    fn resize_repositions_exactly_once_while_open() {
        let mut c = open_controller();
        assert_eq!(c.viewport_resized(), vec![OverlayAction::ComputePosition]);
    }

    #[test]
    fn resize_while_closed_or_closing_is_silent() {
        let mut c = OverlayController::new(OverlayConfig::default());
        assert!(c.viewport_resized().is_empty());

        let mut c = open_controller();
        let _ = c.close(200.0);
        assert!(c.viewport_resized().is_empty());
    }

    #[test]
    fn close_from_opening_abandons_enter() {
        let mut c = OverlayController::new(OverlayConfig::default());
        let _ = c.open(0.0);
        let actions = c.close(50.0);
        assert_eq!(actions, vec![OverlayAction::StartExit]);
        assert_eq!(c.phase(), OverlayPhase::Closing);

        // The abandoned enter transition can no longer advance anything.
        assert!(c.transition_ended(OverlayTransition::Enter, 160.0).is_empty());
        assert_eq!(c.phase(), OverlayPhase::Closing);
    }

    #[test]
    fn timed_out_exit_still_closes_and_replays_reopen() {
        let mut c = open_controller();
        let _ = c.close(200.0);
        let _ = c.open(220.0);

        // Exit completion never fires; the deadline resolves it.
        assert!(c.poll(300.0).is_empty());
        let actions = c.poll(10_000.0);
        assert_eq!(
            actions,
            vec![
                OverlayAction::Detach,
                OverlayAction::ComputePosition,
                OverlayAction::StartEnter,
            ]
        );
        assert_eq!(c.phase(), OverlayPhase::Opening);
    }

    #[test]
    fn abort_is_idempotent() {
        let mut c = open_controller();
        c.abort();
        c.abort();
        assert!(c.is_aborted());
        assert!(c.open(0.0).is_empty());
        assert!(c.close(0.0).is_empty());
        assert!(c.viewport_resized().is_empty());
        assert!(c.poll(10_000.0).is_empty());
    }

    #[test]
    fn full_cycle_returns_to_closed() {
        let mut c = OverlayController::new(OverlayConfig::default());
        let mut log: Vec<OverlayAction> = Vec::new();
        log.extend(c.open(0.0));
        log.extend(c.transition_ended(OverlayTransition::Enter, 160.0));
        log.extend(c.close(500.0));
        log.extend(c.transition_ended(OverlayTransition::Exit, 660.0));
        assert_eq!(
            log,
            vec![
                OverlayAction::ComputePosition,
                OverlayAction::StartEnter,
                OverlayAction::StartExit,
                OverlayAction::Detach,
            ]
        );
        assert_eq!(c.phase(), OverlayPhase::Closed);
    }
}
