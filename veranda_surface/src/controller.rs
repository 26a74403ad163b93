// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller implementation.
//!
//! ## Overview
//!
//! Consumes drag input and transition/frame callbacks, and emits the effect
//! sequence that drives spring-back or the two-phase exit.
//!
//! ## Sequencing
//!
//! - Drag input is accepted only while the phase is
//!   [`DismissPhase::Idle`]; once an exit starts, further input is inert,
//!   which is what makes a dismissal run at most once per instance.
//! - The drag record is reset synchronously when an exit begins — before the
//!   first awaited transition — so no second sequence can interleave.
//! - Each awaited transition is registered with a
//!   [`TransitionTracker`]; [`DismissController::poll`] turns a lost
//!   completion event into a deadline-driven step.

use alloc::vec::Vec;

use veranda_transition::TransitionTracker;

use crate::types::{
    DismissPhase, DragEvent, DragState, SurfaceConfig, SurfaceEffect, SurfaceProperty,
};

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "trace")]
        {
            log::trace!($($arg)*);
        }
    }};
}

/// Drag-to-dismiss state machine for one mounted surface.
///
/// ## Usage
///
/// - Construct with [`DismissController::new`] at mount, from the viewport
///   width at that time.
/// - Feed native input through [`DismissController::handle`] and apply the
///   returned [`SurfaceEffect`]s in order.
/// - Report transition completion through
///   [`DismissController::transition_ended`], animation frames through
///   [`DismissController::frame`], and call
///   [`DismissController::poll`] from the host's tick so stuck transitions
///   resolve by deadline.
/// - Call [`DismissController::abort`] on unmount; it is idempotent and
///   releases the instance in one step.
///
/// Instances are fully independent: each owns its [`DragState`], its phase,
/// and its transition tracker. Nothing is shared.
#[derive(Clone, Debug)]
pub struct DismissController {
    config: SurfaceConfig,
    drag: DragState,
    phase: DismissPhase,
    /// Last opacity applied to the surface (1.0 at rest). Decides whether the
    /// exit needs the phase-A fade at all.
    opacity: f64,
    tracker: TransitionTracker<SurfaceProperty>,
    aborted: bool,
}

impl DismissController {
    /// Create a controller for a freshly mounted surface.
    pub fn new(config: SurfaceConfig) -> Self {
        Self {
            drag: DragState::new(config.viewport_width),
            config,
            phase: DismissPhase::Idle,
            opacity: 1.0,
            tracker: TransitionTracker::new(),
            aborted: false,
        }
    }

    /// Handle one native input event, returning effects to apply in order.
    ///
    /// Events carrying more than one active touch point are ignored without
    /// any state mutation. Once an exit sequence has started, drag input is
    /// inert.
    pub fn handle(&mut self, event: DragEvent, now: f64) -> Vec<SurfaceEffect> {
        if self.aborted || self.phase != DismissPhase::Idle {
            return Vec::new();
        }
        match event {
            DragEvent::PointerDown => self.press(false),
            DragEvent::TouchStart { touch_count } => {
                if touch_count > 1 {
                    Vec::new()
                } else {
                    self.press(true)
                }
            }
            DragEvent::PointerMove { dx } => self.moved(dx),
            DragEvent::TouchMove { x, touch_count } => {
                if touch_count > 1 || !self.drag.held {
                    return Vec::new();
                }
                // First sample of a gesture only seeds the reference X.
                let dx = self.drag.last_touch_x.map_or(0.0, |last| x - last);
                self.drag.last_touch_x = Some(x);
                self.moved(dx)
            }
            DragEvent::PointerUp => self.release(now),
            DragEvent::TouchEnd { touch_count } => {
                // Release fires when the last finger lifts.
                if touch_count == 0 {
                    self.release(now)
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Begin the exit sequence without a gesture (close button, auto-timeout).
    ///
    /// No-op unless the phase is [`DismissPhase::Idle`]. The phase-A fade is
    /// skipped when the surface is already fully transparent.
    pub fn dismiss(&mut self, now: f64) -> Vec<SurfaceEffect> {
        if self.aborted || self.phase != DismissPhase::Idle {
            return Vec::new();
        }
        self.begin_exit(now)
    }

    /// Report a finished host transition for `property`.
    ///
    /// Completions for properties that were never begun (a `transitionend`
    /// for a property that did not change) are ignored.
    pub fn transition_ended(&mut self, property: SurfaceProperty, now: f64) -> Vec<SurfaceEffect> {
        if self.aborted || self.tracker.complete(property).is_none() {
            return Vec::new();
        }
        self.advance(property, now)
    }

    /// Animation-frame callback requested via [`SurfaceEffect::RequestFrame`].
    ///
    /// Starts the phase-B collapse from the frozen height.
    pub fn frame(&mut self, now: f64) -> Vec<SurfaceEffect> {
        if self.aborted || self.phase != DismissPhase::AwaitingCollapseFrame {
            return Vec::new();
        }
        self.phase = DismissPhase::Collapsing;
        trace!("surface: collapsing");
        self.tracker
            .begin(SurfaceProperty::Height, now, self.config.collapse_duration_ms);
        let mut out = Vec::new();
        out.push(SurfaceEffect::CollapseHeight {
            duration_ms: self.config.collapse_duration_ms,
        });
        out
    }

    /// Resolve transitions whose completion event never arrived.
    ///
    /// A timed-out transition advances the sequence exactly as a completed
    /// one; hosts call this from their tick.
    pub fn poll(&mut self, now: f64) -> Vec<SurfaceEffect> {
        if self.aborted {
            return Vec::new();
        }
        let mut out = Vec::new();
        for r in self.tracker.poll(now) {
            out.extend(self.advance(r.property, now));
        }
        out
    }

    /// Release the instance. Idempotent: the second and later calls are
    /// no-ops, matching an abort handle whose listeners are removed once.
    pub fn abort(&mut self) {
        if self.aborted {
            return;
        }
        self.aborted = true;
        self.tracker.clear();
        trace!("surface: aborted");
    }

    /// Update the viewport width used to derive the dismiss threshold.
    ///
    /// Ignored while a drag is held: an in-flight gesture keeps the threshold
    /// it started with.
    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        if self.drag.held {
            return;
        }
        self.config.viewport_width = viewport_width;
        self.drag.dismiss_threshold = DragState::new(viewport_width).dismiss_threshold;
    }

    /// Current phase of the exit sequence.
    pub fn phase(&self) -> DismissPhase {
        self.phase
    }

    /// Cumulative horizontal displacement, in px.
    pub fn motion(&self) -> f64 {
        self.drag.motion
    }

    /// True while the pointer is down on the surface.
    pub fn is_held(&self) -> bool {
        self.drag.held
    }

    /// Commit distance in px.
    pub fn dismiss_threshold(&self) -> f64 {
        self.drag.dismiss_threshold
    }

    /// The per-instance drag record.
    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// True after [`abort`](Self::abort).
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    fn press(&mut self, touch: bool) -> Vec<SurfaceEffect> {
        self.drag.held = true;
        // Motion is intentionally not reset: a re-press continues the
        // accumulated displacement until a spring-back or exit clears it.
        if touch {
            self.drag.last_touch_x = None;
        }
        Vec::new()
    }

    fn moved(&mut self, dx: f64) -> Vec<SurfaceEffect> {
        if !self.drag.held {
            return Vec::new();
        }
        self.drag.motion += dx;
        self.opacity = self.drag.opacity();
        let mut out = Vec::new();
        out.push(SurfaceEffect::SetOffset(self.drag.motion));
        out.push(SurfaceEffect::SetOpacity(self.opacity));
        out.push(SurfaceEffect::SuppressDefault);
        out
    }

    fn release(&mut self, now: f64) -> Vec<SurfaceEffect> {
        self.drag.held = false;
        self.drag.last_touch_x = None;
        if self.drag.motion.abs() > self.drag.dismiss_threshold {
            trace!("surface: commit at motion {}", self.drag.motion);
            self.begin_exit(now)
        } else if self.drag.motion != 0.0 {
            trace!("surface: spring-back from motion {}", self.drag.motion);
            self.drag.motion = 0.0;
            self.opacity = 1.0;
            let mut out = Vec::new();
            out.push(SurfaceEffect::SpringBack);
            out
        } else {
            Vec::new()
        }
    }

    /// Start the exit sequence. The drag record is cleared here,
    /// synchronously, before the first awaited transition.
    fn begin_exit(&mut self, now: f64) -> Vec<SurfaceEffect> {
        self.drag.held = false;
        self.drag.motion = 0.0;
        self.drag.last_touch_x = None;
        if self.opacity > 0.0 {
            self.phase = DismissPhase::FadingOut;
            trace!("surface: fading out");
            self.tracker
                .begin(SurfaceProperty::Opacity, now, self.config.fade_duration_ms);
            let mut out = Vec::new();
            out.push(SurfaceEffect::BeginFade {
                duration_ms: self.config.fade_duration_ms,
            });
            out
        } else {
            // The drag already faded the surface out; go straight to the
            // height collapse.
            self.freeze_for_collapse()
        }
    }

    fn freeze_for_collapse(&mut self) -> Vec<SurfaceEffect> {
        self.phase = DismissPhase::AwaitingCollapseFrame;
        trace!("surface: height frozen, awaiting frame");
        let mut out = Vec::new();
        out.push(SurfaceEffect::FreezeHeight);
        out.push(SurfaceEffect::RequestFrame);
        out
    }

    fn advance(&mut self, property: SurfaceProperty, _now: f64) -> Vec<SurfaceEffect> {
        match (self.phase, property) {
            (DismissPhase::FadingOut, SurfaceProperty::Opacity) => {
                self.opacity = 0.0;
                self.freeze_for_collapse()
            }
            (DismissPhase::Collapsing, SurfaceProperty::Height) => {
                self.phase = DismissPhase::Dismissed;
                trace!("surface: dismissed");
                let mut out = Vec::new();
                out.push(SurfaceEffect::NotifyDismissed);
                out.push(SurfaceEffect::Detach);
                out
            }
            _ => Vec::new(),
        }
    }
}
