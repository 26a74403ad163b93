// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the surface controller: input events, emitted effects,
//! configuration, and the per-instance drag record.

/// Upper bound on the dismiss threshold in pixels.
///
/// The effective threshold is `min(viewport_width / 2, MAX_DISMISS_THRESHOLD)`,
/// so narrow viewports still require a proportionate swipe while wide ones
/// keep the gesture short.
pub const MAX_DISMISS_THRESHOLD: f64 = 200.0;

/// Default duration of the phase-A opacity fade, in milliseconds.
pub const DEFAULT_FADE_MS: f64 = 200.0;

/// Default duration of the phase-B height collapse, in milliseconds.
pub const DEFAULT_COLLAPSE_MS: f64 = 300.0;

/// Input events the host delivers to [`DismissController::handle`](crate::DismissController::handle).
///
/// Pointer events carry the native movement delta; touch events carry the
/// absolute X so the controller can difference successive samples itself.
/// `touch_count` is the number of active touch points: for `TouchStart` and
/// `TouchMove` it includes the reported touch, for `TouchEnd` it is the
/// number remaining after the lift.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragEvent {
    /// Primary pointer pressed on the surface or a descendant.
    PointerDown,
    /// Pointer moved; `dx` is the native horizontal movement delta in px.
    PointerMove {
        /// Native horizontal movement delta.
        dx: f64,
    },
    /// Primary pointer released.
    PointerUp,
    /// A touch gesture began.
    TouchStart {
        /// Active touch points, including this one.
        touch_count: u8,
    },
    /// A touch point moved; `x` is its absolute horizontal position in px.
    TouchMove {
        /// Absolute horizontal position of the touch.
        x: f64,
        /// Active touch points.
        touch_count: u8,
    },
    /// A touch point lifted.
    TouchEnd {
        /// Touch points remaining after the lift.
        touch_count: u8,
    },
}

/// Effects the host applies to the surface and its container.
///
/// Effects are emitted in application order. Geometry-free by construction:
/// the host resolves "the surface" and "the container" through the handles it
/// bound at mount, never by traversing siblings at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceEffect {
    /// Set the surface's horizontal translate, in px.
    SetOffset(f64),
    /// Set the surface's opacity in `[0, 1]`.
    SetOpacity(f64),
    /// Suppress the native default for the event being handled
    /// (scroll/selection during a held drag).
    SuppressDefault,
    /// Animate translate and opacity back to `(0, 1)` with a transition.
    SpringBack,
    /// Phase A: animate the surface's opacity to 0, then report
    /// [`SurfaceProperty::Opacity`] completion.
    BeginFade {
        /// Expected transition duration in milliseconds.
        duration_ms: f64,
    },
    /// Measure the container's rendered height and set it explicitly, so the
    /// collapse animates from a concrete value.
    FreezeHeight,
    /// Call [`DismissController::frame`](crate::DismissController::frame) on
    /// the next animation frame.
    RequestFrame,
    /// Phase B: animate the container's height to 0, then report
    /// [`SurfaceProperty::Height`] completion.
    CollapseHeight {
        /// Expected transition duration in milliseconds.
        duration_ms: f64,
    },
    /// Invoke the embedder's dismiss callback, if one was provided. Hosts
    /// without a callback skip the call but still detach.
    NotifyDismissed,
    /// Remove the container from the view tree.
    Detach,
}

/// Animated property reported back through
/// [`DismissController::transition_ended`](crate::DismissController::transition_ended).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SurfaceProperty {
    /// The surface's opacity (phase A).
    Opacity,
    /// The container's height (phase B).
    Height,
}

/// Lifecycle of a dismiss sequence.
///
/// Drag input is accepted only while `Idle`; everything past that is the
/// exit animation, which also makes the sequence idempotent under repeated
/// release events.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DismissPhase {
    /// No exit in progress; drag input is live.
    Idle,
    /// Phase A: opacity fading to 0.
    FadingOut,
    /// Height frozen; waiting for the next animation frame to start the
    /// collapse.
    AwaitingCollapseFrame,
    /// Phase B: height collapsing to 0.
    Collapsing,
    /// Exit complete; notify and detach have been emitted.
    Dismissed,
}

/// Configuration for a [`DismissController`](crate::DismissController).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Viewport width at mount, in px. Determines the dismiss threshold.
    pub viewport_width: f64,
    /// Expected duration of the phase-A fade, in milliseconds.
    pub fade_duration_ms: f64,
    /// Expected duration of the phase-B collapse, in milliseconds.
    pub collapse_duration_ms: f64,
}

impl SurfaceConfig {
    /// Configuration with default transition durations.
    pub fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            fade_duration_ms: DEFAULT_FADE_MS,
            collapse_duration_ms: DEFAULT_COLLAPSE_MS,
        }
    }
}

/// Per-instance drag record.
///
/// Owned by the controller — one record per mounted surface, nothing shared
/// across instances.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragState {
    /// Pointer currently down on the surface.
    pub held: bool,
    /// Cumulative horizontal displacement since drag start, in px.
    pub motion: f64,
    /// Last observed touch X. Pointer events use native deltas instead, and
    /// the first touch sample of a gesture contributes zero.
    pub last_touch_x: Option<f64>,
    /// Commit distance in px, fixed at mount.
    pub dismiss_threshold: f64,
}

impl DragState {
    /// Fresh state for a surface mounted at the given viewport width.
    pub fn new(viewport_width: f64) -> Self {
        Self {
            held: false,
            motion: 0.0,
            last_touch_x: None,
            dismiss_threshold: (viewport_width / 2.0).min(MAX_DISMISS_THRESHOLD),
        }
    }

    /// Live opacity for the current motion: `clamp(1 - |motion| / threshold, 0, 1)`.
    pub fn opacity(&self) -> f64 {
        (1.0 - self.motion.abs() / self.dismiss_threshold).clamp(0.0, 1.0)
    }
}
