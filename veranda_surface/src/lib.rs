// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=veranda_surface --heading-base-level=0

//! Veranda Surface: a deterministic drag-to-dismiss controller.
//!
//! ## Overview
//!
//! A dismissible surface (a toast, a notification card) can be removed with a
//! horizontal swipe past a distance threshold. This crate implements the
//! decision logic as a host-agnostic state machine: the host feeds it typed
//! input events ([`DragEvent`]) plus transition/frame callbacks, and applies
//! the [`SurfaceEffect`]s it emits. The controller never touches a document;
//! it does not know what a DOM node is.
//!
//! ## Gesture model
//!
//! - While the pointer is held, horizontal movement accumulates into
//!   `motion`. Each move emits live feedback: a translate of `motion` px and
//!   an opacity of `clamp(1 - |motion| / threshold, 0, 1)`, plus a request to
//!   suppress the native default (scroll/selection).
//! - On release, `|motion|` beyond the dismiss threshold
//!   (`min(viewport_width / 2, 200)` px, fixed when the controller is built)
//!   commits the dismissal; anything less springs back to rest.
//! - Touch deltas are computed against the last observed touch X; the first
//!   sample of a touch gesture contributes zero. Events carrying more than
//!   one active touch point are ignored outright.
//!
//! ## Two-phase exit
//!
//! Committed dismissals (and programmatic ones via
//! [`DismissController::dismiss`]) run a two-phase exit so the surface's
//! container can collapse smoothly:
//!
//! 1. Fade the surface's opacity to zero — skipped when the drag already
//!    faded it out.
//! 2. Freeze the container's rendered height to a concrete value, then on
//!    the next animation frame animate it to zero.
//!
//! Only after both transitions resolve does the controller emit
//! [`SurfaceEffect::NotifyDismissed`] followed by [`SurfaceEffect::Detach`].
//! Transition completion is tracked through
//! [`veranda_transition::TransitionTracker`], so a completion event that
//! never fires degrades to a deadline-driven step instead of a stalled exit.
//!
//! ## Teardown
//!
//! [`DismissController::abort`] is the single cancellation point: it releases
//! the instance atomically and is idempotent, mirroring an abort-handle that
//! detaches every host listener at once.
//!
//! ## Example
//!
//! ```
//! use veranda_surface::{DismissController, DragEvent, SurfaceConfig, SurfaceEffect};
//!
//! let mut c = DismissController::new(SurfaceConfig::new(800.0));
//! assert_eq!(c.dismiss_threshold(), 200.0);
//!
//! let _ = c.handle(DragEvent::PointerDown, 0.0);
//! let fx = c.handle(DragEvent::PointerMove { dx: 50.0 }, 16.0);
//! assert!(fx.contains(&SurfaceEffect::SetOffset(50.0)));
//! assert!(fx.contains(&SurfaceEffect::SuppressDefault));
//!
//! // Well short of the threshold: the surface springs back.
//! let fx = c.handle(DragEvent::PointerUp, 32.0);
//! assert_eq!(fx, vec![SurfaceEffect::SpringBack]);
//! assert_eq!(c.motion(), 0.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod types;

pub use controller::DismissController;
pub use types::{
    DEFAULT_COLLAPSE_MS, DEFAULT_FADE_MS, DismissPhase, DragEvent, DragState,
    MAX_DISMISS_THRESHOLD, SurfaceConfig, SurfaceEffect, SurfaceProperty,
};
