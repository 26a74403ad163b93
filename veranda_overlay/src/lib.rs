// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=veranda_overlay --heading-base-level=0

//! Veranda Overlay: anchored-overlay positioning and lifecycle.
//!
//! ## Overview
//!
//! An anchored overlay (popover, dropdown, tooltip panel) is positioned
//! relative to a trigger element and kept inside the viewport by a minimum
//! screen margin. This crate splits the problem the way the logic actually
//! factors:
//!
//! - [`position`] is pure math over kurbo geometry: given the trigger's
//!   bounding rect, the overlay's measured size, a [`Side`], the viewport,
//!   and a margin, [`position::reposition`] returns the anchor point the
//!   host should assign — already shifted so the *rendered* rectangle
//!   respects the margin on every edge it can.
//! - [`lifecycle`] is the stateful wrapper: an [`OverlayController`] walking
//!   `Closed → Opening → Open → Closing → Closed`, telling the host *when*
//!   to recompute the position (open start and viewport resize — never
//!   scroll), when to run the enter/exit transitions, and when to detach.
//!
//! ## Centering contract
//!
//! The positioner emits the pre-translate anchor point. For [`Side::Top`]
//! and [`Side::Bottom`] the host centers the overlay horizontally with a
//! `-50%` translate; for [`Side::Left`] and [`Side::Right`] it centers
//! vertically. [`position::rendered_rect`] applies the same translate, so
//! clamping — and every test — operates on final rendered edges, not anchor
//! points.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use veranda_overlay::{Side, position};
//!
//! let trigger = Rect::new(100.0, 100.0, 150.0, 120.0);
//! let overlay = Size::new(200.0, 100.0);
//! let viewport = Size::new(1000.0, 800.0);
//!
//! let p = position::reposition(trigger, overlay, Side::Bottom, viewport, 8.0);
//! assert_eq!(p, Point::new(125.0, 120.0));
//!
//! // Rendered edges after the host's centering translate.
//! let r = position::rendered_rect(p, overlay, Side::Bottom);
//! assert_eq!((r.x0, r.x1), (25.0, 225.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod lifecycle;
pub mod position;
pub mod types;

pub use lifecycle::OverlayController;
pub use types::{
    DEFAULT_ENTER_MS, DEFAULT_EXIT_MS, DEFAULT_SCREEN_MARGIN, DismissReason, DismissTriggers,
    OverlayAction, OverlayConfig, OverlayPhase, OverlayTransition, Side,
};
