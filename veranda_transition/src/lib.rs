// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=veranda_transition --heading-base-level=0

//! Veranda Transition: awaitable transition completion with a deadline fallback.
//!
//! ## Overview
//!
//! Host animation systems report transition completion through events
//! (`transitionend` in a browser, a frame callback elsewhere). Sequencing
//! multi-phase animations on top of raw completion callbacks leads to nested
//! listeners and, worse, to sequences that stall forever when a completion
//! event never fires — for example when the animated property did not
//! actually change value.
//!
//! This crate provides a small registry, [`TransitionTracker`], that turns
//! completion handling into linear control flow:
//!
//! - [`TransitionTracker::begin`] registers a pending transition under a
//!   caller-chosen property key with an expected duration.
//! - [`TransitionTracker::complete`] resolves it when the host reports the
//!   completion event. Stray completions for properties that were never
//!   begun are ignored.
//! - [`TransitionTracker::poll`] resolves transitions whose deadline
//!   (duration plus [`TIMEOUT_MARGIN_MS`]) has passed as [`TransitionOutcome::TimedOut`].
//!   Callers treat a timed-out transition exactly like a completed one, so a
//!   lost event degrades to a slightly late step instead of a leaked await.
//!
//! The tracker has no internal clock; callers pass the current time in
//! milliseconds to every time-sensitive operation. This keeps the crate
//! deterministic and trivially testable.
//!
//! ## Example
//!
//! ```
//! use veranda_transition::{TransitionTracker, TransitionOutcome, TIMEOUT_MARGIN_MS};
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Prop { Opacity, Height }
//!
//! let mut tracker = TransitionTracker::new();
//! tracker.begin(Prop::Opacity, 0.0, 200.0);
//!
//! // The host reports the completion event.
//! let done = tracker.complete(Prop::Opacity).unwrap();
//! assert_eq!(done.outcome, TransitionOutcome::Completed);
//!
//! // A transition whose event never fires resolves via the deadline.
//! tracker.begin(Prop::Height, 0.0, 200.0);
//! assert!(tracker.poll(100.0).is_empty());
//! let late = tracker.poll(200.0 + TIMEOUT_MARGIN_MS + 1.0);
//! assert_eq!(late.len(), 1);
//! assert_eq!(late[0].outcome, TransitionOutcome::TimedOut);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod tracker;

pub use tracker::{Resolution, TIMEOUT_MARGIN_MS, TransitionOutcome, TransitionTracker};
