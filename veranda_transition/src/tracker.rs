// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pending-transition registry with completion and deadline resolution.

use alloc::vec::Vec;

/// Grace added to a transition's expected duration before [`TransitionTracker::poll`]
/// considers its completion event lost.
///
/// Host event systems routinely deliver completion a frame or two late; the
/// margin keeps the fallback from racing a slightly tardy event.
pub const TIMEOUT_MARGIN_MS: f64 = 100.0;

/// How a pending transition resolved.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransitionOutcome {
    /// The host reported the completion event.
    Completed,
    /// The deadline passed without a completion event.
    TimedOut,
}

/// A resolved transition, returned by [`TransitionTracker::complete`] and
/// [`TransitionTracker::poll`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Resolution<P> {
    /// The property the transition animated.
    pub property: P,
    /// Whether the host reported completion or the deadline fired.
    pub outcome: TransitionOutcome,
}

#[derive(Copy, Clone, Debug)]
struct Pending<P> {
    property: P,
    deadline: f64,
}

/// Registry of pending transitions keyed by a caller-chosen property type.
///
/// Each [`begin`](Self::begin) resolves at most once: either through
/// [`complete`](Self::complete) when the host reports the completion event,
/// or through [`poll`](Self::poll) once the deadline has passed. Callers are
/// expected to treat both outcomes identically when sequencing, so a lost
/// completion event cannot stall a multi-phase animation.
///
/// Times are caller-supplied milliseconds on any monotonic scale; the tracker
/// only compares them.
#[derive(Clone, Debug)]
pub struct TransitionTracker<P: Copy + Eq> {
    pending: Vec<Pending<P>>,
}

impl<P: Copy + Eq> Default for TransitionTracker<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy + Eq> TransitionTracker<P> {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Register a pending transition for `property`.
    ///
    /// The deadline is `now + duration_ms + `[`TIMEOUT_MARGIN_MS`]. Beginning
    /// a property that is already pending restarts its deadline, matching a
    /// restarted host transition replacing the previous one.
    pub fn begin(&mut self, property: P, now: f64, duration_ms: f64) {
        let deadline = now + duration_ms + TIMEOUT_MARGIN_MS;
        if let Some(p) = self.pending.iter_mut().find(|p| p.property == property) {
            p.deadline = deadline;
        } else {
            self.pending.push(Pending { property, deadline });
        }
    }

    /// Resolve `property` as [`TransitionOutcome::Completed`].
    ///
    /// Returns `None` when the property is not pending. Completion events for
    /// properties that never changed (or already resolved) are expected from
    /// real hosts and must not disturb sequencing.
    pub fn complete(&mut self, property: P) -> Option<Resolution<P>> {
        let idx = self.pending.iter().position(|p| p.property == property)?;
        self.pending.swap_remove(idx);
        Some(Resolution {
            property,
            outcome: TransitionOutcome::Completed,
        })
    }

    /// Resolve every pending transition whose deadline has passed as
    /// [`TransitionOutcome::TimedOut`], in registration order.
    pub fn poll(&mut self, now: f64) -> Vec<Resolution<P>> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].deadline <= now {
                let p = self.pending.remove(i);
                out.push(Resolution {
                    property: p.property,
                    outcome: TransitionOutcome::TimedOut,
                });
            } else {
                i += 1;
            }
        }
        out
    }

    /// True when `property` has been begun and not yet resolved.
    pub fn is_pending(&self, property: P) -> bool {
        self.pending.iter().any(|p| p.property == property)
    }

    /// Number of pending transitions.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Drop all pending transitions without resolving them.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
