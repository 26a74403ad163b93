// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure positioning math: side-relative anchor points, the rendered
//! rectangle after the host's centering translate, and per-axis viewport
//! clamping.
//!
//! ## Clamp semantics
//!
//! Corrections apply sequentially — left, right, top, bottom — each against
//! the rectangle as shifted so far. When the overlay fits inside
//! `viewport − 2·margin` on an axis, at most one correction fires and the
//! result respects the margin on both edges of that axis. When it does not
//! fit, the later correction wins and the rectangle overflows the earlier
//! edge best-effort; positioning never fails.

use kurbo::{Point, Rect, Size, Vec2};

use crate::types::Side;

/// Pre-translate anchor point for an overlay attached to `side` of `anchor`.
///
/// For [`Side::Top`] and [`Side::Bottom`] this is the horizontal midpoint of
/// the trigger; the host centers the overlay on it with a `-50%` translate.
/// For [`Side::Left`] and [`Side::Right`] the vertical midpoint, centered
/// likewise. `overlay` participates only where the overlay's own extent
/// offsets the anchor (its height for `Top`, its width for `Left`).
pub fn anchor_point(anchor: Rect, overlay: Size, side: Side) -> Point {
    match side {
        Side::Bottom => Point::new(anchor.x0 + anchor.width() / 2.0, anchor.y1),
        Side::Top => Point::new(anchor.x0 + anchor.width() / 2.0, anchor.y0 - overlay.height),
        Side::Left => Point::new(anchor.x0 - overlay.width, anchor.y0 + anchor.height() / 2.0),
        Side::Right => Point::new(anchor.x1, anchor.y0 + anchor.height() / 2.0),
    }
}

/// Final visual rectangle of an overlay whose anchor point is `origin`,
/// after the host's centering translate for `side`.
pub fn rendered_rect(origin: Point, overlay: Size, side: Side) -> Rect {
    let top_left = match side {
        Side::Top | Side::Bottom => Point::new(origin.x - overlay.width / 2.0, origin.y),
        Side::Left | Side::Right => Point::new(origin.x, origin.y - overlay.height / 2.0),
    };
    Rect::from_origin_size(top_left, overlay)
}

/// Shift that brings `rect` inside the margin-inset viewport, best-effort.
///
/// Each axis clamps independently; on an axis both corrections may apply
/// when the rectangle is larger than the available space, in which case the
/// last one wins (see module docs).
pub fn clamp_shift(rect: Rect, viewport: Size, margin: f64) -> Vec2 {
    let mut shift = Vec2::ZERO;
    let mut r = rect;

    if r.x0 < margin {
        let dx = margin - r.x0;
        shift.x += dx;
        r = r + Vec2::new(dx, 0.0);
    }
    if r.x1 > viewport.width - margin {
        let dx = r.x1 - (viewport.width - margin);
        shift.x -= dx;
        r = r + Vec2::new(-dx, 0.0);
    }
    if r.y0 < margin {
        let dy = margin - r.y0;
        shift.y += dy;
        r = r + Vec2::new(0.0, dy);
    }
    if r.y1 > viewport.height - margin {
        let dy = r.y1 - (viewport.height - margin);
        shift.y -= dy;
    }
    shift
}

/// Compute the clamped anchor point for an overlay.
///
/// This is the positioner's whole contract: the side-relative anchor point
/// of [`anchor_point`], shifted by [`clamp_shift`] of the rendered
/// rectangle. The host assigns the result before toggling the visible
/// class, so the overlay never flashes at an unclamped position.
pub fn reposition(anchor: Rect, overlay: Size, side: Side, viewport: Size, margin: f64) -> Point {
    let origin = anchor_point(anchor, overlay, side);
    let shift = clamp_shift(rendered_rect(origin, overlay, side), viewport, margin);
    origin + shift
}
