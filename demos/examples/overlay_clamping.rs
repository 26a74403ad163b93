// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchored positioning with and without viewport clamping.
//!
//! Run:
//! - `cargo run -p veranda_demos --example overlay_clamping`

use kurbo::{Rect, Size};
use veranda_overlay::{Side, position};

fn main() {
    let overlay = Size::new(200.0, 100.0);
    let viewport = Size::new(1000.0, 800.0);
    let margin = 8.0;

    // A trigger comfortably inside the viewport: no clamping.
    let trigger = Rect::new(100.0, 100.0, 150.0, 120.0);
    let p = position::reposition(trigger, overlay, Side::Bottom, viewport, margin);
    let r = position::rendered_rect(p, overlay, Side::Bottom);
    println!("== Centered ==\n  anchor point {p:?}\n  rendered {r:?}");
    assert_eq!((p.x, p.y), (125.0, 120.0));
    assert_eq!((r.x0, r.x1), (25.0, 225.0));

    // The same trigger flush against the left edge: the rendered rect would
    // overflow, so the left edge clamps to exactly the margin.
    let trigger = Rect::new(0.0, 100.0, 50.0, 120.0);
    let p = position::reposition(trigger, overlay, Side::Bottom, viewport, margin);
    let r = position::rendered_rect(p, overlay, Side::Bottom);
    println!("== Clamped ==\n  anchor point {p:?}\n  rendered {r:?}");
    assert_eq!(r.x0, margin);

    // Every side around one trigger.
    let trigger = Rect::new(450.0, 390.0, 550.0, 410.0);
    for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
        let p = position::reposition(trigger, overlay, side, viewport, margin);
        let r = position::rendered_rect(p, overlay, side);
        println!("{side:?}: rendered {r:?}");
        assert!(r.x0 >= margin && r.x1 <= viewport.width - margin);
        assert!(r.y0 >= margin && r.y1 <= viewport.height - margin);
    }
}
