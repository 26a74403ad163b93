// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted drag-to-dismiss, printing the effect stream.
//!
//! The drag crosses the threshold, so the release commits: the fade is
//! skipped (live feedback already reached opacity 0), the container height
//! freezes, and the collapse runs before notify + detach.
//!
//! Run:
//! - `cargo run -p veranda_demos --example surface_dismiss`

use veranda_surface::{
    DismissController, DismissPhase, DragEvent, SurfaceConfig, SurfaceEffect, SurfaceProperty,
};

fn main() {
    let mut c = DismissController::new(SurfaceConfig::new(800.0));
    println!("threshold: {} px", c.dismiss_threshold());

    let script = [
        (DragEvent::PointerDown, 0.0),
        (DragEvent::PointerMove { dx: 90.0 }, 16.0),
        (DragEvent::PointerMove { dx: 90.0 }, 32.0),
        (DragEvent::PointerMove { dx: 90.0 }, 48.0),
        (DragEvent::PointerUp, 64.0),
    ];

    let mut all = Vec::new();
    for (event, now) in script {
        let fx = c.handle(event, now);
        println!("{event:?} -> {fx:?}");
        all.extend(fx);
    }

    // The host schedules the requested frame, then reports the collapse.
    let fx = c.frame(80.0);
    println!("frame -> {fx:?}");
    all.extend(fx);
    let fx = c.transition_ended(SurfaceProperty::Height, 400.0);
    println!("height done -> {fx:?}");
    all.extend(fx);

    assert_eq!(c.phase(), DismissPhase::Dismissed);

    // Ordering invariant: freeze before collapse before notify before detach.
    let pos = |needle: SurfaceEffect| all.iter().position(|e| *e == needle).unwrap();
    assert!(pos(SurfaceEffect::FreezeHeight) < pos(SurfaceEffect::CollapseHeight { duration_ms: 300.0 }));
    assert!(
        pos(SurfaceEffect::CollapseHeight { duration_ms: 300.0 })
            < pos(SurfaceEffect::NotifyDismissed)
    );
    assert!(pos(SurfaceEffect::NotifyDismissed) < pos(SurfaceEffect::Detach));
    println!("dismissed after {} effects", all.len());
}
