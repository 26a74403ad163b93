// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay lifecycle walkthrough: open, escape-dismiss, and a reopen that
//! arrives while the close is still animating.
//!
//! Run:
//! - `cargo run -p veranda_demos --example overlay_lifecycle`

use veranda_overlay::{
    DismissReason, OverlayAction, OverlayConfig, OverlayController, OverlayPhase, OverlayTransition,
};

fn main() {
    let mut c = OverlayController::new(OverlayConfig::default());

    let actions = c.open(0.0);
    println!("open -> {actions:?}");
    assert_eq!(
        actions,
        vec![OverlayAction::ComputePosition, OverlayAction::StartEnter]
    );

    let _ = c.transition_ended(OverlayTransition::Enter, 160.0);
    println!("entered -> {:?}", c.phase());
    assert_eq!(c.phase(), OverlayPhase::Open);

    // A resize while open repositions exactly once.
    let actions = c.viewport_resized();
    println!("resize -> {actions:?}");
    assert_eq!(actions, vec![OverlayAction::ComputePosition]);

    // Escape starts the close...
    let actions = c.dismiss(DismissReason::EscapeKey, 500.0);
    println!("escape -> {actions:?}");
    assert_eq!(actions, vec![OverlayAction::StartExit]);

    // ...and a reopen lands before the exit transition finishes.
    let actions = c.open(520.0);
    println!("reopen while closing -> {actions:?} (queued)");
    assert!(actions.is_empty());

    let actions = c.transition_ended(OverlayTransition::Exit, 660.0);
    println!("exit done -> {actions:?}");
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
