// Copyright 2025 the Veranda Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the overlay: attachment side, configuration, lifecycle
//! phases, and the actions the controller emits.

/// Minimum gap an overlay keeps from every viewport edge, in px.
pub const DEFAULT_SCREEN_MARGIN: f64 = 8.0;

/// Default duration of the enter transition, in milliseconds.
pub const DEFAULT_ENTER_MS: f64 = 150.0;

/// Default duration of the exit transition, in milliseconds.
pub const DEFAULT_EXIT_MS: f64 = 150.0;

/// Side of the trigger the overlay attaches to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Side {
    /// Above the trigger, horizontally centered.
    Top,
    /// Below the trigger, horizontally centered.
    #[default]
    Bottom,
    /// To the trigger's left, vertically centered.
    Left,
    /// To the trigger's right, vertically centered.
    Right,
}

impl Side {
    /// Parse a side from loosely-typed configuration.
    ///
    /// Unknown names assert in development builds and fall back to
    /// [`Side::Bottom`] in release builds: a positioning edge case must not
    /// take the surrounding view tree down.
    pub fn from_name(name: &str) -> Self {
        match name {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "left" => Self::Left,
            "right" => Self::Right,
            _ => {
                debug_assert!(false, "unknown overlay side {name:?}");
                Self::Bottom
            }
        }
    }
}

bitflags::bitflags! {
    /// Interactions that auto-dismiss an open overlay.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DismissTriggers: u8 {
        /// The Escape key.
        const ESCAPE_KEY      = 0b0000_0001;
        /// A pointer press outside the overlay and its trigger.
        const POINTER_OUTSIDE = 0b0000_0010;
        /// Focus moving outside the overlay and its trigger.
        const FOCUS_OUTSIDE   = 0b0000_0100;
    }
}

impl Default for DismissTriggers {
    fn default() -> Self {
        Self::ESCAPE_KEY | Self::POINTER_OUTSIDE
    }
}

/// The interaction that asked an overlay to close.
///
/// Each reason maps to one [`DismissTriggers`] bit; the controller ignores
/// reasons whose bit is not enabled.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DismissReason {
    /// Escape pressed.
    EscapeKey,
    /// Pointer pressed outside.
    PointerOutside,
    /// Focus left.
    FocusOutside,
}

impl DismissReason {
    /// The trigger bit gating this reason.
    pub fn trigger(self) -> DismissTriggers {
        match self {
            Self::EscapeKey => DismissTriggers::ESCAPE_KEY,
            Self::PointerOutside => DismissTriggers::POINTER_OUTSIDE,
            Self::FocusOutside => DismissTriggers::FOCUS_OUTSIDE,
        }
    }
}

/// Configuration for an [`OverlayController`](crate::OverlayController).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    /// Requested attachment side.
    pub side: Side,
    /// Minimum gap from every viewport edge, in px.
    pub screen_margin: f64,
    /// Interactions allowed to auto-dismiss the overlay.
    pub triggers: DismissTriggers,
    /// Expected enter-transition duration, in milliseconds.
    pub enter_duration_ms: f64,
    /// Expected exit-transition duration, in milliseconds.
    pub exit_duration_ms: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            side: Side::default(),
            screen_margin: DEFAULT_SCREEN_MARGIN,
            triggers: DismissTriggers::default(),
            enter_duration_ms: DEFAULT_ENTER_MS,
            exit_duration_ms: DEFAULT_EXIT_MS,
        }
    }
}

/// Lifecycle phase of an overlay.
///
/// At most one of `Opening`/`Open`/`Closing` is active at a time.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OverlayPhase {
    /// Not mounted in the visible tree.
    Closed,
    /// Position computed; enter transition running.
    Opening,
    /// Fully visible.
    Open,
    /// Exit transition running.
    Closing,
}

/// Transition tracked by the lifecycle controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OverlayTransition {
    /// The open/visible transition.
    Enter,
    /// The close/hidden transition.
    Exit,
}

/// Actions the host applies, in order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OverlayAction {
    /// Measure trigger/overlay/viewport and apply
    /// [`position::reposition`](crate::position::reposition). Always emitted
    /// before [`OverlayAction::StartEnter`] so the overlay never flashes at
    /// an unclamped position.
    ComputePosition,
    /// Toggle the visible class / start the enter transition, then report
    /// [`OverlayTransition::Enter`] completion.
    StartEnter,
    /// Start the exit transition, then report [`OverlayTransition::Exit`]
    /// completion.
    StartExit,
    /// Remove the overlay from the visible tree.
    Detach,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parses_known_names() {
        assert_eq!(Side::from_name("top"), Side::Top);
        assert_eq!(Side::from_name("bottom"), Side::Bottom);
        assert_eq!(Side::from_name("left"), Side::Left);
        assert_eq!(Side::from_name("right"), Side::Right);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn unknown_side_falls_back_to_bottom() {
        assert_eq!(Side::from_name("diagonal"), Side::Bottom);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unknown overlay side")]
    fn unknown_side_asserts_in_debug() {
        let _ = Side::from_name("diagonal");
    }

    #[test]
    fn default_triggers_exclude_focus() {
        let t = DismissTriggers::default();
        assert!(t.contains(DismissTriggers::ESCAPE_KEY));
        assert!(t.contains(DismissTriggers::POINTER_OUTSIDE));
        assert!(!t.contains(DismissTriggers::FOCUS_OUTSIDE));
    }

    #[test]
    fn reasons_map_to_their_bits() {
        assert_eq!(DismissReason::EscapeKey.trigger(), DismissTriggers::ESCAPE_KEY);
        assert_eq!(
            DismissReason::PointerOutside.trigger(),
            DismissTriggers::POINTER_OUTSIDE
        );
        assert_eq!(
            DismissReason::FocusOutside.trigger(),
            DismissTriggers::FOCUS_OUTSIDE
        );
    }
}
