//! Percentage and threshold math.
//!
//! Free functions translating a horizontal drag offset into percentages,
//! trigger states, indicator colors, icon alpha, and exit-animation timing.
//! Threshold arguments are passed in explicitly; callers read them from the
//! live [`SwipeConfig`](crate::SwipeConfig) so mid-drag reconfiguration takes
//! effect immediately.
//!
//! Boundary-comparison convention: state and view resolution are inclusive
//! (`>=` / `<=`), color resolution is exclusive (`>` / `<`). Equality at a
//! trigger therefore fires the action while the indicator still shows the
//! previous color.

use crate::config::defaults;
use crate::state::{SwipeDirection, TriggerState, TriggerStates};

/// Clamp a drag offset to the row width on either side.
pub fn clamp_offset(offset: f32, width: f32) -> f32 {
    offset.clamp(-width, width)
}

/// Offset for a width fraction, clamped to the row width on either side.
pub fn offset_for(fraction: f32, width: f32) -> f32 {
    clamp_offset(fraction * width, width)
}

/// Drag offset as a fraction of the row width, in [-1, 1].
pub fn percentage(offset: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    (offset / width).clamp(-1.0, 1.0)
}

/// Which side of the origin the drag currently sits on.
pub fn direction(percentage: f32) -> SwipeDirection {
    if percentage < 0.0 {
        SwipeDirection::Left
    } else if percentage > 0.0 {
        SwipeDirection::Right
    } else {
        SwipeDirection::Center
    }
}

/// Trigger state resolved at release time.
///
/// Ordered overrides: right-short, then right-long, then left-short, then
/// left-long; a later match wins, so a long state beats the short state on
/// the same side. Only states present in `configured` participate.
pub fn trigger_state(
    percentage: f32,
    short_trigger: f32,
    long_trigger: f32,
    configured: TriggerStates,
) -> TriggerState {
    let mut state = TriggerState::None;

    if percentage >= short_trigger && configured.contains(TriggerState::RightShort) {
        state = TriggerState::RightShort;
    }
    if percentage >= long_trigger && configured.contains(TriggerState::RightLong) {
        state = TriggerState::RightLong;
    }
    if percentage <= -short_trigger && configured.contains(TriggerState::LeftShort) {
        state = TriggerState::LeftShort;
    }
    if percentage <= -long_trigger && configured.contains(TriggerState::LeftLong) {
        state = TriggerState::LeftLong;
    }

    state
}

/// Which binding's view should be showing at the given percentage.
///
/// Unlike [`trigger_state`], the short states apply over the whole side
/// (any `p >= 0` shows right-short) so the icon is visible from the first
/// pixel of the drag; the long state takes over at the long trigger.
pub fn active_state(
    percentage: f32,
    long_trigger: f32,
    configured: TriggerStates,
) -> TriggerState {
    let mut state = TriggerState::None;

    if percentage >= 0.0 && configured.contains(TriggerState::RightShort) {
        state = TriggerState::RightShort;
    }
    if percentage >= long_trigger && configured.contains(TriggerState::RightLong) {
        state = TriggerState::RightLong;
    }
    if percentage < 0.0 && configured.contains(TriggerState::LeftShort) {
        state = TriggerState::LeftShort;
    }
    if percentage <= -long_trigger && configured.contains(TriggerState::LeftLong) {
        state = TriggerState::LeftLong;
    }

    state
}

/// Which binding's color the indicator should show, `None` for the default.
///
/// Exclusive comparisons: the color switches strictly past each trigger.
pub fn indicator_state(
    percentage: f32,
    short_trigger: f32,
    long_trigger: f32,
    configured: TriggerStates,
) -> TriggerState {
    let mut state = TriggerState::None;

    if percentage > short_trigger && configured.contains(TriggerState::RightShort) {
        state = TriggerState::RightShort;
    }
    if percentage > long_trigger && configured.contains(TriggerState::RightLong) {
        state = TriggerState::RightLong;
    }
    if percentage < -short_trigger && configured.contains(TriggerState::LeftShort) {
        state = TriggerState::LeftShort;
    }
    if percentage < -long_trigger && configured.contains(TriggerState::LeftLong) {
        state = TriggerState::LeftLong;
    }

    state
}

/// Icon alpha: linear ramp over the short-trigger zone, saturating at 1.
pub fn alpha(percentage: f32, short_trigger: f32) -> f32 {
    if short_trigger <= 0.0 {
        return 1.0;
    }
    (percentage.abs() / short_trigger).min(1.0)
}

/// Exit-animation duration from the horizontal release velocity.
///
/// The velocity is clamped to the row width per second and the duration is
/// interpolated between [`defaults::EXIT_DURATION_SLOW`] at rest and
/// [`defaults::EXIT_DURATION_FAST`] at full flick, so a faster flick exits
/// sooner.
pub fn animation_duration(velocity_x: f32, width: f32) -> f32 {
    let range = defaults::EXIT_DURATION_SLOW - defaults::EXIT_DURATION_FAST;
    let clamped = if width > 0.0 {
        velocity_x.clamp(-width, width)
    } else {
        0.0
    };
    let fraction = if width > 0.0 { clamped / width } else { 0.0 };
    (defaults::EXIT_DURATION_FAST + defaults::EXIT_DURATION_SLOW) - (fraction * range).abs()
}

/// Horizontal center of the sliding icon slot, `None` when it is hidden.
///
/// While dragging the slot sits half a short-trigger in from the pulled edge
/// and starts tracking the drag 1:1 once the short trigger is passed. After
/// release it snaps to the fixed slot on the `direction` side; `Center`
/// means there is nothing to place.
pub fn sliding_position(
    percentage: f32,
    is_dragging: bool,
    direction: SwipeDirection,
    width: f32,
    short_trigger: f32,
) -> Option<f32> {
    let half_short = short_trigger / 2.0;

    if is_dragging {
        let x = if percentage >= 0.0 && percentage < short_trigger {
            offset_for(half_short, width)
        } else if percentage >= short_trigger {
            offset_for(percentage - half_short, width)
        } else if percentage < 0.0 && percentage >= -short_trigger {
            width - offset_for(half_short, width)
        } else {
            width + offset_for(percentage + half_short, width)
        };
        Some(x)
    } else {
        match direction {
            SwipeDirection::Right => Some(offset_for(half_short, width)),
            SwipeDirection::Left => Some(width - offset_for(half_short, width)),
            SwipeDirection::Center => None,
        }
    }
}
