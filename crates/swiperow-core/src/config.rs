//! Shared swipe configuration.
//!
//! The controller re-reads these values at every computation rather than
//! caching them at session start, so the host may mutate the config at any
//! point during an interaction.

use crate::color::Color;

/// Threshold, animation, and behavior defaults.
pub mod defaults {
    use crate::color::Color;

    /// Fraction of the row width that arms the first (short) action.
    pub const SHORT_TRIGGER: f32 = 0.25;

    /// Fraction of the row width that arms the second (long) action.
    pub const LONG_TRIGGER: f32 = 0.75;

    /// Damping ratio of the snap-back spring.
    pub const DAMPING: f32 = 0.6;

    /// Initial velocity of the snap-back spring, in progress units per second.
    pub const VELOCITY: f32 = 0.9;

    /// Duration of the snap-back animation in seconds.
    pub const SNAP_DURATION: f32 = 0.4;

    /// Exit duration at zero release velocity, in seconds.
    pub const EXIT_DURATION_SLOW: f32 = 0.25;

    /// Exit duration at maximum release velocity, in seconds.
    pub const EXIT_DURATION_FAST: f32 = 0.1;

    /// Indicator color shown before any trigger threshold is crossed.
    pub const INDICATOR_COLOR: Color = Color::from_rgb_u8(189, 195, 199);
}

/// Mutable-at-any-time settings read by the controller at use time.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Percentage limit that arms the short action on either side.
    pub short_trigger: f32,
    /// Percentage limit that arms the long action on either side.
    pub long_trigger: f32,
    /// Indicator color while no trigger threshold is crossed.
    pub default_color: Color,
    /// Damping ratio of the snap-back spring.
    pub damping: f32,
    /// Initial spring velocity for the snap-back animation.
    pub velocity: f32,
    /// Snap-back animation duration in seconds.
    pub snap_duration: f32,
    /// Whether the action icon slides with the drag during exit.
    pub animate_icons: bool,
    /// Whether drags are accepted at all.
    pub drag_enabled: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            short_trigger: defaults::SHORT_TRIGGER,
            long_trigger: defaults::LONG_TRIGGER,
            default_color: defaults::INDICATOR_COLOR,
            damping: defaults::DAMPING,
            velocity: defaults::VELOCITY,
            snap_duration: defaults::SNAP_DURATION,
            animate_icons: true,
            drag_enabled: true,
        }
    }
}
