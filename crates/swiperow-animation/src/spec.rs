//! Animation specifications.

use crate::easing::Easing;

/// Duration-and-easing tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    /// Duration in seconds.
    pub duration_secs: f32,
    /// Easing applied to the linear fraction.
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(duration_secs: f32, easing: Easing) -> Self {
        Self {
            duration_secs,
            easing,
        }
    }

    pub fn ease_out(duration_secs: f32) -> Self {
        Self::new(duration_secs, Easing::EaseOut)
    }
}

/// Damped-spring animation toward progress 1.0.
///
/// The spring's stiffness is derived from `duration_secs` so that springs
/// parameterized the way the snap-back config is (damping ratio, initial
/// velocity, nominal duration) settle on roughly that timescale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio: 1.0 critically damped, below 1.0 bouncy.
    pub damping_ratio: f32,
    /// Initial velocity in progress units per second.
    pub initial_velocity: f32,
    /// Nominal duration in seconds; sets the spring's natural frequency.
    pub duration_secs: f32,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, initial_velocity: f32, duration_secs: f32) -> Self {
        Self {
            damping_ratio,
            initial_velocity,
            duration_secs,
        }
    }

    /// Angular frequency implied by the nominal duration.
    pub(crate) fn omega(&self) -> f32 {
        std::f32::consts::TAU / self.duration_secs.max(1e-3)
    }
}

/// Either kind of motion the driver can run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionSpec {
    Tween(TweenSpec),
    Spring(SpringSpec),
}
