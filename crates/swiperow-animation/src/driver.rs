//! Frame-driven animation execution.

use log::trace;

use crate::spec::{MotionSpec, SpringSpec, TweenSpec};

/// Progress callback invoked once per frame with eased progress.
///
/// Tween progress stays in [0, 1]; an under-damped spring may briefly
/// overshoot past 1.0 before settling.
pub type UpdateFn = Box<dyn FnMut(f32)>;

/// Invoked exactly once when the animation finishes.
pub type CompleteFn = Box<dyn FnOnce()>;

/// Collaborator contract: run one timed animation at a time.
///
/// Starting a new animation while one is active replaces it; the replaced
/// animation's completion never fires. Callers that need the previous
/// completion must wait for it or [`cancel`](AnimationDriver::cancel) first.
pub trait AnimationDriver {
    fn animate(&mut self, spec: MotionSpec, update: UpdateFn, complete: CompleteFn);

    /// Drop the active animation, if any, without completing it.
    fn cancel(&mut self);

    fn is_animating(&self) -> bool;
}

/// Fixed internal integration step for spring physics, ~60fps.
const SPRING_TIMESTEP: f32 = 0.016;

/// Spring settles when both velocity and displacement fall below these.
const SPRING_VELOCITY_THRESHOLD: f32 = 0.01;
const SPRING_POSITION_THRESHOLD: f32 = 0.001;

struct ActiveAnimation {
    spec: MotionSpec,
    start_nanos: Option<u64>,
    last_nanos: u64,
    progress: f32,
    velocity: f32,
    update: UpdateFn,
    complete: Option<CompleteFn>,
}

impl ActiveAnimation {
    /// Advance to `frame_nanos`; returns true once finished.
    fn step(&mut self, frame_nanos: u64) -> bool {
        if self.start_nanos.is_none() {
            self.start_nanos = Some(frame_nanos);
            self.last_nanos = frame_nanos;
        }
        let start = self.start_nanos.unwrap_or(frame_nanos);
        let finished = match self.spec {
            MotionSpec::Tween(tween) => self.step_tween(tween, frame_nanos, start),
            MotionSpec::Spring(spring) => self.step_spring(spring, frame_nanos),
        };
        self.last_nanos = frame_nanos;
        if !finished {
            (self.update)(self.progress);
        }
        finished
    }

    fn step_tween(&mut self, tween: TweenSpec, frame_nanos: u64, start: u64) -> bool {
        let elapsed = frame_nanos.saturating_sub(start) as f32 / 1_000_000_000.0;
        let duration = tween.duration_secs.max(1e-6);
        let linear = (elapsed / duration).clamp(0.0, 1.0);
        self.progress = tween.easing.transform(linear);
        linear >= 1.0
    }

    fn step_spring(&mut self, spring: SpringSpec, frame_nanos: u64) -> bool {
        let dt = frame_nanos.saturating_sub(self.last_nanos) as f32 / 1_000_000_000.0;
        if dt <= 0.0 {
            return false;
        }

        let omega = spring.omega();
        let stiffness = omega * omega;
        let damping = 2.0 * spring.damping_ratio * omega;

        // Semi-implicit Euler at a fixed timestep for stability.
        let mut remaining = dt;
        while remaining > 0.0 {
            let step = SPRING_TIMESTEP.min(remaining);
            let displacement = self.progress - 1.0;
            let force = -stiffness * displacement - damping * self.velocity;
            self.velocity += force * step;
            self.progress += self.velocity * step;
            remaining -= step;
        }

        self.velocity.abs() < SPRING_VELOCITY_THRESHOLD
            && (self.progress - 1.0).abs() < SPRING_POSITION_THRESHOLD
    }
}

/// Deterministic [`AnimationDriver`] stepped by embedder-supplied frame
/// timestamps.
///
/// Call [`on_frame`](FrameDriver::on_frame) with a monotonically increasing
/// nanosecond clock; the driver invokes the update callback with the current
/// progress and fires the completion once the motion finishes.
#[derive(Default)]
pub struct FrameDriver {
    active: Option<ActiveAnimation>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the active animation to `frame_nanos`.
    pub fn on_frame(&mut self, frame_nanos: u64) {
        let Some(animation) = self.active.as_mut() else {
            return;
        };

        if animation.step(frame_nanos) {
            // Finished: snap to the exact endpoint, then complete. The
            // animation is detached first so callbacks observe an idle
            // driver and may start a new one.
            if let Some(mut finished) = self.active.take() {
                (finished.update)(1.0);
                trace!("frame driver: animation finished");
                if let Some(complete) = finished.complete.take() {
                    complete();
                }
            }
        }
    }
}

impl AnimationDriver for FrameDriver {
    fn animate(&mut self, spec: MotionSpec, update: UpdateFn, complete: CompleteFn) {
        if self.active.is_some() {
            trace!("frame driver: replacing in-flight animation");
        }
        let initial_velocity = match spec {
            MotionSpec::Spring(spring) => spring.initial_velocity,
            MotionSpec::Tween(_) => 0.0,
        };
        self.active = Some(ActiveAnimation {
            spec,
            start_nanos: None,
            last_nanos: 0,
            progress: 0.0,
            velocity: initial_velocity,
            update,
            complete: Some(complete),
        });
    }

    fn cancel(&mut self) {
        self.active = None;
    }

    fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
