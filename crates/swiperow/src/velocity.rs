//! Release-velocity estimation for hosts whose input layer reports only
//! positions.
//!
//! The controller takes velocity as an input; gesture plumbing that already
//! knows it can skip this module. Uses the impulse strategy: velocity is
//! recovered from the kinetic energy the samples imply.

use swiperow_core::Point;

/// Ring-buffer capacity of tracked samples.
const HISTORY: usize = 20;

/// Samples older than this are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer stopped.
const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// One-axis velocity tracker over absolute positions.
#[derive(Clone, Default)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY],
    index: usize,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position at the given time.
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Estimated velocity in units per second; 0 without enough samples.
    pub fn velocity(&self) -> f32 {
        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut positions = [0.0f32; HISTORY];
        let mut times = [0.0f32; HISTORY];
        let mut count = 0;

        let mut cursor = self.index;
        let mut previous = newest;
        while let Some(sample) = self.samples[cursor] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            let gap = (sample.time_ms - previous.time_ms).abs() as f32;
            previous = sample;

            if age > HORIZON_MS as f32 || gap > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[count] = sample.position;
            times[count] = -age;

            cursor = if cursor == 0 { HISTORY - 1 } else { cursor - 1 };
            count += 1;
            if count >= HISTORY {
                break;
            }
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions, &times, count) * 1000.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Two-axis tracker; the admission gate compares the axes.
#[derive(Clone, Default)]
pub struct VelocityTracker2D {
    x: VelocityTracker1D,
    y: VelocityTracker1D,
}

impl VelocityTracker2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, time_ms: i64, position: Point) {
        self.x.add_sample(time_ms, position.x);
        self.y.add_sample(time_ms, position.y);
    }

    /// Estimated velocity vector in units per second.
    pub fn velocity(&self) -> Point {
        Point::new(self.x.velocity(), self.y.velocity())
    }

    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
    }
}

/// Impulse-strategy velocity: accumulate the work the pointer did over the
/// sample window, then convert the kinetic energy back to a velocity.
fn impulse_velocity(positions: &[f32; HISTORY], times: &[f32; HISTORY], count: usize) -> f32 {
    if count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let oldest = count - 1;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let delta = positions[i] - positions[i - 1];
        let v_curr = delta / (current_time - next_time);
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

/// E = v^2 / 2 with unit mass, keeping the sign.
#[inline]
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
