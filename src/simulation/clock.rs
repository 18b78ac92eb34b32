//! Frame timing: wall-clock delta and speed factor to simulated dt

use std::time::Instant;

use super::params::Parameters;

/// dt = elapsed_real_seconds * speed_factor * time_scale
pub fn compute_time_step(elapsed_real_seconds: f64, speed_factor: f64, time_scale: f64) -> f64 {
    elapsed_real_seconds * speed_factor * time_scale
}

/// Derives one dt per frame and counts frames
#[derive(Debug, Clone)]
pub struct StepDriver {
    pub time_scale: f64,
    pub frames: u64,
}

impl StepDriver {
    pub fn new(time_scale: f64) -> Self {
        Self { time_scale, frames: 0 }
    }

    pub fn from_parameters(params: &Parameters) -> Self {
        Self::new(params.time_scale)
    }

    pub fn compute_time_step(&self, elapsed_real_seconds: f64, speed_factor: f64) -> f64 {
        compute_time_step(elapsed_real_seconds, speed_factor, self.time_scale)
    }
}

/// Wall-clock delta between successive calls, like an animation frame clock.
/// The first call returns 0.
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous call
    pub fn delta(&mut self) -> f64 {
        let now = Instant::now();
        let dt = match self.last {
            Some(prev) => now.duration_since(prev).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}
