//! Physical constants and unit scaling for the simulation
//!
//! Velocities are stored pre-multiplied by `velocity_prescale` and every
//! frame's dt is multiplied by `time_scale`. Only their product affects the
//! apparent orbital speed, so it is exposed as `unit_scale()`:
//! - position units: scene units (1 AU = 100 in the shipped presets)
//! - raw velocity units: km/s
//! - `velocity_prescale`: stored velocity per raw velocity unit
//! - `time_scale`: simulated time per (wall-clock second x speed factor)

/// Gravitational constant used by default
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67e-11;

/// Forces are computed with the separation floored at this distance
pub const DISTANCE_FLOOR: f64 = 1.0;

/// Applied to every body's velocity when it is constructed
pub const VELOCITY_PRESCALE: f64 = 4.0e7;

/// Applied to wall-clock delta x speed factor to get dt
pub const TIME_SCALE: f64 = 1.0e-9;

/// Scene units travelled per wall-clock second per raw velocity unit at speed 1
pub const SIM_UNIT_SCALE: f64 = VELOCITY_PRESCALE * TIME_SCALE;

/// Default trace length per body
pub const DEFAULT_TRACE_CAPACITY: usize = 1000;

/// Longest trace a scenario may request per body
pub const MAX_TRACE_CAPACITY: usize = 1_000_000;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub distance_floor: f64, // minimum separation in the force law
    pub velocity_prescale: f64, // construction-time velocity multiplier
    pub time_scale: f64, // wall-clock to simulated time multiplier
}

impl Parameters {
    /// Product of the two coupled scale factors
    pub fn unit_scale(&self) -> f64 {
        self.velocity_prescale * self.time_scale
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            distance_floor: DISTANCE_FLOOR,
            velocity_prescale: VELOCITY_PRESCALE,
            time_scale: TIME_SCALE,
        }
    }
}
