//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – coupling scheme and default trace length
//! - [`ParametersConfig`] – physical constants and unit scaling
//! - [`RunConfig`]        – how the headless driver runs frames
//! - [`BodyConfig`]       – initial state for each body
//! - [`SpawnConfig`]      – scripted spawn requests
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section except `bodies` may be omitted:
//!
//! ```yaml
//! engine:
//!   coupling: "sequential"  # or "two_phase"
//!   trace_capacity: 1000
//!
//! parameters:
//!   G: 6.67e-11
//!   distance_floor: 1.0
//!   velocity_prescale: 4.0e7  # applied to every `v` below
//!   time_scale: 1.0e-9        # dt = frame seconds * speed * time_scale
//!
//! run:
//!   frames: 600
//!   frame_dt: 0.0166667
//!   speed: 1.0
//!
//! bodies:
//!   - name: Sun
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 1.989e30
//!     size: 10.0
//!   - name: Earth
//!     x: [100.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 29.78]     # km/s, before pre-scale
//!     m: 5.972e24
//!     size: 1.0
//!
//! spawns:
//!   - frame: 120
//!     mass: 1.0e25
//!     size: 2.0
//!     speed: 20.0
//!     origin: [0.0, 50.0, 300.0]
//!     direction: [0.0, -0.2, -1.0]
//! ```

use serde::Deserialize;

use crate::simulation::params::{DEFAULT_TRACE_CAPACITY, DISTANCE_FLOOR, GRAVITATIONAL_CONSTANT, TIME_SCALE, VELOCITY_PRESCALE};

/// How attraction and position updates interleave within one step
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CouplingConfig {
    #[default]
    #[serde(rename = "sequential")] // attract-then-move per body, order dependent
    Sequential,

    #[serde(rename = "two_phase")] // attract all, then move all, order independent
    TwoPhase,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub coupling: CouplingConfig, // Step scheme
    pub trace_capacity: usize, // Trace length for bodies that do not set their own
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            coupling: CouplingConfig::Sequential,
            trace_capacity: DEFAULT_TRACE_CAPACITY,
        }
    }
}

/// Physical constants and unit scaling
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,                 // gravitational constant
    pub distance_floor: f64,    // separations below this use this in the force law
    pub velocity_prescale: f64, // multiplier applied to configured velocities
    pub time_scale: f64,        // wall-clock seconds x speed -> simulated dt
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: GRAVITATIONAL_CONSTANT,
            distance_floor: DISTANCE_FLOOR,
            velocity_prescale: VELOCITY_PRESCALE,
            time_scale: TIME_SCALE,
        }
    }
}

/// Headless run settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RunConfig {
    pub frames: u64,   // number of frames to run
    pub frame_dt: f64, // wall-clock seconds per frame
    pub speed: f64,    // user speed multiplier
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_dt: 1.0 / 60.0,
            speed: 1.0,
        }
    }
}

impl RunConfig {
    /// Spawns scheduled at or after `frames`, which the run never reaches
    pub fn unreachable_spawns<'a>(&self, spawns: &'a [SpawnConfig]) -> Vec<&'a SpawnConfig> {
        spawns.iter().filter(|sc| sc.frame >= self.frames).collect()
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,                   // Display name
    pub x: [f64; 3],                    // Initial position in scene units
    pub v: [f64; 3],                    // Initial velocity in raw units (pre-scale applied on build)
    pub m: f64,                         // Mass, must be > 0
    pub size: f64,                      // Visual radius, must be > 0
    pub trace_capacity: Option<usize>,  // Overrides `engine.trace_capacity`
}

/// A spawn request applied before the step of frame `frame`
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub frame: u64,
    pub name: Option<String>,
    pub mass: f64,
    pub size: f64,
    pub speed: f64,
    pub origin: [f64; 3],    // viewpoint the body appears at
    pub direction: [f64; 3], // view vector the body travels along
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Engine-level configuration
    #[serde(default)]
    pub parameters: ParametersConfig, // Physical constants and scaling
    #[serde(default)]
    pub run: RunConfig, // Headless driver settings
    pub bodies: Vec<BodyConfig>, // Initial bodies, in step order
    #[serde(default)]
    pub spawns: Vec<SpawnConfig>, // Scripted spawns
}
