//! Build and drive a fully-initialized simulation
//!
//! `Scenario` is the single owner of simulation state:
//! - engine settings (`Engine`)
//! - constants and unit scaling (`Parameters`)
//! - body collection (`System`)
//! - gravity law (`GravityField`) and frame-to-dt driver (`StepDriver`)
//!
//! Host code calls `tick` once per frame and `spawn` on user input; both
//! take `&mut self`, so frames and spawns are serialized by the borrow.

use log::{debug, info, warn};

use crate::configuration::config::{BodyConfig, ScenarioConfig, SpawnConfig};
use crate::error::{require_positive, require_trace_capacity, SimError};
use crate::simulation::clock::StepDriver;
use crate::simulation::engine::{Coupling, Engine};
use crate::simulation::forces::GravityField;
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::snapshot::{snapshot, BodySnapshot};
use crate::simulation::spawn::{spawn_body, validate_spawn_request, SpawnRequest};
use crate::simulation::states::{Body, NVec3, System};

/// Sun, eight planets and Pluto: (name, distance, speed km/s, mass kg, size)
/// 1 AU = 100 scene units; bodies start on +x moving along +z.
const SOLAR_SYSTEM: [(&str, f64, f64, f64, f64); 10] = [
    ("Sun", 0.0, 0.0, 1.989e30, 10.0),
    ("Mercury", 38.7, 47.36, 3.301e23, 0.8),
    ("Venus", 72.3, 35.02, 4.867e24, 1.9),
    ("Earth", 100.0, 29.78, 5.972e24, 2.0),
    ("Mars", 152.4, 24.07, 6.417e23, 1.1),
    ("Jupiter", 520.3, 13.07, 1.898e27, 6.0),
    ("Saturn", 953.7, 9.68, 5.683e26, 5.0),
    ("Uranus", 1919.1, 6.80, 8.681e25, 3.5),
    ("Neptune", 3007.0, 5.43, 1.024e26, 3.4),
    ("Pluto", 3948.2, 4.74, 1.303e22, 0.5),
];

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub gravity: GravityField,
    pub driver: StepDriver,
    diverged: bool,
}

impl Scenario {
    /// An empty scenario with the given settings
    pub fn new(engine: Engine, parameters: Parameters) -> Result<Self, SimError> {
        validate_parameters(&parameters)?;
        require_trace_capacity("engine", engine.trace_capacity)?;
        Ok(Self {
            gravity: GravityField::from_parameters(&parameters),
            driver: StepDriver::from_parameters(&parameters),
            engine,
            parameters,
            system: System::default(),
            diverged: false,
        })
    }

    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            distance_floor: p_cfg.distance_floor,
            velocity_prescale: p_cfg.velocity_prescale,
            time_scale: p_cfg.time_scale,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            coupling: Coupling::from(cfg.engine.coupling),
            trace_capacity: cfg.engine.trace_capacity,
        };

        let mut scenario = Self::new(engine, parameters)?;

        // Bodies: map `BodyConfig` -> runtime `Body`, pre-scaling velocity
        for bc in &cfg.bodies {
            let body = scenario.body_from_config(bc)?;
            scenario.system.push(body);
        }

        for sc in &cfg.spawns {
            validate_spawn(sc)?;
        }

        info!(
            "built scenario: {} bodies, coupling = {:?}, unit scale = {:e}",
            scenario.system.len(),
            scenario.engine.coupling,
            scenario.parameters.unit_scale()
        );
        Ok(scenario)
    }

    /// Built-in Sun + planets preset with default settings
    pub fn solar_system() -> Self {
        let parameters = Parameters::default();
        let engine = Engine::default();
        let bodies = SOLAR_SYSTEM
            .iter()
            .map(|&(name, distance, speed, m, size)| {
                Body::new(
                    name,
                    size,
                    m,
                    NVec3::new(distance, 0.0, 0.0),
                    NVec3::new(0.0, 0.0, speed) * parameters.velocity_prescale,
                    engine.trace_capacity,
                )
            })
            .collect();

        Self {
            gravity: GravityField::from_parameters(&parameters),
            driver: StepDriver::from_parameters(&parameters),
            engine,
            parameters,
            system: System::new(bodies),
            diverged: false,
        }
    }

    fn body_from_config(&self, bc: &BodyConfig) -> Result<Body, SimError> {
        let m = require_positive("mass", bc.m)?;
        let size = require_positive("size", bc.size)?;
        let x = NVec3::from(bc.x);
        let v = NVec3::from(bc.v);
        if !x.iter().chain(v.iter()).all(|c| c.is_finite()) {
            return Err(SimError::InvalidConfig(format!("body '{}' has a non-finite position or velocity", bc.name)));
        }
        let capacity = require_trace_capacity(&bc.name, bc.trace_capacity.unwrap_or(self.engine.trace_capacity))?;
        Ok(Body::new(bc.name.clone(), size, m, x, v * self.parameters.velocity_prescale, capacity))
    }

    /// Derive dt from the frame's wall-clock delta and speed factor and step once.
    /// Returns the dt used.
    pub fn tick(&mut self, elapsed_real_seconds: f64, speed_factor: f64) -> Result<f64, SimError> {
        let dt = self.driver.compute_time_step(elapsed_real_seconds, speed_factor);
        if !dt.is_finite() || dt < 0.0 {
            return Err(SimError::InvalidTimeStep {
                elapsed: elapsed_real_seconds,
                speed: speed_factor,
                dt,
            });
        }
        self.step(dt);
        self.driver.frames += 1;
        debug!("frame {}: dt = {dt:e}, t = {:e}", self.driver.frames, self.system.t);
        Ok(dt)
    }

    /// Advance by an explicit simulated dt
    pub fn step(&mut self, dt: f64) {
        euler_step(&mut self.system, &self.gravity, self.engine.coupling, dt);

        if !self.diverged {
            if let Some(b) = self.system.bodies.iter().find(|b| !b.is_finite()) {
                warn!("body '{}' has non-finite state at t = {:e}", b.name, self.system.t);
                self.diverged = true;
            }
        }
    }

    /// Spawn a body at `origin` travelling along `direction`
    pub fn spawn(&mut self, request: &SpawnRequest, origin: NVec3, direction: NVec3) -> Result<usize, SimError> {
        spawn_body(
            &mut self.system,
            &self.parameters,
            self.engine.trace_capacity,
            request,
            origin,
            direction,
        )
    }

    pub fn spawn_from_config(&mut self, sc: &SpawnConfig) -> Result<usize, SimError> {
        self.spawn(&spawn_request(sc), NVec3::from(sc.origin), NVec3::from(sc.direction))
    }

    /// Forces recorded on body `i` in the last step, keyed by source name
    pub fn forces_by_name(&self, i: usize) -> Vec<(&str, NVec3)> {
        let Some(body) = self.system.bodies.get(i) else {
            return Vec::new();
        };
        body.forces
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .filter_map(|(j, f)| self.system.bodies.get(j).map(|src| (src.name.as_str(), *f)))
            .collect()
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.system.index_of(name).map(|i| &self.system.bodies[i])
    }

    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        snapshot(&self.system)
    }
}

fn validate_parameters(p: &Parameters) -> Result<(), SimError> {
    let checks = [
        ("G", p.G),
        ("distance_floor", p.distance_floor),
        ("velocity_prescale", p.velocity_prescale),
        ("time_scale", p.time_scale),
    ];
    for (name, value) in checks {
        if !(value.is_finite() && value > 0.0) {
            return Err(SimError::InvalidConfig(format!("parameter {name} = {value} must be finite and > 0")));
        }
    }
    Ok(())
}

fn spawn_request(sc: &SpawnConfig) -> SpawnRequest {
    SpawnRequest {
        name: sc.name.clone(),
        mass: sc.mass,
        size: sc.size,
        speed: sc.speed,
    }
}

fn validate_spawn(sc: &SpawnConfig) -> Result<(), SimError> {
    validate_spawn_request(&spawn_request(sc), &NVec3::from(sc.origin), &NVec3::from(sc.direction))?;
    Ok(())
}
