//! Spawn factory: new bodies from user-supplied (mass, size, speed)
//!
//! The origin and direction come from outside (typically the camera
//! position and view vector).

use log::info;

use crate::error::{require_non_negative, require_positive, SimError};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// One user spawn request
#[derive(Debug, Clone)]
pub struct SpawnRequest {
    pub name: Option<String>, // defaults to "body-<index>"
    pub mass: f64,
    pub size: f64,
    pub speed: f64, // raw speed, before the velocity pre-scale
}

impl SpawnRequest {
    pub fn new(mass: f64, size: f64, speed: f64) -> Self {
        Self { name: None, mass, size, speed }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Check a request before anything is built; returns the unit direction.
pub fn validate_spawn_request(request: &SpawnRequest, origin: &NVec3, direction: &NVec3) -> Result<NVec3, SimError> {
    require_positive("mass", request.mass)?;
    require_positive("size", request.size)?;
    require_non_negative("speed", request.speed)?;

    if !origin.iter().all(|c| c.is_finite()) {
        return Err(SimError::InvalidOrigin);
    }

    let len = direction.norm();
    if !len.is_finite() || len == 0.0 {
        return Err(SimError::InvalidDirection);
    }
    Ok(direction / len)
}

/// Append a body at `origin` moving along `direction` and return its index.
///
/// velocity = normalize(direction) * speed * velocity_prescale
pub fn spawn_body(
    sys: &mut System,
    params: &Parameters,
    trace_capacity: usize,
    request: &SpawnRequest,
    origin: NVec3,
    direction: NVec3,
) -> Result<usize, SimError> {
    let unit = validate_spawn_request(request, &origin, &direction)?;
    let (mass, size, speed) = (request.mass, request.size, request.speed);
    let v = unit * speed * params.velocity_prescale;

    let name = request
        .name
        .clone()
        .unwrap_or_else(|| format!("body-{}", sys.len()));

    let index = sys.push(Body::new(name, size, mass, origin, v, trace_capacity));
    info!(
        "spawned '{}' (#{index}) m = {mass:e}, size = {size}, speed = {speed} at [{:.2}, {:.2}, {:.2}]",
        sys.bodies[index].name, origin.x, origin.y, origin.z
    );

    Ok(index)
}
