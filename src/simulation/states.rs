//! Core state types for the solar-system simulation.
//!
//! - `Body`: one celestial object (physical state, trace, force slots)
//! - `System`: the ordered, append-only collection of bodies plus time `t`
//!
//! Body order matters: the sequential step visits bodies in collection order.

use nalgebra::Vector3;

use super::trace::TraceBuffer;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String, // display name, unique by convention only
    pub size: f64, // visual radius
    pub m: f64, // mass
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub forces: Vec<NVec3>, // forces[j] = force exerted by body j on this body
    pub trace: TraceBuffer, // recent positions, oldest first
}

impl Body {
    /// Build a body with an empty trace of the given capacity.
    /// `v` is taken as-is; callers apply the velocity pre-scale.
    pub fn new(name: impl Into<String>, size: f64, m: f64, x: NVec3, v: NVec3, trace_capacity: usize) -> Self {
        Self {
            name: name.into(),
            size,
            m,
            x,
            v,
            forces: Vec::new(),
            trace: TraceBuffer::new(trace_capacity),
        }
    }

    /// Drop last step's force entries and size the slots for `n` bodies.
    pub fn reset_forces(&mut self, n: usize) {
        self.forces.clear();
        self.forces.resize(n, NVec3::zeros());
    }

    /// Sum of the forces recorded in the most recent step.
    pub fn net_force(&self) -> NVec3 {
        self.forces.iter().fold(NVec3::zeros(), |acc, f| acc + f)
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().all(|c| c.is_finite()) && self.v.iter().all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, append-only
    pub t: f64, // simulated time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    /// Append a body and return its index.
    pub fn push(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// First body whose name matches.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }
}
