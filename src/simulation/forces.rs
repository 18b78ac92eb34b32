//! Pairwise Newtonian attraction between bodies
//!
//! Each body records only the force exerted *on itself* by each other body;
//! the pair is evaluated twice, once from each side.

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3};

/// Newtonian gravity with a hard distance floor instead of softening
#[derive(Debug, Clone, Copy)]
pub struct GravityField {
    pub G: f64, // gravitational constant
    pub distance_floor: f64, // separations below this are treated as this
}

impl GravityField {
    pub fn from_parameters(params: &Parameters) -> Self {
        Self {
            G: params.G,
            distance_floor: params.distance_floor,
        }
    }

    /// Force exerted on a body at `xi` with mass `mi` by a body at `xj` with mass `mj`
    /// |F| = G * mi * mj / max(d, floor)^2, directed from i towards j
    pub fn force(&self, xi: &NVec3, mi: f64, xj: &NVec3, mj: f64) -> NVec3 {
        // r is the displacement vector from i to j
        let r = xj - xi;
        let d = r.norm();

        // Floor the separation so coincident bodies stay finite
        let d_eff = d.max(self.distance_floor);
        let magnitude = self.G * mi * mj / (d_eff * d_eff);

        // Direction is undefined at zero separation, fall back to +x
        let direction = if d > 0.0 { r / d } else { NVec3::x() };

        magnitude * direction
    }

    /// Force on `body` from `other`
    pub fn force_between(&self, body: &Body, other: &Body) -> NVec3 {
        self.force(&body.x, body.m, &other.x, other.m)
    }
}

impl Body {
    /// Pull this body towards `other` (stored at index `j` of the collection)
    /// for a step of `dt`: v += (F / m) * dt, and record F in `forces[j]`.
    ///
    /// Must not be called with the body itself as `other`.
    pub fn attract(&mut self, j: usize, other: &Body, field: &GravityField, dt: f64) {
        let f = field.force_between(self, other);

        if j >= self.forces.len() {
            self.forces.resize(j + 1, NVec3::zeros());
        }
        self.forces[j] = f;

        if dt == 0.0 {
            return;
        }

        let a = f / self.m;
        self.v += a * dt;
    }
}
