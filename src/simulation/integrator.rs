//! Forward-Euler stepping of the body collection
//!
//! Two schemes share `Body::attract` and `Body::update`:
//! - sequential: attract-then-move one body at a time, in collection order
//! - two-phase: attract every body from a frozen snapshot, then move all

use super::engine::Coupling;
use super::forces::GravityField;
use super::states::{Body, System};

impl Body {
    /// Advance position by one step: x += v * dt, then record x in the trace.
    /// A zero step leaves position and trace untouched.
    pub fn update(&mut self, dt: f64) {
        if dt == 0.0 {
            return;
        }
        self.x += self.v * dt;
        self.trace.push(self.x);
    }
}

/// Advance the system by one step of `dt` using the chosen coupling scheme
pub fn euler_step(sys: &mut System, field: &GravityField, coupling: Coupling, dt: f64) {
    match coupling {
        Coupling::Sequential => sequential_euler_step(sys, field, dt),
        Coupling::TwoPhase => two_phase_euler_step(sys, field, dt),
    }
}

/// For each body in order: attract towards every other body, then move it.
/// Body i sees the already-updated positions of bodies 0..i.
pub fn sequential_euler_step(sys: &mut System, field: &GravityField, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    for i in 0..n {
        sys.bodies[i].reset_forces(n);
        for j in 0..n {
            if i == j {
                continue;
            }
            let (body, other) = pair_mut(&mut sys.bodies, i, j);
            body.attract(j, other, field, dt);
        }
        sys.bodies[i].update(dt);
    }

    sys.t += dt;
}

/// Attract every body from the start-of-step positions, then move every body.
pub fn two_phase_euler_step(sys: &mut System, field: &GravityField, dt: f64) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    // Kick: positions are not touched here, so every attraction
    // sees the same snapshot
    for i in 0..n {
        sys.bodies[i].reset_forces(n);
        for j in 0..n {
            if i == j {
                continue;
            }
            let (body, other) = pair_mut(&mut sys.bodies, i, j);
            body.attract(j, other, field, dt);
        }
    }

    // Drift
    for b in sys.bodies.iter_mut() {
        b.update(dt);
    }

    sys.t += dt;
}

/// Borrow body `i` mutably and body `j` shared. `i` and `j` must differ.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &head[j])
    }
}
