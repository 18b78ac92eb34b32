use std::time::Instant;

use crate::simulation::engine::{Coupling, Engine};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3, System};

/// Helper to build a manual System of size `n`
/// Deterministic positions, no rand needed
fn make_system(n: usize, trace_capacity: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 500.0,
            (i_f * 0.13).cos() * 500.0,
            (i_f * 0.07).sin() * 500.0,
        );

        bodies.push(Body::new(format!("b{i}"), 1.0, 1.0e24, x, NVec3::zeros(), trace_capacity));
    }

    System::new(bodies)
}

/// Helper to build a scenario around `make_system`
fn make_scenario(n: usize, coupling: Coupling) -> Option<Scenario> {
    let engine = Engine {
        coupling,
        ..Engine::default()
    };
    let mut scenario = Scenario::new(engine, Parameters::default()).ok()?;
    scenario.system = make_system(n, scenario.engine.trace_capacity);
    Some(scenario)
}

/// Time `steps` frames of one scenario, returns seconds per step
fn time_steps(scenario: &mut Scenario, steps: usize, dt: f64) -> f64 {
    // Warm-up
    scenario.step(dt);

    let t0 = Instant::now();
    for _ in 0..steps {
        scenario.step(dt);
    }
    t0.elapsed().as_secs_f64() / steps as f64
}

/// Benchmark one step of both coupling schemes for doubling n
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800, 1600];
    let steps = 5;
    let dt = 1.0e-11;

    for n in ns {
        let (Some(mut seq), Some(mut two)) = (
            make_scenario(n, Coupling::Sequential),
            make_scenario(n, Coupling::TwoPhase),
        ) else {
            log::error!("failed to build benchmark scenario for n = {n}");
            return;
        };

        let seq_per_step = time_steps(&mut seq, steps, dt);
        let two_per_step = time_steps(&mut two, steps, dt);

        println!("N = {n:5}, sequential step = {:8.6} s, two-phase step = {:8.6} s", seq_per_step, two_per_step);
    }
}

/// Benchmark the sequential step for a range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,sequential_ms,two_phase_ms");

    for n in (100..=2000).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let (Some(mut seq), Some(mut two)) = (
            make_scenario(n, Coupling::Sequential),
            make_scenario(n, Coupling::TwoPhase),
        ) else {
            log::error!("failed to build benchmark scenario for n = {n}");
            return;
        };

        let ms_seq = time_steps(&mut seq, steps, 1.0e-11) * 1000.0;
        let ms_two = time_steps(&mut two, steps, 1.0e-11) * 1000.0;

        println!("{},{:.6},{:.6}", n, ms_seq, ms_two);
    }
}
