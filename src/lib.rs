pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::trace::TraceBuffer;
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, VELOCITY_PRESCALE, TIME_SCALE, SIM_UNIT_SCALE};
pub use simulation::engine::{Coupling, Engine};
pub use simulation::forces::GravityField;
pub use simulation::integrator::{euler_step, sequential_euler_step, two_phase_euler_step};
pub use simulation::clock::{compute_time_step, StepDriver, FrameClock};
pub use simulation::spawn::{spawn_body, SpawnRequest};
pub use simulation::snapshot::{BodySnapshot, ForceEntry};
pub use simulation::scenario::Scenario;

pub use configuration::config::{CouplingConfig, EngineConfig, ParametersConfig, RunConfig, BodyConfig, SpawnConfig, ScenarioConfig};

pub use error::SimError;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
