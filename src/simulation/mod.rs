pub mod states;
pub mod trace;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod clock;
pub mod spawn;
pub mod snapshot;
pub mod scenario;
