//! High-level runtime engine settings
//!
//! Selects the coupling scheme and default trace length
//! used when building and running a `Scenario`

use crate::configuration::config::CouplingConfig;

/// How attraction and position updates are interleaved within one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coupling {
    /// Each body gathers all attractions then moves before the next body is
    /// visited. Later bodies see the already-moved positions of earlier ones.
    #[default]
    Sequential,
    /// All attractions are gathered from the start-of-step positions, then
    /// every body moves. Result does not depend on body order.
    TwoPhase,
}

impl From<CouplingConfig> for Coupling {
    fn from(cfg: CouplingConfig) -> Self {
        match cfg {
            CouplingConfig::Sequential => Coupling::Sequential,
            CouplingConfig::TwoPhase => Coupling::TwoPhase,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Engine {
    pub coupling: Coupling, // sequential or two-phase
    pub trace_capacity: usize, // default trace length for new bodies
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            coupling: Coupling::Sequential,
            trace_capacity: super::params::DEFAULT_TRACE_CAPACITY,
        }
    }
}
