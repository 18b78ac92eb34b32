//! Errors raised at the simulation boundaries (spawning, building, ticking).
//! The numeric core itself never fails.

use thiserror::Error;

use crate::simulation::params::MAX_TRACE_CAPACITY;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// A mass, size or speed that is non-finite or out of range.
    #[error("invalid {name}: {value} (must be finite and {requirement})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
    #[error("spawn direction must be a finite, non-zero vector")]
    InvalidDirection,
    #[error("spawn origin must be a finite point")]
    InvalidOrigin,
    #[error("time step {dt} from elapsed {elapsed}s at speed {speed} is negative or non-finite")]
    InvalidTimeStep { elapsed: f64, speed: f64, dt: f64 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Require a finite, strictly positive value.
pub fn require_positive(name: &'static str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value, requirement: "> 0" })
    }
}

/// Require a finite value that is zero or greater.
pub fn require_non_negative(name: &'static str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value, requirement: ">= 0" })
    }
}

/// Reject trace lengths above `MAX_TRACE_CAPACITY`.
pub fn require_trace_capacity(owner: &str, capacity: usize) -> Result<usize, SimError> {
    if capacity <= MAX_TRACE_CAPACITY {
        Ok(capacity)
    } else {
        Err(SimError::InvalidConfig(format!(
            "{owner} trace_capacity {capacity} exceeds {MAX_TRACE_CAPACITY}"
        )))
    }
}
