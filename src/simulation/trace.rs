//! Bounded FIFO of past positions used to draw orbital paths.

use std::collections::VecDeque;

use super::params::DEFAULT_TRACE_CAPACITY;
use super::states::NVec3;

#[derive(Debug, Clone)]
pub struct TraceBuffer {
    points: VecDeque<NVec3>,
    capacity: usize,
}

impl TraceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            // grows on demand past the default length
            points: VecDeque::with_capacity(capacity.min(DEFAULT_TRACE_CAPACITY)),
            capacity,
        }
    }

    /// Record a position, evicting the oldest once full.
    /// A zero-capacity buffer records nothing.
    pub fn push(&mut self, p: NVec3) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    /// Points in chronological order.
    pub fn points(&self) -> impl Iterator<Item = &NVec3> + '_ {
        self.points.iter()
    }

    pub fn latest(&self) -> Option<&NVec3> {
        self.points.back()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
