//! Plain, serializable view of per-body state for external consumers
//! (renderers, logs, YAML dumps).

use serde::Serialize;

use super::states::{NVec3, System};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ForceEntry {
    pub from: String,
    pub force: [f64; 3],
    pub magnitude: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub name: String,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    pub speed: f64,
    pub trace_len: usize,
    pub forces: Vec<ForceEntry>,
}

pub(crate) fn to_array(v: &NVec3) -> [f64; 3] {
    [v.x, v.y, v.z]
}

/// Snapshot every body, pairing force slots with the names of their sources.
pub fn snapshot(sys: &System) -> Vec<BodySnapshot> {
    sys.bodies
        .iter()
        .enumerate()
        .map(|(i, b)| BodySnapshot {
            name: b.name.clone(),
            position: to_array(&b.x),
            velocity: to_array(&b.v),
            speed: b.v.norm(),
            trace_len: b.trace.len(),
            forces: b
                .forces
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .filter_map(|(j, f)| {
                    sys.bodies.get(j).map(|src| ForceEntry {
                        from: src.name.clone(),
                        force: to_array(f),
                        magnitude: f.norm(),
                    })
                })
                .collect(),
        })
        .collect()
}
