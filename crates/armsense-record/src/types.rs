//! Serializable frame types for the joint-state stream.

use serde::{Deserialize, Serialize};

use armsense_sensor::JointStateMap;

// ---------------------------------------------------------------------------
// PoseFrame
// ---------------------------------------------------------------------------

/// Snapshot of one armature's joint state at a single simulation tick.
///
/// `names` and `values` are parallel vectors in chain order; values are
/// radians for rotational joints and meters for prismatic ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::derive_partial_eq_without_eq)] // f32 fields prevent Eq
pub struct PoseFrame {
    /// Simulation timestamp in nanoseconds.
    pub timestamp_ns: u64,
    /// Joint names, root to tip.
    pub names: Vec<String>,
    /// Joint values, same order as `names`.
    pub values: Vec<f32>,
}

impl PoseFrame {
    /// Capture a sensor's published mapping at the given timestamp.
    pub fn capture(timestamp_ns: u64, state: &JointStateMap) -> Self {
        Self {
            timestamp_ns,
            names: state.names().to_vec(),
            values: state.values().to_vec(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
