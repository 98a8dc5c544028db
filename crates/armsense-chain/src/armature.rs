//! Armature and channel definitions.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ChannelKind
// ---------------------------------------------------------------------------

/// Kind of a single joint in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    /// Rotates about one local axis; values are radians.
    Rotational,
    /// Slides along one local axis; values are meters.
    Prismatic,
}

// ---------------------------------------------------------------------------
// Channel
// ---------------------------------------------------------------------------

/// One joint (bone) of an armature.
///
/// The current local pose is carried as two 3-vectors: `rotation` holds the
/// per-axis joint angles (radians) and `head` holds the head-position
/// translation components (meters). Only the component on the joint's active
/// axis is meaningful; which axis that is belongs to the DOF declarations,
/// not to the channel itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    /// Joint name, unique within its armature.
    pub name: String,
    /// Rotational or prismatic.
    pub kind: ChannelKind,
    /// Head reference point / translation vector (m).
    pub head: Vec3,
    /// Tail reference point (m).
    pub tail: Vec3,
    /// Per-axis joint rotation (rad).
    pub rotation: Vec3,
}

impl Channel {
    /// Create a channel at rest (zero pose, zero-length bone).
    pub fn new(name: impl Into<String>, kind: ChannelKind) -> Self {
        Self {
            name: name.into(),
            kind,
            head: Vec3::ZERO,
            tail: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    /// Builder: set head and tail reference points.
    #[must_use]
    pub const fn with_bone(mut self, head: Vec3, tail: Vec3) -> Self {
        self.head = head;
        self.tail = tail;
        self
    }

    /// Builder: set the per-axis rotation vector.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Bone length: Euclidean head↔tail distance (m).
    pub fn length(&self) -> f32 {
        self.head.distance(self.tail)
    }
}

// ---------------------------------------------------------------------------
// Armature
// ---------------------------------------------------------------------------

/// Ordered kinematic chain, root to tip.
///
/// Attached to the simulated body that owns the chain. Channel order is the
/// declaration order and is stable for the armature's lifetime; sensors rely
/// on it for their state-mapping key order.
#[derive(Component, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Armature {
    channels: Vec<Channel>,
}

impl Armature {
    /// Create an empty armature.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    /// Builder: append a channel. Returns `self` for chaining.
    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Channels in root-to-tip order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Mutable channel access, for the pose-writing (actuator) side.
    pub fn channels_mut(&mut self) -> &mut [Channel] {
        &mut self.channels
    }

    /// Look up a channel by joint name.
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }

    /// Mutable lookup by joint name.
    pub fn channel_mut(&mut self, name: &str) -> Option<&mut Channel> {
        self.channels.iter_mut().find(|c| c.name == name)
    }

    /// Joint names in chain order.
    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|c| c.name.as_str())
    }

    /// Number of joints.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True if the chain has no joints.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
