//! The armature pose sensor and its published joint-state mapping.

use std::collections::HashMap;

use bevy::log::warn;
use bevy::prelude::*;

use armsense_chain::Armature;
use armsense_core::error::SenseError;
use armsense_dof::JointDofs;

use crate::resolver::resolve_value;

// ---------------------------------------------------------------------------
// JointStateMap
// ---------------------------------------------------------------------------

/// Name → value mapping for one armature, in chain order.
///
/// Keys are fixed once the chain is known; values are overwritten in place on
/// every tick. Storage is a pair of parallel vectors plus a name→slot lookup,
/// so iteration order always equals chain order regardless of update order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointStateMap {
    names: Vec<String>,
    values: Vec<f32>,
    slots: HashMap<String, usize>,
}

impl JointStateMap {
    /// Create a zero-initialized mapping with the given keys, in order.
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        let names: Vec<String> = names.into_iter().collect();
        let slots = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        let values = vec![0.0; names.len()];
        Self {
            names,
            values,
            slots,
        }
    }

    /// Value for a joint, if the key exists.
    pub fn get(&self, joint: &str) -> Option<f32> {
        self.slots.get(joint).map(|&i| self.values[i])
    }

    /// Overwrite a joint's value. Returns false if the key is absent.
    pub fn set(&mut self, joint: &str, value: f32) -> bool {
        match self.slots.get(joint) {
            Some(&i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    /// Keys in chain order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Values in chain order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// `(name, value)` pairs in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Number of joints.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Attachment
// ---------------------------------------------------------------------------

/// Lifecycle of a sensor's link to its armature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Attachment {
    /// Chain not resolved yet; the init system will attempt it.
    #[default]
    Pending,
    /// Resolved to the armature on this entity.
    Attached(Entity),
    /// No armature found up the hierarchy. Permanent for this instance.
    Detached,
}

// ---------------------------------------------------------------------------
// ArmaturePoseSensor
// ---------------------------------------------------------------------------

/// Streams and answers queries about the joint state of its parent armature.
///
/// Spawn this component on an entity parented (directly or transitively)
/// under the armature's owning body. The init system resolves the chain by
/// walking upward through the hierarchy; if no armature is found the sensor
/// is permanently disabled and every operation fails with
/// [`SenseError::NotAttached`].
///
/// Joint values come from the DOF declarations the armature actuator
/// registers in [`DofRegistry`](armsense_dof::DofRegistry). The actuator may
/// appear after this sensor: queries fail with [`SenseError::NotReady`] until
/// then, and the registry is looked up again on every call.
#[derive(Component, Debug, Clone, Default)]
pub struct ArmaturePoseSensor {
    attachment: Attachment,
    state: JointStateMap,
    fault_logged: bool,
}

impl ArmaturePoseSensor {
    /// Create an unattached sensor; the init system will resolve the chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity of the resolved armature, if attached.
    pub fn armature(&self) -> Option<Entity> {
        match self.attachment {
            Attachment::Attached(entity) => Some(entity),
            _ => None,
        }
    }

    /// True while the chain has not been resolved yet.
    pub fn is_pending(&self) -> bool {
        self.attachment == Attachment::Pending
    }

    /// True once the sensor has given up (no armature up to the root).
    pub fn is_detached(&self) -> bool {
        self.attachment == Attachment::Detached
    }

    /// Bind to a resolved armature and zero-initialize the state mapping.
    pub(crate) fn attach(&mut self, armature: Entity, names: impl IntoIterator<Item = String>) {
        self.attachment = Attachment::Attached(armature);
        self.state = JointStateMap::from_names(names);
    }

    /// Permanently disable the sensor.
    pub(crate) fn detach(&mut self) {
        self.attachment = Attachment::Detached;
    }

    fn ready(&self) -> Result<Entity, SenseError> {
        self.armature().ok_or(SenseError::NotAttached)
    }

    /// Joint names in chain order.
    ///
    /// Available as soon as the chain is resolved, before any DOF source is
    /// registered.
    pub fn joint_names(&self) -> Result<&[String], SenseError> {
        self.ready()?;
        Ok(self.state.names())
    }

    /// Current value of one joint: radians for rotational joints, meters for
    /// prismatic ones.
    ///
    /// # Errors
    ///
    /// [`SenseError::NotAttached`] if the chain was never resolved,
    /// [`SenseError::UnknownJoint`] for a name absent from the chain
    /// (regardless of DOF binding state), [`SenseError::NotReady`] while the
    /// DOF source is unbound or lacks this joint, and a configuration error
    /// for malformed masks.
    pub fn joint_value(
        &self,
        armature: &Armature,
        dofs: Option<&JointDofs>,
        joint: &str,
    ) -> Result<f32, SenseError> {
        self.ready()?;
        let channel = armature
            .channel(joint)
            .ok_or_else(|| SenseError::UnknownJoint(joint.to_owned()))?;
        let mask = dofs
            .and_then(|d| d.mask(joint))
            .ok_or(SenseError::NotReady)?;
        Ok(resolve_value(channel, mask)?)
    }

    /// Full snapshot of the joint state, freshly computed.
    ///
    /// Fails with the first per-joint error rather than returning a partial
    /// mapping: callers expecting a complete snapshot should never see
    /// silently missing keys.
    pub fn state(
        &self,
        armature: &Armature,
        dofs: Option<&JointDofs>,
    ) -> Result<JointStateMap, SenseError> {
        self.ready()?;
        let mut map = JointStateMap::from_names(armature.channel_names().map(String::from));
        for channel in armature.channels() {
            let value = self.joint_value(armature, dofs, &channel.name)?;
            map.set(&channel.name, value);
        }
        Ok(map)
    }

    /// Bone length per joint (m), from chain geometry alone.
    ///
    /// Available whenever the sensor is attached, independent of DOF state.
    pub fn joint_lengths(&self, armature: &Armature) -> Result<HashMap<String, f32>, SenseError> {
        self.ready()?;
        Ok(armature
            .channels()
            .iter()
            .map(|c| (c.name.clone(), c.length()))
            .collect())
    }

    /// Once-per-frame scan: recompute every joint's value into the published
    /// mapping.
    ///
    /// Never fails — this runs inside the simulation loop. While the DOF
    /// source is unbound the whole scan is a no-op; a per-joint configuration
    /// fault keeps that joint's last good reading and is logged once per
    /// sensor.
    pub fn tick(&mut self, armature: &Armature, dofs: Option<&JointDofs>) {
        if self.armature().is_none() {
            return;
        }
        let Some(dofs) = dofs else {
            return;
        };
        for channel in armature.channels() {
            match dofs
                .mask(&channel.name)
                .ok_or(SenseError::NotReady)
                .and_then(|mask| resolve_value(channel, mask).map_err(SenseError::from))
            {
                Ok(value) => {
                    self.state.set(&channel.name, value);
                }
                Err(err) => {
                    if !self.fault_logged {
                        warn!("pose scan skipping joint '{}': {err}", channel.name);
                        self.fault_logged = true;
                    }
                }
            }
        }
    }

    /// The published joint-state mapping, as of the last completed tick.
    pub fn values(&self) -> &JointStateMap {
        &self.state
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
