//! Actuator-side registry of DOF declarations, keyed by armature entity.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::mask::DofMask;

// ---------------------------------------------------------------------------
// JointDofs
// ---------------------------------------------------------------------------

/// DOF masks for every joint of one armature, keyed by joint name.
#[derive(Debug, Clone, Default)]
pub struct JointDofs {
    masks: HashMap<String, DofMask>,
}

impl JointDofs {
    /// Create an empty declaration table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: declare a joint's mask. Returns `self` for chaining.
    #[must_use]
    pub fn with_joint(mut self, name: impl Into<String>, mask: DofMask) -> Self {
        self.masks.insert(name.into(), mask);
        self
    }

    /// Declare or replace a joint's mask.
    pub fn insert(&mut self, name: impl Into<String>, mask: DofMask) {
        self.masks.insert(name.into(), mask);
    }

    /// Mask for a joint, if declared.
    pub fn mask(&self, joint: &str) -> Option<DofMask> {
        self.masks.get(joint).copied()
    }

    /// Number of declared joints.
    pub fn len(&self) -> usize {
        self.masks.len()
    }

    /// True if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.masks.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DofRegistry
// ---------------------------------------------------------------------------

/// Process-wide table of DOF declarations, keyed by the armature's owning
/// entity.
///
/// The actuator registers its armature's declarations here when it is
/// constructed; sensors look the table up on every read. A missing entry is
/// not an error at this level — the actuator may simply not exist yet.
#[derive(Resource, Debug, Clone, Default)]
pub struct DofRegistry {
    entries: HashMap<Entity, JointDofs>,
}

impl DofRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the declarations for an armature.
    pub fn register(&mut self, armature: Entity, dofs: JointDofs) {
        self.entries.insert(armature, dofs);
    }

    /// Remove an armature's declarations, returning them if present.
    pub fn unregister(&mut self, armature: Entity) -> Option<JointDofs> {
        self.entries.remove(&armature)
    }

    /// Declarations for an armature, if registered.
    pub fn dofs(&self, armature: Entity) -> Option<&JointDofs> {
        self.entries.get(&armature)
    }

    /// True if the armature has registered declarations.
    pub fn is_registered(&self, armature: Entity) -> bool {
        self.entries.contains_key(&armature)
    }

    /// Number of registered armatures.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no armature is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
