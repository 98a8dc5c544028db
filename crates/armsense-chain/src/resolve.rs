//! Upward armature resolution through the scene hierarchy.

use bevy::prelude::*;

use crate::armature::Armature;

/// Walk upward from `start` through [`ChildOf`] links and return the first
/// entity (inclusive) carrying an [`Armature`].
///
/// Returns `None` if the walk reaches the top of the hierarchy, or exhausts
/// `max_depth` links, without finding one. Read-only and always terminates.
pub fn find_armature(world: &World, start: Entity, max_depth: usize) -> Option<Entity> {
    let mut current = start;
    for _ in 0..=max_depth {
        if world.get::<Armature>(current).is_some() {
            return Some(current);
        }
        current = world.get::<ChildOf>(current)?.parent();
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
