//! Armature and sensor spawn helpers for tests.

use bevy::prelude::*;

use armsense_chain::{Armature, Channel, ChannelKind};
use armsense_dof::{DofMask, DofRegistry, JointDofs};
use armsense_sensor::ArmaturePoseSensor;

/// Two-joint arm fixture: `wrist_flex` rotates about local Y at 0.7 rad,
/// `gripper_slide` translates along local Z to 1.5 m.
#[must_use]
pub fn two_joint_arm() -> Armature {
    Armature::new()
        .with_channel(
            Channel::new("wrist_flex", ChannelKind::Rotational)
                .with_bone(Vec3::ZERO, Vec3::new(0.0, 0.0, 3.0))
                .with_rotation(Vec3::new(0.0, 0.7, 0.0)),
        )
        .with_channel(
            Channel::new("gripper_slide", ChannelKind::Prismatic)
                .with_bone(Vec3::new(0.0, 0.0, 1.5), Vec3::new(0.0, 0.0, 1.7)),
        )
}

/// DOF masks matching [`two_joint_arm`].
#[must_use]
pub fn two_joint_arm_dofs() -> JointDofs {
    JointDofs::new()
        .with_joint("wrist_flex", DofMask::Y)
        .with_joint("gripper_slide", DofMask::Z)
}

/// Spawn an armature entity with a pose sensor mounted one level below it.
///
/// Returns `(armature, sensor)` entity IDs. The sensor binds on the next
/// `PreUpdate` pass.
pub fn spawn_armature_with_sensor(world: &mut World, armature: Armature) -> (Entity, Entity) {
    let root = world.spawn(armature).id();
    let mount = world.spawn(ChildOf(root)).id();
    let sensor = world
        .spawn((ArmaturePoseSensor::new(), ChildOf(mount)))
        .id();
    (root, sensor)
}

/// Spawn the [`two_joint_arm`] fixture with a mounted sensor.
///
/// Returns `(armature, sensor)` entity IDs.
pub fn spawn_two_joint_arm(app: &mut App) -> (Entity, Entity) {
    spawn_armature_with_sensor(app.world_mut(), two_joint_arm())
}

/// Register the [`two_joint_arm_dofs`] masks for the given armature.
///
/// Must be called after the pose plugin has been added (so that
/// `DofRegistry` exists as a resource).
pub fn register_arm_dofs(app: &mut App, armature: Entity) {
    app.world_mut()
        .resource_mut::<DofRegistry>()
        .register(armature, two_joint_arm_dofs());
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
