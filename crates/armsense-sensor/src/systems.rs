//! Bevy systems for armature pose sensing.

use bevy::log::{debug, error};
use bevy::prelude::*;

use armsense_chain::{Armature, find_armature};
use armsense_core::config::SimConfig;
use armsense_dof::DofRegistry;

use crate::pose::ArmaturePoseSensor;

/// Resolves the owning armature for every pending sensor.
///
/// Runs in [`PreUpdate`] as an exclusive system (the upward hierarchy walk
/// needs arbitrary component reads). Sensors whose walk tops out without
/// finding an [`Armature`] are permanently disabled, with the failure logged
/// once here.
pub fn initialize_pose_sensors(world: &mut World) {
    let max_depth = world.resource::<SimConfig>().max_chain_depth;

    let pending: Vec<Entity> = world
        .query::<(Entity, &ArmaturePoseSensor)>()
        .iter(world)
        .filter(|(_, sensor)| sensor.is_pending())
        .map(|(entity, _)| entity)
        .collect();

    for entity in pending {
        match find_armature(world, entity, max_depth) {
            Some(owner) => {
                let names: Vec<String> = world
                    .get::<Armature>(owner)
                    .map(|armature| armature.channel_names().map(String::from).collect())
                    .unwrap_or_default();
                if let Some(mut sensor) = world.get_mut::<ArmaturePoseSensor>(entity) {
                    sensor.attach(owner, names);
                    debug!("pose sensor {entity} attached to armature {owner}");
                }
            }
            None => {
                error!(
                    "pose sensor {entity} is not parented to an armature; \
                     it must be spawned as a descendant of one. Disabling."
                );
                if let Some(mut sensor) = world.get_mut::<ArmaturePoseSensor>(entity) {
                    sensor.detach();
                }
            }
        }
    }
}

/// Scans every attached sensor's armature once per frame.
///
/// Runs in [`ArmsenseSet::Sense`](armsense_core::ArmsenseSet::Sense), after
/// the actuator side has written poses for the frame. Sensors whose DOF
/// source is not registered yet simply keep their previous readings.
#[allow(clippy::needless_pass_by_value)] // Bevy system parameters are extracted by value
pub fn pose_tick_system(
    registry: Res<DofRegistry>,
    armatures: Query<&Armature>,
    mut sensors: Query<&mut ArmaturePoseSensor>,
) {
    for mut sensor in &mut sensors {
        let Some(owner) = sensor.armature() else {
            continue;
        };
        let Ok(armature) = armatures.get(owner) else {
            continue;
        };
        sensor.tick(armature, registry.dofs(owner));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArmsensePosePlugin;
    use approx::assert_relative_eq;
    use armsense_chain::{Channel, ChannelKind};
    use armsense_core::ArmsenseCorePlugin;
    use armsense_dof::{DofMask, JointDofs};

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(ArmsenseCorePlugin);
        app.add_plugins(ArmsensePosePlugin);
        app.finish();
        app.cleanup();
        app
    }

    fn spawn_arm(app: &mut App) -> (Entity, Entity) {
        let armature = app
            .world_mut()
            .spawn(
                Armature::new().with_channel(
                    Channel::new("pivot", ChannelKind::Rotational)
                        .with_rotation(Vec3::new(0.0, 0.0, 1.2)),
                ),
            )
            .id();
        let sensor = app
            .world_mut()
            .spawn((ArmaturePoseSensor::new(), ChildOf(armature)))
            .id();
        (armature, sensor)
    }

    #[test]
    fn init_attaches_sensor_under_armature() {
        let mut app = test_app();
        let (armature, sensor) = spawn_arm(&mut app);
        app.update();

        let sensor = app.world().get::<ArmaturePoseSensor>(sensor).unwrap();
        assert_eq!(sensor.armature(), Some(armature));
        assert_eq!(sensor.joint_names().unwrap(), &["pivot".to_string()]);
        // Zero-initialized until a DOF source appears.
        assert_relative_eq!(sensor.values().get("pivot").unwrap(), 0.0);
    }

    #[test]
    fn init_disables_orphan_sensor() {
        let mut app = test_app();
        let sensor = app.world_mut().spawn(ArmaturePoseSensor::new()).id();
        app.update();

        let sensor = app.world().get::<ArmaturePoseSensor>(sensor).unwrap();
        assert!(sensor.is_detached());
    }

    #[test]
    fn tick_skips_unregistered_armature() {
        let mut app = test_app();
        let (_, sensor) = spawn_arm(&mut app);
        app.update();
        app.update();

        let sensor = app.world().get::<ArmaturePoseSensor>(sensor).unwrap();
        assert_relative_eq!(sensor.values().get("pivot").unwrap(), 0.0);
    }

    #[test]
    fn tick_reads_registered_armature() {
        let mut app = test_app();
        let (armature, sensor) = spawn_arm(&mut app);
        app.world_mut()
            .resource_mut::<DofRegistry>()
            .register(armature, JointDofs::new().with_joint("pivot", DofMask::Z));
        app.update();

        let sensor = app.world().get::<ArmaturePoseSensor>(sensor).unwrap();
        assert_relative_eq!(sensor.values().get("pivot").unwrap(), 1.2);
    }

    #[test]
    fn late_registration_is_picked_up_without_reinit() {
        let mut app = test_app();
        let (armature, sensor) = spawn_arm(&mut app);

        // Several frames with no DOF source: sensor stays quiet at zero.
        app.update();
        app.update();
        {
            let s = app.world().get::<ArmaturePoseSensor>(sensor).unwrap();
            assert_relative_eq!(s.values().get("pivot").unwrap(), 0.0);
        }

        // The actuator shows up late; the very next tick succeeds.
        app.world_mut()
            .resource_mut::<DofRegistry>()
            .register(armature, JointDofs::new().with_joint("pivot", DofMask::Z));
        app.update();
        let s = app.world().get::<ArmaturePoseSensor>(sensor).unwrap();
        assert_relative_eq!(s.values().get("pivot").unwrap(), 1.2);
    }

    #[test]
    fn pose_changes_flow_through_each_tick() {
        let mut app = test_app();
        let (armature, sensor) = spawn_arm(&mut app);
        app.world_mut()
            .resource_mut::<DofRegistry>()
            .register(armature, JointDofs::new().with_joint("pivot", DofMask::Z));
        app.update();

        app.world_mut()
            .get_mut::<Armature>(armature)
            .unwrap()
            .channel_mut("pivot")
            .unwrap()
            .rotation
            .z = -0.4;
        app.update();

        let s = app.world().get::<ArmaturePoseSensor>(sensor).unwrap();
        assert_relative_eq!(s.values().get("pivot").unwrap(), -0.4);
    }
}
