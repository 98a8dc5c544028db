//! Armature pose sensing: per-tick joint-state resolution and queries.
//!
//! The [`ArmaturePoseSensor`] component streams the joint state (the rotation
//! or translation value of each joint) of the armature it is parented under.
//! It only *reads* armature configuration; writing poses is the actuator
//! side's job, which also owns the per-joint DOF declarations the sensor
//! resolves values against (see `armsense-dof`).
//!
//! # Example
//!
//! ```
//! use bevy::prelude::*;
//! use armsense_chain::{Armature, Channel, ChannelKind};
//! use armsense_core::ArmsenseCorePlugin;
//! use armsense_dof::{DofMask, DofRegistry, JointDofs};
//! use armsense_sensor::{ArmaturePoseSensor, ArmsensePosePlugin};
//!
//! let mut app = App::new();
//! app.add_plugins(ArmsenseCorePlugin);
//! app.add_plugins(ArmsensePosePlugin);
//!
//! let armature = app
//!     .world_mut()
//!     .spawn(Armature::new().with_channel(
//!         Channel::new("pivot", ChannelKind::Rotational)
//!             .with_rotation(Vec3::new(0.0, 0.7, 0.0)),
//!     ))
//!     .id();
//! app.world_mut()
//!     .spawn((ArmaturePoseSensor::new(), ChildOf(armature)));
//! app.world_mut()
//!     .resource_mut::<DofRegistry>()
//!     .register(armature, JointDofs::new().with_joint("pivot", DofMask::Y));
//!
//! app.finish();
//! app.cleanup();
//! app.update();
//! ```

pub mod pose;
pub mod resolver;
pub mod systems;

pub use pose::{ArmaturePoseSensor, JointStateMap};
pub use resolver::resolve_value;

use bevy::prelude::*;

use armsense_core::ArmsenseSet;
use armsense_dof::DofRegistry;

// ---------------------------------------------------------------------------
// ArmsensePosePlugin
// ---------------------------------------------------------------------------

/// Bevy plugin wiring the pose sensor into the simulation loop.
///
/// Requires [`ArmsenseCorePlugin`](armsense_core::ArmsenseCorePlugin) (it
/// provides [`SimConfig`](armsense_core::config::SimConfig) and the
/// system-set ordering). Initializes the [`DofRegistry`], resolves pending
/// sensors in [`PreUpdate`], and runs the per-frame scan in
/// [`ArmsenseSet::Sense`].
pub struct ArmsensePosePlugin;

impl Plugin for ArmsensePosePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DofRegistry>();
        app.add_systems(PreUpdate, systems::initialize_pose_sensors);
        app.add_systems(
            Update,
            systems::pose_tick_system.in_set(ArmsenseSet::Sense),
        );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ArmsensePosePlugin,
        pose::{ArmaturePoseSensor, JointStateMap},
        resolver::resolve_value,
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use armsense_core::ArmsenseCorePlugin;

    #[test]
    fn plugin_builds_without_panic() {
        let mut app = App::new();
        app.add_plugins(ArmsenseCorePlugin);
        app.add_plugins(ArmsensePosePlugin);
        app.finish();
        app.cleanup();
        app.update();
    }

    #[test]
    fn plugin_initializes_dof_registry() {
        let mut app = App::new();
        app.add_plugins(ArmsenseCorePlugin);
        app.add_plugins(ArmsensePosePlugin);
        assert!(app.world().get_resource::<DofRegistry>().is_some());
    }
}
