// armsense-core: Errors, config, time, and scheduling for armature sensing.

pub mod config;
pub mod error;
pub mod time;

use bevy::prelude::*;

pub use error::{ArmsenseError, ConfigError, DofError, SenseError};

// ---------------------------------------------------------------------------
// ArmsenseSet
// ---------------------------------------------------------------------------

/// System-set ordering for one simulation tick.
///
/// `Act` (actuators write poses) runs before `Sense` (sensors read them),
/// which runs before `Publish` (streamed output). All three live in the
/// [`Update`] schedule and are chained by [`ArmsenseCorePlugin`].
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArmsenseSet {
    /// Pose-writing systems (actuator side).
    Act,
    /// Sensor scan systems.
    Sense,
    /// Streaming/recording systems.
    Publish,
}

// ---------------------------------------------------------------------------
// ArmsenseCorePlugin
// ---------------------------------------------------------------------------

/// Core plugin: inserts [`SimConfig`](config::SimConfig) and
/// [`SimTime`](time::SimTime), configures [`ArmsenseSet`] ordering, and
/// advances the clock once per frame.
pub struct ArmsenseCorePlugin;

impl Plugin for ArmsenseCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<config::SimConfig>();
        app.init_resource::<time::SimTime>();
        app.configure_sets(
            Update,
            (ArmsenseSet::Act, ArmsenseSet::Sense, ArmsenseSet::Publish).chain(),
        );
        app.add_systems(First, advance_sim_time);
    }
}

/// Advances [`SimTime`](time::SimTime) by one control step each frame.
#[allow(clippy::needless_pass_by_value)] // Bevy system parameters are extracted by value
fn advance_sim_time(config: Res<config::SimConfig>, mut time: ResMut<time::SimTime>) {
    time.advance_secs(config.tick_dt);
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ArmsenseCorePlugin, ArmsenseSet,
        config::SimConfig,
        error::{ArmsenseError, ConfigError, DofError, SenseError},
        time::SimTime,
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
