//! [`PoseRecorderPlugin`] — registers the stream recording systems.

use bevy::prelude::*;

use armsense_core::ArmsenseSet;

use crate::recorder::{RecordingConfig, record_pose_system, setup_recorder};

// ---------------------------------------------------------------------------
// PoseRecorderPlugin
// ---------------------------------------------------------------------------

/// Bevy plugin that streams joint-state frames to a JSON-lines sink.
///
/// # Usage
///
/// ```no_run
/// use bevy::prelude::*;
/// use armsense_record::plugin::PoseRecorderPlugin;
/// use armsense_record::recorder::RecordingConfig;
///
/// let mut app = App::new();
/// app.insert_resource(RecordingConfig {
///     output_path: "run.jsonl".into(),
///     ..RecordingConfig::default()
/// });
/// app.add_plugins(PoseRecorderPlugin);
/// ```
///
/// Frames are appended in [`ArmsenseSet::Publish`], after the sensor scan of
/// the same frame. Hosts may pre-insert a
/// [`PoseRecorder`](crate::recorder::PoseRecorder) resource (for example an
/// in-memory sink in tests); `setup_recorder` then leaves it untouched.
pub struct PoseRecorderPlugin;

impl Plugin for PoseRecorderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RecordingConfig>();

        // setup_recorder takes &mut World (exclusive system) — add to Startup.
        app.add_systems(Startup, setup_recorder);
        app.add_systems(Update, record_pose_system.in_set(ArmsenseSet::Publish));
    }
}
