//! `armsense-record` — JSON-lines joint-state streaming for Armsense.
//!
//! Add [`PoseRecorderPlugin`] to your Bevy app and insert a
//! [`RecordingConfig`] resource to pick the output path. The plugin appends
//! one timestamped [`types::PoseFrame`] per attached pose sensor per tick,
//! one JSON object per line.
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use armsense_record::prelude::*;
//!
//! let mut app = App::new();
//! app.insert_resource(RecordingConfig {
//!     output_path: "my_run.jsonl".into(),
//!     ..RecordingConfig::default()
//! });
//! app.add_plugins(PoseRecorderPlugin);
//! ```

pub mod plugin;
pub mod recorder;
pub mod types;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        plugin::PoseRecorderPlugin,
        recorder::{PoseRecorder, RecordingConfig},
        types::PoseFrame,
    };
}

pub use plugin::PoseRecorderPlugin;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
