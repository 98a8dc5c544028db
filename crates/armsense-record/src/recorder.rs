//! Stream recorder resources and Bevy systems.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use bevy::log::{error, warn};
use bevy::prelude::*;

use armsense_core::time::SimTime;
use armsense_sensor::ArmaturePoseSensor;

use crate::types::PoseFrame;

// ---------------------------------------------------------------------------
// RecordingConfig
// ---------------------------------------------------------------------------

/// Configuration resource controlling the joint-state stream.
///
/// Insert before the app starts; [`PoseRecorderPlugin`](crate::PoseRecorderPlugin)
/// falls back to `pose_stream.jsonl` in the current directory.
#[derive(Resource, Clone, Debug)]
pub struct RecordingConfig {
    /// Path for the output JSON-lines file.
    pub output_path: PathBuf,
    /// Whether to stream at all.
    pub record_pose: bool,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("pose_stream.jsonl"),
            record_pose: true,
        }
    }
}

// ---------------------------------------------------------------------------
// PoseRecorder
// ---------------------------------------------------------------------------

/// Resource wrapping the open stream sink.
///
/// One [`PoseFrame`] is appended per attached sensor per tick, one JSON
/// object per line. A sink failure disables the recorder for the rest of the
/// run; it never interrupts the simulation loop.
#[derive(Resource)]
pub struct PoseRecorder {
    sink: Option<Box<dyn Write + Send + Sync>>,
    frames_written: u64,
}

impl PoseRecorder {
    /// Open a JSON-lines file at the given path.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error if the file cannot be created.
    pub fn open(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(Box::new(BufWriter::new(file))))
    }

    /// Wrap an arbitrary sink (in-memory buffers in tests, sockets, ...).
    pub fn from_writer(sink: Box<dyn Write + Send + Sync>) -> Self {
        Self {
            sink: Some(sink),
            frames_written: 0,
        }
    }

    /// A recorder with no sink; every write is a no-op.
    pub const fn disabled() -> Self {
        Self {
            sink: None,
            frames_written: 0,
        }
    }

    /// True if frames are going anywhere.
    pub const fn is_active(&self) -> bool {
        self.sink.is_some()
    }

    /// Total frames appended so far.
    pub const fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Append one frame as a JSON line.
    ///
    /// # Errors
    ///
    /// Serialization or sink IO errors; the caller decides whether to keep
    /// the recorder alive.
    pub fn write_frame(&mut self, frame: &PoseFrame) -> Result<(), Box<dyn std::error::Error>> {
        let Some(sink) = self.sink.as_mut() else {
            return Ok(());
        };
        let mut line = serde_json::to_vec(frame)?;
        line.push(b'\n');
        sink.write_all(&line)?;
        sink.flush()?;
        self.frames_written += 1;
        Ok(())
    }

    /// Drop the sink, disabling further writes.
    pub fn close(&mut self) {
        self.sink = None;
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Opens the sink described by [`RecordingConfig`] on startup.
///
/// On failure the recorder is inserted disabled: the simulation runs on
/// without a stream, with the failure logged here.
pub fn setup_recorder(world: &mut World) {
    if world.contains_resource::<PoseRecorder>() {
        return; // pre-inserted by the host (tests use in-memory sinks)
    }
    let config = world.resource::<RecordingConfig>().clone();
    if !config.record_pose {
        world.insert_resource(PoseRecorder::disabled());
        return;
    }
    match PoseRecorder::open(&config.output_path) {
        Ok(recorder) => {
            world.insert_resource(recorder);
        }
        Err(err) => {
            error!(
                "cannot open pose stream {}: {err}; recording disabled",
                config.output_path.display()
            );
            world.insert_resource(PoseRecorder::disabled());
        }
    }
}

/// Appends one frame per attached sensor each tick.
///
/// Runs in [`ArmsenseSet::Publish`](armsense_core::ArmsenseSet::Publish),
/// after the sensor scan of the same frame.
#[allow(clippy::needless_pass_by_value)] // Bevy system parameters are extracted by value
pub fn record_pose_system(
    time: Res<SimTime>,
    sensors: Query<&ArmaturePoseSensor>,
    mut recorder: ResMut<PoseRecorder>,
) {
    if !recorder.is_active() {
        return;
    }
    for sensor in &sensors {
        if sensor.armature().is_none() {
            continue;
        }
        let frame = PoseFrame::capture(time.nanos(), sensor.values());
        if let Err(err) = recorder.write_frame(&frame) {
            warn!("pose stream write failed: {err}; recording disabled");
            recorder.close();
            return;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// In-memory sink whose contents outlive the recorder.
    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl SharedSink {
        fn contents(&self) -> Vec<u8> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_json_line_per_frame() {
        let sink = SharedSink::default();
        let mut recorder = PoseRecorder::from_writer(Box::new(sink.clone()));

        let frame = PoseFrame {
            timestamp_ns: 20_000_000,
            names: vec!["pivot".into()],
            values: vec![0.7],
        };
        recorder.write_frame(&frame).unwrap();
        recorder.write_frame(&frame).unwrap();
        assert_eq!(recorder.frames_written(), 2);

        let text = String::from_utf8(sink.contents()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: PoseFrame = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn disabled_recorder_ignores_writes() {
        let mut recorder = PoseRecorder::disabled();
        assert!(!recorder.is_active());
        let frame = PoseFrame {
            timestamp_ns: 0,
            names: vec![],
            values: vec![],
        };
        recorder.write_frame(&frame).unwrap();
        assert_eq!(recorder.frames_written(), 0);
    }

    #[test]
    fn close_stops_writing() {
        let sink = SharedSink::default();
        let mut recorder = PoseRecorder::from_writer(Box::new(sink.clone()));
        recorder.close();
        let frame = PoseFrame {
            timestamp_ns: 0,
            names: vec![],
            values: vec![],
        };
        recorder.write_frame(&frame).unwrap();
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn default_config() {
        let config = RecordingConfig::default();
        assert_eq!(config.output_path, PathBuf::from("pose_stream.jsonl"));
        assert!(config.record_pose);
    }
}
