//! Armsense joint-state sensing CLI.
//!
//! Provides two modes of operation:
//! - `headless`: Run a demo armature for N ticks and print the joint stream
//! - `info`: Print workspace crate versions and configuration

use std::path::PathBuf;

use bevy::prelude::*;
use clap::{Parser, Subcommand};

use armsense_chain::{Armature, Channel, ChannelKind};
use armsense_core::prelude::*;
use armsense_dof::{DofMask, DofRegistry, JointDofs};
use armsense_record::prelude::*;
use armsense_sensor::prelude::*;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Armsense armature joint-state sensing.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a demo armature headless and print the joint stream.
    Headless {
        /// Number of simulation ticks to run.
        #[arg(short = 'n', long, default_value_t = 10)]
        ticks: u32,

        /// Optional TOML config file (tick step, chain depth cap).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path for the JSON-lines joint stream.
        #[arg(short, long, default_value = "pose_stream.jsonl")]
        output: PathBuf,

        /// Disable the stream file.
        #[arg(long)]
        no_record: bool,
    },

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Demo scene
// ---------------------------------------------------------------------------

/// Three-joint demo arm: pan, flex, and a sliding gripper.
fn demo_arm() -> Armature {
    Armature::new()
        .with_channel(
            Channel::new("shoulder_pan", ChannelKind::Rotational)
                .with_bone(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)),
        )
        .with_channel(
            Channel::new("wrist_flex", ChannelKind::Rotational)
                .with_bone(Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, 0.0, 1.6)),
        )
        .with_channel(
            Channel::new("gripper_slide", ChannelKind::Prismatic)
                .with_bone(Vec3::new(0.0, 0.0, 1.6), Vec3::new(0.0, 0.0, 1.7)),
        )
}

fn demo_dofs() -> JointDofs {
    JointDofs::new()
        .with_joint("shoulder_pan", DofMask::Z)
        .with_joint("wrist_flex", DofMask::Y)
        .with_joint("gripper_slide", DofMask::Z)
}

/// Swing the demo joints along simple trajectories so the stream has
/// something to show.
fn drive_demo_arm(world: &mut World, armature: Entity, tick: u32) {
    #[allow(clippy::cast_precision_loss)]
    let t = tick as f32 * 0.05;
    let Some(mut arm) = world.get_mut::<Armature>(armature) else {
        return;
    };
    if let Some(channel) = arm.channel_mut("shoulder_pan") {
        channel.rotation.z = t.sin();
    }
    if let Some(channel) = arm.channel_mut("wrist_flex") {
        channel.rotation.y = 0.5 * (2.0 * t).cos();
    }
    if let Some(channel) = arm.channel_mut("gripper_slide") {
        channel.head.z = 1.6 + 0.05 * t.sin();
    }
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

fn run_headless(ticks: u32, config: Option<&PathBuf>, output: PathBuf, no_record: bool) {
    let mut app = App::new();
    app.add_plugins(bevy::log::LogPlugin::default());

    if let Some(path) = config {
        match SimConfig::from_file(path) {
            Ok(config) => {
                app.insert_resource(config);
            }
            Err(err) => {
                eprintln!("cannot load config {}: {err}", path.display());
                std::process::exit(1);
            }
        }
    }

    app.insert_resource(RecordingConfig {
        output_path: output.clone(),
        record_pose: !no_record,
    });
    app.add_plugins(ArmsenseCorePlugin);
    app.add_plugins(ArmsensePosePlugin);
    app.add_plugins(PoseRecorderPlugin);

    let armature = app.world_mut().spawn(demo_arm()).id();
    let sensor = app
        .world_mut()
        .spawn((ArmaturePoseSensor::new(), ChildOf(armature)))
        .id();

    app.finish();
    app.cleanup();

    app.world_mut()
        .resource_mut::<DofRegistry>()
        .register(armature, demo_dofs());

    for tick in 0..ticks {
        drive_demo_arm(app.world_mut(), armature, tick);
        app.update();

        let time = app.world().resource::<SimTime>();
        let state = app
            .world()
            .get::<ArmaturePoseSensor>(sensor)
            .map(ArmaturePoseSensor::values);
        if let Some(state) = state {
            let joints: Vec<String> = state
                .iter()
                .map(|(name, value)| format!("{name}={value:.3}"))
                .collect();
            println!("t={:.3}s {}", time.secs_f64(), joints.join(" "));
        }
    }

    if !no_record {
        let frames = app.world().resource::<PoseRecorder>().frames_written();
        println!("\nwrote {frames} frames to {}", output.display());
    }
}

fn run_info() {
    println!("armsense v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  armsense-core   {}", env!("CARGO_PKG_VERSION"));
    println!("  armsense-chain  {}", env!("CARGO_PKG_VERSION"));
    println!("  armsense-dof    {}", env!("CARGO_PKG_VERSION"));
    println!("  armsense-sensor {}", env!("CARGO_PKG_VERSION"));
    println!("  armsense-record {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("edition: 2024");
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Headless {
            ticks,
            config,
            output,
            no_record,
        }) => run_headless(ticks, config.as_ref(), output, no_record),
        Some(Commands::Info) => run_info(),
        None => {
            // Default: short headless demo without a stream file
            run_headless(10, None, PathBuf::from("pose_stream.jsonl"), true);
        }
    }
}
