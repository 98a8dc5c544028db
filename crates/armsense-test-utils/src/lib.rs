//! Shared test fixtures and utilities for Armsense crates.
//!
//! Provides reusable helpers for building Bevy test apps, spawning armature
//! fixtures with mounted pose sensors, and registering DOF masks.

pub mod app;
pub mod spawn;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use app::{minimal_test_app, pose_test_app};
pub use spawn::{
    register_arm_dofs, spawn_armature_with_sensor, spawn_two_joint_arm, two_joint_arm,
    two_joint_arm_dofs,
};
