//! Kinematic chain model for armature sensing.
//!
//! An [`Armature`] is an ordered sequence of [`Channel`]s (joints) from root
//! to tip, attached as a component to the simulated body that owns the chain.
//! [`find_armature`] resolves the owning armature for any entity parented
//! somewhere below it in the scene hierarchy.
//!
//! This crate is purely structural: it knows nothing about which axis of a
//! channel is free to move. DOF declarations live with the actuator side
//! (`armsense-dof`), and scalar extraction lives in `armsense-sensor`.

pub mod armature;
pub mod resolve;

pub use armature::{Armature, Channel, ChannelKind};
pub use resolve::find_armature;
