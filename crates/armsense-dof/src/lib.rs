//! Joint degree-of-freedom declarations.
//!
//! The armature actuator owns, per joint, a three-axis boolean mask naming
//! the single local axis that joint is free to move along or about. Sensors
//! consume these declarations through the [`DofRegistry`] resource, keyed by
//! the armature's owning entity.
//!
//! The registry is an ordinary Bevy resource rather than process-global
//! state: components that need it take `Res<DofRegistry>` and stay
//! unit-testable without a live host. Registration order is not guaranteed —
//! an actuator may register after the sensors that read it start ticking, so
//! consumers re-attempt the lookup until it succeeds.

pub mod mask;
pub mod registry;

pub use mask::DofMask;
pub use registry::{DofRegistry, JointDofs};
