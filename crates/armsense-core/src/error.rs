use thiserror::Error;

/// Top-level error type for the armsense workspace.
#[derive(Debug, Error)]
pub enum ArmsenseError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("DOF declaration error: {0}")]
    Dof(#[from] DofError),

    #[error("Sensor error: {0}")]
    Sense(#[from] SenseError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid tick_dt: {0} (must be > 0)")]
    InvalidTickDt(f64),

    #[error("Invalid max_chain_depth: 0 (must be >= 1)")]
    InvalidChainDepth,
}

/// Malformed DOF declarations.
///
/// Copy + static messages for cheap propagation in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DofError {
    #[error("DOF mask has no active axis")]
    NoActiveAxis,

    #[error("DOF mask has {count} active axes (expected exactly 1)")]
    MultipleActiveAxes { count: usize },
}

/// Sensor query errors.
///
/// `NotAttached` is fatal for the sensor instance; `UnknownJoint` is a caller
/// error; `NotReady` means the DOF source has not been registered yet and the
/// caller should retry later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SenseError {
    #[error("sensor is not attached to an armature")]
    NotAttached,

    #[error("unknown joint: {0}")]
    UnknownJoint(String),

    #[error("armature DOF source not yet registered")]
    NotReady,

    #[error(transparent)]
    Dof(#[from] DofError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
