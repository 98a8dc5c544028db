use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_tick_dt() -> f64 {
    0.02
}
const fn default_max_chain_depth() -> usize {
    64
}

// ---------------------------------------------------------------------------
// SimConfig
// ---------------------------------------------------------------------------

/// Main simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Resource)]
pub struct SimConfig {
    /// Control timestep in seconds (default: 0.02 = 50 Hz).
    #[serde(default = "default_tick_dt")]
    pub tick_dt: f64,

    /// Depth cap for the upward armature search (default: 64).
    ///
    /// The scene hierarchy is acyclic by construction; the cap only bounds
    /// the walk on pathologically deep trees.
    #[serde(default = "default_max_chain_depth")]
    pub max_chain_depth: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_dt: default_tick_dt(),
            max_chain_depth: default_max_chain_depth(),
        }
    }
}

impl SimConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_dt <= 0.0 {
            return Err(ConfigError::InvalidTickDt(self.tick_dt));
        }
        if self.max_chain_depth == 0 {
            return Err(ConfigError::InvalidChainDepth);
        }
        Ok(())
    }

    /// Tick rate in Hz.
    pub fn tick_hz(&self) -> f64 {
        1.0 / self.tick_dt
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_values() {
        let config = SimConfig::default();
        assert_relative_eq!(config.tick_dt, 0.02);
        assert_eq!(config.max_chain_depth, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tick_hz() {
        let config = SimConfig::default();
        assert_relative_eq!(config.tick_hz(), 50.0);
    }

    #[test]
    fn zero_tick_dt_is_invalid() {
        let config = SimConfig {
            tick_dt: 0.0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTickDt(_))
        ));
    }

    #[test]
    fn negative_tick_dt_is_invalid() {
        let config = SimConfig {
            tick_dt: -0.01,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTickDt(_))
        ));
    }

    #[test]
    fn zero_chain_depth_is_invalid() {
        let config = SimConfig {
            max_chain_depth: 0,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidChainDepth)
        ));
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: SimConfig = toml::from_str("tick_dt = 0.05").unwrap();
        assert_relative_eq!(config.tick_dt, 0.05);
        assert_eq!(config.max_chain_depth, 64);
    }

    #[test]
    fn parses_empty_toml() {
        let config: SimConfig = toml::from_str("").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn from_file_missing_path_is_io_error() {
        let result = SimConfig::from_file("/nonexistent/armsense.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn serialize_roundtrip() {
        let config = SimConfig {
            tick_dt: 0.004,
            max_chain_depth: 8,
        };
        let text = toml::to_string(&config).unwrap();
        let config2: SimConfig = toml::from_str(&text).unwrap();
        assert_eq!(config, config2);
    }
}
