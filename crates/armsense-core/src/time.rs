use std::time::Duration;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SimTime
// ---------------------------------------------------------------------------

/// Integer-nanosecond simulation clock.
///
/// Avoids floating-point accumulation errors by tracking elapsed time as a
/// monotonically increasing `u64` nanosecond count.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Resource,
)]
pub struct SimTime {
    nanos: u64,
}

impl SimTime {
    /// Create a new `SimTime` at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { nanos: 0 }
    }

    /// Create a `SimTime` from a raw nanosecond count.
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self { nanos }
    }

    /// Create a `SimTime` from seconds (as `f64`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_secs(secs: f64) -> Self {
        Self {
            nanos: (secs * 1_000_000_000.0) as u64,
        }
    }

    /// Raw nanosecond count.
    #[must_use]
    pub const fn nanos(&self) -> u64 {
        self.nanos
    }

    /// Elapsed milliseconds (truncated).
    #[must_use]
    pub const fn millis(&self) -> u64 {
        self.nanos / 1_000_000
    }

    /// Elapsed seconds as `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn secs_f64(&self) -> f64 {
        self.nanos as f64 / 1_000_000_000.0
    }

    /// Convert to a standard [`Duration`].
    #[must_use]
    pub const fn to_duration(&self) -> Duration {
        Duration::from_nanos(self.nanos)
    }

    /// Advance the clock by `delta_nanos` nanoseconds.
    pub const fn advance(&mut self, delta_nanos: u64) {
        self.nanos = self.nanos.saturating_add(delta_nanos);
    }

    /// Advance the clock by `delta_secs` seconds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn advance_secs(&mut self, delta_secs: f64) {
        let delta_nanos = (delta_secs * 1_000_000_000.0) as u64;
        self.advance(delta_nanos);
    }

    /// Reset the clock to zero.
    pub const fn reset(&mut self) {
        self.nanos = 0;
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
    fn new_starts_at_zero() {
        let t = SimTime::new();
        assert_eq!(t.nanos(), 0);
        assert_eq!(t, SimTime::default());
    }

    #[test]
    fn from_nanos_roundtrip() {
        let t = SimTime::from_nanos(1_500_000_000);
        assert_eq!(t.nanos(), 1_500_000_000);
        assert_eq!(t.millis(), 1_500);
        assert_relative_eq!(t.secs_f64(), 1.5);
    }

    #[test]
    fn from_secs() {
        let t = SimTime::from_secs(0.02);
        assert_eq!(t.nanos(), 20_000_000);
    }

    #[test]
    fn advance_accumulates() {
        let mut t = SimTime::new();
        t.advance(1_000);
        t.advance(2_000);
        assert_eq!(t.nanos(), 3_000);
    }

    #[test]
    fn advance_secs_accumulates_without_drift() {
        let mut t = SimTime::new();
        for _ in 0..50 {
            t.advance_secs(0.02);
        }
        assert_eq!(t.nanos(), 1_000_000_000);
        assert_relative_eq!(t.secs_f64(), 1.0);
    }

    #[test]
    fn advance_saturates_at_max() {
        let mut t = SimTime::from_nanos(u64::MAX - 1);
        t.advance(100);
        assert_eq!(t.nanos(), u64::MAX);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut t = SimTime::from_secs(5.0);
        t.reset();
        assert_eq!(t.nanos(), 0);
    }

    #[test]
    fn to_duration() {
        let t = SimTime::from_nanos(250_000_000);
        assert_eq!(t.to_duration(), Duration::from_millis(250));
    }

    #[test]
    fn ordering() {
        assert!(SimTime::from_nanos(1) < SimTime::from_nanos(2));
    }
}
