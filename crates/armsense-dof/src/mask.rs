//! Three-axis DOF masks.

use armsense_core::error::DofError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DofMask
// ---------------------------------------------------------------------------

/// Boolean mask over a joint's local X/Y/Z axes.
///
/// A well-formed mask has exactly one true entry: the joint's single free
/// axis. Masks with zero or several true entries are configuration defects
/// and are rejected by [`active_axis`](Self::active_axis) rather than being
/// resolved silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DofMask(pub [bool; 3]);

impl DofMask {
    /// Free about/along local X.
    pub const X: Self = Self([true, false, false]);
    /// Free about/along local Y.
    pub const Y: Self = Self([false, true, false]);
    /// Free about/along local Z.
    pub const Z: Self = Self([false, false, true]);

    /// Index of the single active axis (0 = X, 1 = Y, 2 = Z).
    ///
    /// # Errors
    ///
    /// [`DofError::NoActiveAxis`] if nothing is set,
    /// [`DofError::MultipleActiveAxes`] if more than one axis is set.
    pub fn active_axis(&self) -> Result<usize, DofError> {
        let count = self.0.iter().filter(|&&axis| axis).count();
        match count {
            0 => Err(DofError::NoActiveAxis),
            1 => Ok(self.0.iter().position(|&axis| axis).unwrap_or(0)),
            _ => Err(DofError::MultipleActiveAxes { count }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
