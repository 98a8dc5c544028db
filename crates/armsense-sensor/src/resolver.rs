//! Scalar extraction for a single joint.

use armsense_chain::{Channel, ChannelKind};
use armsense_core::error::DofError;
use armsense_dof::DofMask;

/// Extract the scalar describing `channel`'s current pose along its one free
/// axis.
///
/// Prismatic joints report the head-position translation component (m);
/// rotational joints report the rotation component (rad). Values pass through
/// unmodified: no angle wrapping, no unit conversion, and NaN/Inf in the
/// source pose propagate unchanged.
///
/// # Errors
///
/// Propagates [`DofError`] from [`DofMask::active_axis`] for malformed masks.
pub fn resolve_value(channel: &Channel, mask: DofMask) -> Result<f32, DofError> {
    let axis = mask.active_axis()?;
    Ok(match channel.kind {
        ChannelKind::Prismatic => channel.head[axis],
        ChannelKind::Rotational => channel.rotation[axis],
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::prelude::Vec3;

    #[test]
    fn prismatic_reads_head_component() {
        let channel = Channel::new("slider", ChannelKind::Prismatic)
            .with_bone(Vec3::new(1.0, 2.5, -3.0), Vec3::ZERO);
        assert_relative_eq!(resolve_value(&channel, DofMask::Y).unwrap(), 2.5);
        assert_relative_eq!(resolve_value(&channel, DofMask::X).unwrap(), 1.0);
        assert_relative_eq!(resolve_value(&channel, DofMask::Z).unwrap(), -3.0);
    }

    #[test]
    fn rotational_reads_rotation_component() {
        let channel = Channel::new("pivot", ChannelKind::Rotational)
            .with_rotation(Vec3::new(0.0, 0.0, 1.2));
        assert_relative_eq!(resolve_value(&channel, DofMask::Z).unwrap(), 1.2);
        assert_relative_eq!(resolve_value(&channel, DofMask::X).unwrap(), 0.0);
    }

    #[test]
    fn rotational_ignores_head_position() {
        let channel = Channel::new("pivot", ChannelKind::Rotational)
            .with_bone(Vec3::new(9.0, 9.0, 9.0), Vec3::ZERO)
            .with_rotation(Vec3::new(0.4, 0.0, 0.0));
        assert_relative_eq!(resolve_value(&channel, DofMask::X).unwrap(), 0.4);
    }

    #[test]
    fn malformed_masks_are_rejected() {
        let channel = Channel::new("j", ChannelKind::Rotational);
        assert_eq!(
            resolve_value(&channel, DofMask([false; 3])),
            Err(DofError::NoActiveAxis)
        );
        assert_eq!(
            resolve_value(&channel, DofMask([true, true, false])),
            Err(DofError::MultipleActiveAxes { count: 2 })
        );
    }

    #[test]
    fn values_pass_through_unsanitized() {
        let channel = Channel::new("pivot", ChannelKind::Rotational)
            .with_rotation(Vec3::new(f32::NAN, 100.0 * std::f32::consts::PI, 0.0));
        assert!(resolve_value(&channel, DofMask::X).unwrap().is_nan());
        // No wrapping: 100π comes back as 100π, not normalized into [-π, π].
        assert_relative_eq!(
            resolve_value(&channel, DofMask::Y).unwrap(),
            100.0 * std::f32::consts::PI
        );
    }
}
