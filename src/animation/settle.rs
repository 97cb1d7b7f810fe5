//! The settle step applied to each flying bead once per tick.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

use crate::options::AnimationOptions;

/// Result of one settle step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleStep {
    /// New rendered position.
    pub position: Vec2,
    /// New rendered rotation in radians.
    pub rotation: f32,
    /// True when the bead snapped onto its target this step.
    pub settled: bool,
}

/// Advance a bead one tick toward its target.
///
/// Within the snap threshold on both axes the bead lands exactly on the
/// target with the exact target rotation. Otherwise it covers
/// `settle_factor` of the remaining distance and its rotation is re-derived
/// from wherever it currently is, so a bead in flight stays tangent to the
/// circle it is tracing rather than twisting toward its final rotation
/// early.
#[must_use]
pub fn settle_toward(
    current: Vec2,
    target: Vec2,
    target_rotation: f32,
    opts: &AnimationOptions,
) -> SettleStep {
    let delta = target - current;
    let within_snap =
        delta.x.abs() < opts.snap_px && delta.y.abs() < opts.snap_px;
    if within_snap || !opts.enabled {
        return SettleStep {
            position: target,
            rotation: target_rotation,
            settled: true,
        };
    }
    let position = current + delta * opts.settle_factor;
    SettleStep {
        position,
        rotation: tangent_rotation(position),
        settled: false,
    }
}

/// Rotation that keeps a bead's "up" vector pointing outward at `position`.
#[inline]
#[must_use]
pub fn tangent_rotation(position: Vec2) -> f32 {
    position.y.atan2(position.x) + FRAC_PI_2
}

/// One settle step for a scalar value (the string radius).
#[must_use]
pub fn settle_scalar(current: f32, target: f32, factor: f32, snap: f32) -> f32 {
    let delta = target - current;
    if delta.abs() < snap {
        target
    } else {
        current + delta * factor
    }
}
