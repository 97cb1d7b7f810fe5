use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Interpolation tuning. The factor and snap thresholds are tuned for
/// visual feel, not derived from physics.
pub struct AnimationOptions {
    /// Fraction of the remaining distance a bead covers per tick.
    pub settle_factor: f32,
    /// Snap distance for bead positions, in pixels. When both axis deltas
    /// fall under it the bead lands exactly on its target.
    pub snap_px: f32,
    /// Snap distance for the string radius, in pixels.
    pub radius_snap_px: f32,
    /// Where newly added beads spawn before flying in, in loop-local
    /// pixels (bottom-left of a typical viewport).
    pub spawn_point: [f32; 2],
    /// Whether beads animate at all. When false every tick snaps directly
    /// to target.
    pub enabled: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            settle_factor: 0.15,
            snap_px: 1.0,
            radius_snap_px: 0.5,
            spawn_point: [-400.0, 400.0],
            enabled: true,
        }
    }
}
