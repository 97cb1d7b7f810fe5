use glam::Vec2;

use crate::strand::BeadInstanceId;

/// Result of releasing a dragged bead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped too far from the string — the bead was removed.
    Removed,
    /// Dropped near the string — the bead flies back to its slot.
    Returned,
}

/// An in-progress drag of one bead.
///
/// While a session is active the engine skips the bead during tick
/// stepping, so the rendered position stays wherever the pointer put it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    instance: BeadInstanceId,
    anchor: Vec2,
}

impl DragSession {
    /// Start a session for `instance`, anchored at its current rendered
    /// position.
    #[must_use]
    pub fn new(instance: BeadInstanceId, anchor: Vec2) -> Self {
        Self { instance, anchor }
    }

    /// The bead being dragged.
    #[must_use]
    pub const fn instance(&self) -> BeadInstanceId {
        self.instance
    }

    /// Rendered position captured at drag start.
    #[must_use]
    pub const fn anchor(&self) -> Vec2 {
        self.anchor
    }
}

/// Decide whether a bead released at `drop_point` stays on the loop.
///
/// A bead survives inside a band around the string circle that is
/// `band_factor` bead radii wide on each side; anywhere else counts as a
/// deliberate pull-off.
#[must_use]
pub fn resolve_drop(
    drop_point: Vec2,
    loop_radius_px: f32,
    bead_radius_px: f32,
    band_factor: f32,
) -> DropOutcome {
    let distance = drop_point.length();
    if (distance - loop_radius_px).abs() > band_factor * bead_radius_px {
        DropOutcome::Removed
    } else {
        DropOutcome::Returned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOP_RADIUS: f32 = 72.0;
    const BEAD_RADIUS: f32 = 18.9;

    #[test]
    fn drop_far_outside_removes() {
        // Released at loopRadius + 3 bead radii
        let point = Vec2::new(LOOP_RADIUS + 3.0 * BEAD_RADIUS, 0.0);
        assert_eq!(
            resolve_drop(point, LOOP_RADIUS, BEAD_RADIUS, 2.0),
            DropOutcome::Removed
        );
    }

    #[test]
    fn drop_near_string_returns() {
        // Released at loopRadius + half a bead radius
        let point = Vec2::new(LOOP_RADIUS + 0.5 * BEAD_RADIUS, 0.0);
        assert_eq!(
            resolve_drop(point, LOOP_RADIUS, BEAD_RADIUS, 2.0),
            DropOutcome::Returned
        );
    }

    #[test]
    fn drop_at_origin_removes() {
        // The loop center is far inside the band
        assert_eq!(
            resolve_drop(Vec2::ZERO, LOOP_RADIUS, BEAD_RADIUS, 2.0),
            DropOutcome::Removed
        );
    }

    #[test]
    fn band_is_direction_independent() {
        let inside = LOOP_RADIUS - 0.5 * BEAD_RADIUS;
        let point = Vec2::new(0.0, -inside);
        assert_eq!(
            resolve_drop(point, LOOP_RADIUS, BEAD_RADIUS, 2.0),
            DropOutcome::Returned
        );
    }

    #[test]
    fn session_remembers_anchor() {
        let id = crate::strand::test_instance_id(7);
        let session = DragSession::new(id, Vec2::new(10.0, -4.0));
        assert_eq!(session.instance(), id);
        assert_eq!(session.anchor(), Vec2::new(10.0, -4.0));
    }
}
