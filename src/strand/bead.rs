//! One bead instance placed on the loop.

use std::fmt;

use glam::Vec2;

use crate::animation::MotionState;
use crate::catalog::BeadPrototype;
use crate::geometry::{bead_radius_px, BeadTarget};
use crate::options::LayoutOptions;

/// Strand-assigned identifier of a placed bead. Unique for the lifetime of
/// a design session; never reused after removal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct BeadInstanceId(u32);

impl BeadInstanceId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw counter value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BeadInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A prototype instance on the loop: the catalog snapshot plus rendered and
/// target state.
///
/// Rendered position/rotation are what the host draws this frame; targets
/// come from the latest geometry recompute. The two converge through
/// [`settle_toward`](crate::animation::settle_toward) unless the bead is
/// held by a drag.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBead {
    id: BeadInstanceId,
    prototype: BeadPrototype,
    /// Rendered center position, loop-local pixels.
    pub position: Vec2,
    /// Rendered rotation, radians.
    pub rotation: f32,
    /// Target center position from the current layout.
    pub target_position: Vec2,
    /// Target rotation from the current layout.
    pub target_rotation: f32,
    /// Flight state toward the current target.
    pub motion: MotionState,
}

impl PlacedBead {
    /// New instance spawning at `spawn` (targets are assigned by the
    /// geometry recompute that follows every add).
    pub(crate) fn new(
        id: BeadInstanceId,
        prototype: BeadPrototype,
        spawn: Vec2,
    ) -> Self {
        Self {
            id,
            prototype,
            position: spawn,
            rotation: 0.0,
            target_position: spawn,
            target_rotation: 0.0,
            motion: MotionState::Flying,
        }
    }

    /// This instance's identifier.
    #[must_use]
    pub const fn id(&self) -> BeadInstanceId {
        self.id
    }

    /// The catalog snapshot this instance was placed from.
    #[must_use]
    pub const fn prototype(&self) -> &BeadPrototype {
        &self.prototype
    }

    /// Physical diameter in millimeters.
    #[must_use]
    pub fn diameter_mm(&self) -> f32 {
        self.prototype.diameter_mm
    }

    /// Unit price of this bead.
    #[must_use]
    pub fn unit_price(&self) -> f32 {
        self.prototype.unit_price
    }

    /// On-screen radius in pixels.
    #[must_use]
    pub fn radius_px(&self, opts: &LayoutOptions) -> f32 {
        bead_radius_px(self.prototype.diameter_mm, opts)
    }

    /// Point this bead at a freshly computed layout slot.
    pub(crate) fn retarget(&mut self, target: &BeadTarget) {
        self.target_position = target.position;
        self.target_rotation = target.rotation;
        self.motion = MotionState::Flying;
    }
}
