//! Read-only accessors for `DesignEngine`.

use super::DesignEngine;
use crate::geometry::LoopLayout;
use crate::options::Options;
use crate::strand::{BeadInstanceId, PlacedBead};

impl DesignEngine {
    /// Current loop circumference in centimeters (1-decimal, floored).
    #[must_use]
    pub fn circumference_cm(&self) -> f32 {
        self.layout.circumference_cm
    }

    /// Target string radius in pixels, from the current layout.
    #[must_use]
    pub fn radius_px(&self) -> f32 {
        self.layout.radius_px
    }

    /// Rendered string radius in pixels (mid-animation value).
    #[must_use]
    pub fn string_radius_px(&self) -> f32 {
        self.string_radius_px
    }

    /// Running total price of the placed beads.
    #[must_use]
    pub fn total_price(&self) -> f32 {
        self.strand.total_price()
    }

    /// Number of placed beads.
    #[must_use]
    pub fn bead_count(&self) -> usize {
        self.strand.len()
    }

    /// All placed beads in strand order.
    #[must_use]
    pub fn beads(&self) -> &[PlacedBead] {
        self.strand.beads()
    }

    /// Look up a placed bead by instance id.
    #[must_use]
    pub fn bead(&self, id: BeadInstanceId) -> Option<&PlacedBead> {
        self.strand.get(id)
    }

    /// The bead currently held by a drag, if any.
    #[must_use]
    pub fn dragged_bead(&self) -> Option<BeadInstanceId> {
        self.drag.as_ref().map(crate::input::DragSession::instance)
    }

    /// The full derived layout for the current sequence.
    #[must_use]
    pub fn layout(&self) -> &LoopLayout {
        &self.layout
    }

    /// Current tuning.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether the sequence changed since the renderer last consumed it.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.strand.is_dirty()
    }

    /// Tell the engine the renderer has consumed the current state.
    pub fn mark_rendered(&mut self) {
        self.strand.mark_rendered();
    }

    /// Whether enough time has passed to advance another tick at the
    /// target cadence.
    #[must_use]
    pub fn should_tick(&self) -> bool {
        self.timing.should_tick()
    }

    /// Smoothed observed tick rate, for diagnostics overlays.
    #[must_use]
    pub fn tick_rate(&self) -> f32 {
        self.timing.rate()
    }
}
