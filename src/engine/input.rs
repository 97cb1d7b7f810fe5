//! Drag methods for `DesignEngine`.

use glam::Vec2;

use super::DesignEngine;
use crate::animation::MotionState;
use crate::error::BeadloopError;
use crate::input::{resolve_drop, DragSession, DropOutcome};
use crate::strand::BeadInstanceId;

impl DesignEngine {
    /// Pick up a bead. Its rendered position is captured as the drag
    /// anchor and interpolation is suspended for it until release.
    ///
    /// Starting a new drag while another is active releases the previous
    /// bead back to normal interpolation first.
    ///
    /// # Errors
    ///
    /// [`BeadloopError::NoSuchBead`] when the id is not on the strand.
    pub fn drag_start(
        &mut self,
        id: BeadInstanceId,
    ) -> Result<(), BeadloopError> {
        if self.drag.is_some() {
            let _ = self.drag_end()?;
        }
        let bead = self
            .strand
            .get(id)
            .ok_or(BeadloopError::NoSuchBead(id))?;
        self.drag = Some(DragSession::new(id, bead.position));
        Ok(())
    }

    /// Move the held bead 1:1 with the pointer, in loop-local pixels.
    /// No-op when nothing is being dragged.
    pub fn drag_move(&mut self, position: Vec2) {
        let Some(session) = &self.drag else {
            return;
        };
        let instance = session.instance();
        if let Some(bead) = self.strand.get_mut(instance) {
            bead.position = position;
        }
    }

    /// Release the held bead and resolve the drop.
    ///
    /// A drop outside the keep band removes the bead (recomputing
    /// geometry for the rest); otherwise it flies back to its slot.
    /// Returns `None` when no drag was active.
    ///
    /// # Errors
    ///
    /// Propagates removal failure, which cannot occur for a live session.
    pub fn drag_end(
        &mut self,
    ) -> Result<Option<DropOutcome>, BeadloopError> {
        let Some(session) = self.drag.take() else {
            return Ok(None);
        };
        let id = session.instance();
        let Some(bead) = self.strand.get(id) else {
            return Ok(None);
        };

        let outcome = resolve_drop(
            bead.position,
            self.layout.radius_px,
            bead.radius_px(&self.options.layout),
            self.options.drag.removal_band_factor,
        );
        match outcome {
            DropOutcome::Removed => {
                let _ = self.remove_bead(id)?;
                log::debug!("bead {id} dragged off the loop");
            }
            DropOutcome::Returned => {
                if let Some(bead) = self.strand.get_mut(id) {
                    bead.motion = MotionState::Flying;
                }
            }
        }
        Ok(Some(outcome))
    }
}
