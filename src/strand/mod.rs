//! Authoritative bead sequence: ordered storage, price aggregation,
//! generation-based dirty tracking.
//!
//! The strand owns every [`PlacedBead`] in placement order — ordering
//! drives the angular layout, so external code never indexes into it
//! directly; all mutation goes through [`add`](Strand::add) and
//! [`remove`](Strand::remove). Renderers poll [`is_dirty`](Strand::is_dirty)
//! after mutations and call [`mark_rendered`](Strand::mark_rendered) once
//! they have consumed the new layout.

mod bead;

pub use bead::{BeadInstanceId, PlacedBead};
use glam::Vec2;

use crate::catalog::BeadPrototype;
use crate::error::BeadloopError;
use crate::geometry;
use crate::options::LayoutOptions;

/// Ordered bead storage with derived totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Strand {
    /// Beads in placement order.
    beads: Vec<PlacedBead>,
    next_instance_id: u32,
    total_price: f32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Strand {
    /// Create an empty strand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            beads: Vec::new(),
            next_instance_id: 0,
            total_price: 0.0,
            generation: 0,
            rendered_generation: 0,
        }
    }

    // -- Dirty tracking --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether the sequence changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered (call after consuming the
    /// recomputed layout).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Mutation --

    /// Append a bead to the strand, spawning at `spawn`.
    ///
    /// Returns the assigned instance id. The caller is responsible for the
    /// geometry recompute that assigns the new bead (and everyone else)
    /// fresh targets.
    ///
    /// # Errors
    ///
    /// [`BeadloopError::InvalidBead`] if the prototype fails validation;
    /// [`BeadloopError::CapacityExceeded`] if the add would bust the
    /// circumference cap. Neither mutates any state.
    pub fn add(
        &mut self,
        prototype: BeadPrototype,
        spawn: Vec2,
        opts: &LayoutOptions,
    ) -> Result<BeadInstanceId, BeadloopError> {
        prototype.validate()?;

        let total_after = self.total_diameter_mm() + prototype.diameter_mm;
        if geometry::exceeds_capacity(total_after, opts) {
            return Err(BeadloopError::CapacityExceeded {
                total_cm: total_after / 10.0,
            });
        }

        let id = BeadInstanceId::new(self.next_instance_id);
        self.next_instance_id += 1;
        self.total_price += prototype.unit_price;
        self.beads.push(PlacedBead::new(id, prototype, spawn));
        self.invalidate();
        Ok(id)
    }

    /// Remove a bead by instance id. Returns the removed bead.
    ///
    /// # Errors
    ///
    /// [`BeadloopError::NoSuchBead`] when the id is not on the strand.
    pub fn remove(
        &mut self,
        id: BeadInstanceId,
    ) -> Result<PlacedBead, BeadloopError> {
        let idx = self
            .beads
            .iter()
            .position(|b| b.id() == id)
            .ok_or(BeadloopError::NoSuchBead(id))?;
        let bead = self.beads.remove(idx);
        self.total_price = (self.total_price - bead.unit_price()).max(0.0);
        self.invalidate();
        Ok(bead)
    }

    /// Remove every bead and reset the price total. Instance ids keep
    /// counting up so stale ids from before the clear never resolve.
    pub fn clear(&mut self) {
        if self.beads.is_empty() {
            return;
        }
        self.beads.clear();
        self.total_price = 0.0;
        self.invalidate();
    }

    /// Re-point every bead at the given layout targets, in order.
    ///
    /// `targets` must be parallel to the strand (the geometry calculator
    /// computes it from this strand's diameters).
    pub(crate) fn retarget_all(&mut self, targets: &[geometry::BeadTarget]) {
        for (bead, target) in self.beads.iter_mut().zip(targets) {
            bead.retarget(target);
        }
    }

    // -- Access --

    /// All beads in placement order.
    #[must_use]
    pub fn beads(&self) -> &[PlacedBead] {
        &self.beads
    }

    /// Mutable access for the tick/drag paths.
    pub(crate) fn beads_mut(&mut self) -> &mut [PlacedBead] {
        &mut self.beads
    }

    /// Look up a bead by instance id.
    #[must_use]
    pub fn get(&self, id: BeadInstanceId) -> Option<&PlacedBead> {
        self.beads.iter().find(|b| b.id() == id)
    }

    pub(crate) fn get_mut(
        &mut self,
        id: BeadInstanceId,
    ) -> Option<&mut PlacedBead> {
        self.beads.iter_mut().find(|b| b.id() == id)
    }

    /// Number of placed beads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.beads.len()
    }

    /// Whether the strand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    /// Sum of placed bead diameters in millimeters.
    #[must_use]
    pub fn total_diameter_mm(&self) -> f32 {
        self.beads.iter().map(PlacedBead::diameter_mm).sum()
    }

    /// Diameter sequence in placement order, for the geometry calculator.
    #[must_use]
    pub fn diameters_mm(&self) -> Vec<f32> {
        self.beads.iter().map(PlacedBead::diameter_mm).collect()
    }

    /// Running total price of all placed beads.
    #[must_use]
    pub fn total_price(&self) -> f32 {
        self.total_price
    }
}

impl Default for Strand {
    fn default() -> Self {
        Self::new()
    }
}

/// Instance-id builder shared by test modules across the crate.
#[cfg(test)]
pub(crate) fn test_instance_id(raw: u32) -> BeadInstanceId {
    BeadInstanceId::new(raw)
}


#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::test_prototype;

    proptest! {
        #[test]
        fn add_then_remove_is_identity(
            existing in prop::collection::vec(1.0f32..20.0, 0..10),
            diameter in 1.0f32..30.0,
            price in 0.0f32..100.0,
        ) {
            let opts = LayoutOptions::default();
            let mut strand = Strand::new();
            for (i, d) in existing.iter().enumerate() {
                let proto = test_prototype(&format!("p{i}"), *d);
                let _ = strand.add(proto, Vec2::ZERO, &opts).unwrap();
            }
            let price_before = strand.total_price();
            let diameter_before = strand.total_diameter_mm();
            let count_before = strand.len();

            let mut probe = test_prototype("probe", diameter);
            probe.unit_price = price;
            let id = strand.add(probe, Vec2::ZERO, &opts).unwrap();
            let _ = strand.remove(id).unwrap();

            prop_assert_eq!(strand.len(), count_before);
            prop_assert!((strand.total_price() - price_before).abs() < 1e-3);
            prop_assert!(
                (strand.total_diameter_mm() - diameter_before).abs() < 1e-3
            );
        }

        #[test]
        fn capacity_rejection_is_a_noop(extra_mm in 11.0f32..200.0) {
            let opts = LayoutOptions::default();
            let mut strand = Strand::new();
            for i in 0..8 {
                let proto = test_prototype(&format!("p{i}"), 30.0);
                let _ = strand.add(proto, Vec2::ZERO, &opts).unwrap();
            }
            let snapshot = strand.clone();

            // 240mm placed; anything over 10.1mm more busts the 25.01cm cap
            let result =
                strand.add(test_prototype("fat", extra_mm), Vec2::ZERO, &opts);
            let is_capacity_err =
                matches!(result, Err(BeadloopError::CapacityExceeded { .. }));
            prop_assert!(is_capacity_err);
            prop_assert_eq!(strand, snapshot);
        }
    }
}
