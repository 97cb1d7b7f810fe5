//! The design session: exclusive owner of the bead sequence, derived
//! geometry, animation state, and the active drag.

mod command;
mod input;
mod persist;
mod queries;

pub use command::{CommandOutcome, DesignCommand};
use glam::Vec2;

use crate::animation::{settle_scalar, settle_toward, MotionState};
use crate::catalog::BeadPrototype;
use crate::error::BeadloopError;
use crate::geometry::LoopLayout;
use crate::input::DragSession;
use crate::options::Options;
use crate::strand::{BeadInstanceId, PlacedBead, Strand};
use crate::util::TickTiming;

/// Target tick rate. Matches the 60Hz render loop the storefront drives
/// the engine from; the interpolation constants are tuned at this cadence.
const TARGET_TICK_RATE: u32 = 60;

/// The interactive design session for one bracelet.
///
/// Owns the bead sequence, the derived loop geometry, the animation state,
/// and the drag session. All mutation flows through this type, so the
/// single-owner model is enforced by `&mut self`.
///
/// # Construction
///
/// Use [`DesignEngine::new`] for default tuning or
/// [`DesignEngine::with_options`] to start from a loaded preset.
///
/// # Tick loop
///
/// The host calls [`tick`](Self::tick) once per animation frame; gate on
/// [`should_tick`](Self::should_tick) when the host callback can fire
/// faster than the target cadence. After any mutating operation the strand
/// reports [`is_dirty`](Self::is_dirty); the renderer reads the fresh
/// state and calls [`mark_rendered`](Self::mark_rendered).
///
/// # Operations
///
/// Add with [`add_bead`](Self::add_bead), remove with
/// [`remove_bead`](Self::remove_bead), drag with
/// [`drag_start`](Self::drag_start)/[`drag_move`](Self::drag_move)/
/// [`drag_end`](Self::drag_end) — or route everything through
/// [`execute`](Self::execute) with a [`DesignCommand`].
///
/// # Persistence
///
/// [`save_design`](Self::save_design) and
/// [`create_order`](Self::create_order) assemble payloads from current
/// state and hand them to the application's
/// [`DesignStore`](crate::store::DesignStore).
pub struct DesignEngine {
    /// Authoritative bead sequence and price total.
    strand: Strand,
    /// Geometry derived from the current sequence.
    layout: LoopLayout,
    /// Rendered string radius, chasing `layout.radius_px`.
    string_radius_px: f32,
    /// Active drag, if a bead is being held.
    drag: Option<DragSession>,
    /// Runtime tuning.
    options: Options,
    /// Per-tick timing and rate tracking.
    timing: TickTiming,
}

impl DesignEngine {
    /// Engine with default tuning and an empty loop.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Engine with the given tuning and an empty loop.
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        let layout = LoopLayout::compute(&[], &options.layout);
        let string_radius_px = layout.radius_px;
        Self {
            strand: Strand::new(),
            layout,
            string_radius_px,
            drag: None,
            options,
            timing: TickTiming::new(TARGET_TICK_RATE),
        }
    }

    /// Replace the tuning. Geometry is recomputed immediately; rendered
    /// state animates toward any changed targets.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
        self.recompute_layout();
    }

    // -- Mutation --

    /// Place a bead from the catalog onto the loop.
    ///
    /// The new bead spawns at the configured corner point and flies in;
    /// every bead gets a fresh target from the recomputed geometry.
    ///
    /// # Errors
    ///
    /// [`BeadloopError::InvalidBead`] for a prototype that fails
    /// validation, [`BeadloopError::CapacityExceeded`] when the add would
    /// bust the circumference cap. Neither mutates any state.
    pub fn add_bead(
        &mut self,
        prototype: BeadPrototype,
    ) -> Result<BeadInstanceId, BeadloopError> {
        let spawn = Vec2::from(self.options.animation.spawn_point);
        match self.strand.add(prototype, spawn, &self.options.layout) {
            Ok(id) => {
                self.recompute_layout();
                log::debug!(
                    "bead {id} added: {} beads, {:.1} cm, total {:.2}",
                    self.strand.len(),
                    self.layout.circumference_cm,
                    self.strand.total_price()
                );
                Ok(id)
            }
            Err(e) => {
                if matches!(e, BeadloopError::CapacityExceeded { .. }) {
                    log::warn!("bead add rejected: {e}");
                }
                Err(e)
            }
        }
    }

    /// Remove a bead by instance id. Remaining beads fly to their new
    /// slots.
    ///
    /// # Errors
    ///
    /// [`BeadloopError::NoSuchBead`] when the id is not on the strand.
    pub fn remove_bead(
        &mut self,
        id: BeadInstanceId,
    ) -> Result<PlacedBead, BeadloopError> {
        let bead = self.strand.remove(id)?;
        if self.drag.as_ref().is_some_and(|d| d.instance() == id) {
            self.drag = None;
        }
        self.recompute_layout();
        log::debug!(
            "bead {id} removed: {} beads, {:.1} cm",
            self.strand.len(),
            self.layout.circumference_cm
        );
        Ok(bead)
    }

    /// Remove every bead and reset the loop to its empty default.
    pub fn clear_loop(&mut self) {
        self.drag = None;
        self.strand.clear();
        self.recompute_layout();
    }

    /// Recompute geometry from the current sequence and re-point every
    /// bead at its fresh slot.
    fn recompute_layout(&mut self) {
        self.layout = LoopLayout::compute(
            &self.strand.diameters_mm(),
            &self.options.layout,
        );
        self.strand.retarget_all(&self.layout.targets);
    }

    // -- Tick --

    /// Advance rendered state one step toward targets.
    ///
    /// Beads held by a drag are skipped; everyone else settles per the
    /// animation options, as does the string radius. Returns `true` while
    /// anything is still in flight, so hosts can idle the loop once the
    /// layout has settled.
    pub fn tick(&mut self) -> bool {
        let dragged = self.drag.as_ref().map(DragSession::instance);
        let anim = &self.options.animation;
        let mut animating = false;

        for bead in self.strand.beads_mut() {
            if Some(bead.id()) == dragged || !bead.motion.is_flying() {
                continue;
            }
            let step = settle_toward(
                bead.position,
                bead.target_position,
                bead.target_rotation,
                anim,
            );
            bead.position = step.position;
            bead.rotation = step.rotation;
            if step.settled {
                bead.motion = MotionState::Settled;
            } else {
                animating = true;
            }
        }

        self.string_radius_px = settle_scalar(
            self.string_radius_px,
            self.layout.radius_px,
            anim.settle_factor,
            anim.radius_snap_px,
        );
        animating |= self.string_radius_px != self.layout.radius_px;
        animating |= dragged.is_some();

        self.timing.end_tick();
        animating
    }
}

impl Default for DesignEngine {
    fn default() -> Self {
        Self::new()
    }
}
