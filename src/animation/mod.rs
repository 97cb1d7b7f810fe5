//! Per-tick interpolation toward layout targets.
//!
//! Rendered bead state chases target state with a first-order lag: each
//! tick covers a fixed fraction of the remaining distance, then snaps once
//! inside the snap threshold. There is no simulated velocity — the factor
//! is a tuned visual constant, not physics. The string radius settles the
//! same way with its own threshold.
//!
//! Every geometry recompute flips settled beads back to flying; removal
//! destroys the instance outright, so there is no terminal state to track
//! here.

mod settle;

pub use settle::{settle_scalar, settle_toward, tangent_rotation, SettleStep};

/// Where a bead is in its flight toward the current target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    /// Rendered state differs from target; interpolating.
    #[default]
    Flying,
    /// Rendered state matches target exactly.
    Settled,
}

impl MotionState {
    /// Whether this bead still needs per-tick stepping.
    #[inline]
    #[must_use]
    pub fn is_flying(self) -> bool {
        self == Self::Flying
    }
}
