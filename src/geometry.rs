//! Loop geometry calculator.
//!
//! Pure functions from an ordered diameter sequence to the loop's derived
//! state: circumference, string radius, and per-bead target angle, position,
//! and rotation. The engine recomputes this on every add/remove; the
//! animation layer then chases the fresh targets.
//!
//! Angles are radians, measured counter-clockwise from east (+x), with the
//! angular cursor walking in the negative direction. The bead-count base
//! angle table guarantees the last bead lands at west (180°), which is
//! where the loop's clasp gap sits visually.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::options::LayoutOptions;

/// Target placement for one bead, parallel to the input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeadTarget {
    /// Placement angle in radians.
    pub angle: f32,
    /// Center position in loop-local pixels.
    pub position: Vec2,
    /// Rotation in radians, tangent-aligned (angle + 90°).
    pub rotation: f32,
}

/// Derived geometry for the whole loop.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopLayout {
    /// Real-world circumference in centimeters, 1-decimal, floored at the
    /// configured minimum.
    pub circumference_cm: f32,
    /// String radius in pixels.
    pub radius_px: f32,
    /// Per-bead targets, in strand order.
    pub targets: Vec<BeadTarget>,
}

impl LoopLayout {
    /// Compute the full layout for an ordered diameter sequence.
    ///
    /// An empty sequence yields the default minimum circumference and no
    /// targets.
    #[must_use]
    pub fn compute(diameters_mm: &[f32], opts: &LayoutOptions) -> Self {
        let total_mm: f32 = diameters_mm.iter().sum();
        let circumference_cm = circumference_cm(total_mm, opts);
        let radius_px = radius_px(circumference_cm, opts);

        let mut targets = Vec::with_capacity(diameters_mm.len());
        if total_mm > 0.0 {
            let mut cursor = base_angle(diameters_mm.len());
            for &d in diameters_mm {
                let span = (d / total_mm) * TAU;
                targets.push(BeadTarget {
                    angle: cursor,
                    position: radius_px * Vec2::from_angle(cursor),
                    rotation: cursor + FRAC_PI_2,
                });
                cursor -= span;
            }
        }

        Self {
            circumference_cm,
            radius_px,
            targets,
        }
    }
}

/// Starting angle for the angular walk, in radians.
///
/// The 2- and 3-bead cases are hand-tuned for visual symmetry; from 4 beads
/// up the general rule places the last bead exactly at west.
#[must_use]
pub fn base_angle(count: usize) -> f32 {
    let degrees = match count {
        0 => 0.0,
        2 => 45.0,
        3 => 75.0,
        n => 180.0 - 360.0 / n as f32,
    };
    degrees.to_radians()
}

/// Angular span of each bead, proportional to its diameter share.
///
/// Spans always sum to a full turn for a non-empty, positive sequence.
#[must_use]
pub fn angular_spans(diameters_mm: &[f32]) -> Vec<f32> {
    let total_mm: f32 = diameters_mm.iter().sum();
    if total_mm <= 0.0 {
        return Vec::new();
    }
    diameters_mm.iter().map(|d| (d / total_mm) * TAU).collect()
}

/// Loop circumference in centimeters: total diameter over ten, rounded to
/// one decimal, floored at the configured minimum.
#[must_use]
pub fn circumference_cm(total_mm: f32, opts: &LayoutOptions) -> f32 {
    let cm = total_mm / 10.0;
    let cm = (cm * 10.0).round() / 10.0;
    cm.max(opts.min_circumference_cm)
}

/// String radius in pixels for a given circumference.
#[must_use]
pub fn radius_px(circumference_cm: f32, opts: &LayoutOptions) -> f32 {
    circumference_cm * 10.0 * opts.pixels_per_mm / TAU
}

/// On-screen radius of a single bead in pixels.
#[must_use]
pub fn bead_radius_px(diameter_mm: f32, opts: &LayoutOptions) -> f32 {
    diameter_mm * opts.pixels_per_mm / 2.0
}

/// Whether a sequence totalling `total_mm` millimeters busts the hard
/// circumference cap.
#[must_use]
pub fn exceeds_capacity(total_mm: f32, opts: &LayoutOptions) -> bool {
    total_mm > opts.max_circumference_cm * 10.0
}
