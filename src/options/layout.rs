use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Loop sizing options.
pub struct LayoutOptions {
    /// Millimeter-to-pixel conversion (3.78 ≈ 96 DPI).
    pub pixels_per_mm: f32,
    /// Smallest circumference a loop renders at, in centimeters. Sparse
    /// loops are floored here so the string never collapses.
    pub min_circumference_cm: f32,
    /// Hard circumference cap in centimeters. Adds that would exceed it
    /// are rejected.
    pub max_circumference_cm: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            pixels_per_mm: 3.78,
            min_circumference_cm: 12.0,
            max_circumference_cm: 25.01,
        }
    }
}
