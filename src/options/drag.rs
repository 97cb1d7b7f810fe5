use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Drag-to-remove tuning.
pub struct DragOptions {
    /// Width of the keep band around the string, in bead radii. A bead
    /// released further than this from the loop circle is removed.
    pub removal_band_factor: f32,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            removal_band_factor: 2.0,
        }
    }
}
