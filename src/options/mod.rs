//! Centralized engine tuning with TOML preset support.
//!
//! All tweakable constants (loop sizing, interpolation feel, drag
//! thresholds) are consolidated here. Options serialize to/from TOML so
//! the storefront can ship tuning presets, and expose a JSON schema for
//! its admin panel.

mod animation;
mod drag;
mod layout;

use std::path::Path;

pub use animation::AnimationOptions;
pub use drag::DragOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BeadloopError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Loop sizing parameters.
    pub layout: LayoutOptions,
    /// Interpolation feel parameters.
    pub animation: AnimationOptions,
    /// Drag-to-remove parameters.
    pub drag: DragOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BeadloopError::Io`] when the file cannot be read and
    /// [`BeadloopError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, BeadloopError> {
        let content = std::fs::read_to_string(path).map_err(BeadloopError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BeadloopError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`BeadloopError::OptionsParse`] when serialization fails and
    /// [`BeadloopError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), BeadloopError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BeadloopError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BeadloopError::Io)?;
        }
        std::fs::write(path, content).map_err(BeadloopError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
settle_factor = 0.25
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.animation.settle_factor, 0.25);
        // Everything else should be default
        assert_eq!(opts.animation.snap_px, 1.0);
        assert_eq!(opts.layout.pixels_per_mm, 3.78);
        assert_eq!(opts.drag.removal_band_factor, 2.0);
    }

    #[test]
    fn default_constants_match_tuned_values() {
        let opts = Options::default();
        assert_eq!(opts.layout.min_circumference_cm, 12.0);
        assert_eq!(opts.layout.max_circumference_cm, 25.01);
        assert_eq!(opts.animation.settle_factor, 0.15);
        assert_eq!(opts.animation.radius_snap_px, 0.5);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("layout"));
        assert!(props.contains_key("animation"));
        assert!(props.contains_key("drag"));

        let animation = &props["animation"]["properties"];
        assert!(animation.get("settle_factor").is_some());
        assert!(animation.get("spawn_point").is_some());
    }
}
