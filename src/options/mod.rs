//! Zoom and input settings with TOML preset support.
//!
//! Everything a host tunes about the zoom rig lives here. Options
//! serialize to/from TOML so camera presets can be stored alongside the
//! game's other settings.

mod input;
mod zoom;

use std::path::Path;

pub use input::InputOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use zoom::{PivotOptions, ZoomOptions, ZoomSpeed};

use crate::error::ZoomError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom.pivot]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Zoom controller parameters.
    pub zoom: ZoomOptions,
    /// Input device parameters.
    pub input: InputOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ZoomError> {
        let content = std::fs::read_to_string(path).map_err(ZoomError::Io)?;
        let options = toml::from_str(&content)
            .map_err(|e| ZoomError::OptionsParse(e.to_string()))?;
        log::info!("Loaded zoom options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ZoomError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ZoomError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ZoomError::Io)?;
        }
        std::fs::write(path, content).map_err(ZoomError::Io)?;
        log::info!("Saved zoom options to {}", path.display());
        Ok(())
    }

    /// Set one field by section and name, e.g. `("zoom", "min_height")`,
    /// as a settings panel would. Nested sections use a dotted path
    /// (`"zoom.pivot"`). The options are left untouched on error.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), ZoomError> {
        let mut root = serde_json::to_value(&*self)
            .map_err(|e| ZoomError::OptionsParse(e.to_string()))?;
        let mut target = &mut root;
        for key in section.split('.') {
            target = target.get_mut(key).ok_or_else(|| {
                ZoomError::OptionsParse(format!("unknown section `{section}`"))
            })?;
        }
        let Some(slot) = target.get_mut(field) else {
            return Err(ZoomError::OptionsParse(format!(
                "unknown option `{section}.{field}`"
            )));
        };
        *slot = value;
        *self = serde_json::from_value(root)
            .map_err(|e| ZoomError::OptionsParse(e.to_string()))?;
        Ok(())
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
    use crate::camera::services::TerrainAreaKind;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[zoom]
use_fov = true
height_offset_terrain_filter = ["ground", "cliff"]

[zoom.pivot]
target_angle = 12.5
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert!(opts.zoom.use_fov);
        assert_eq!(opts.zoom.pivot.target_angle, 12.5);
        assert_eq!(
            opts.zoom.height_offset_terrain_filter,
            vec![TerrainAreaKind::new("ground"), TerrainAreaKind::new("cliff")]
        );
        // Everything else should be default
        assert_eq!(opts.zoom.pivot.range_before_min, 3.0);
        assert_eq!(opts.zoom.offset_restart_threshold, 0.5);
        assert_eq!(opts.input.zoom_in_key, "PageUp");
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let dir = std::env::temp_dir().join("zoomrig-options-malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.toml");
        std::fs::write(&path, "[zoom\nmin_height = ").unwrap();
        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, ZoomError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir().join("zoomrig-options-presets");
        let _ = std::fs::remove_dir_all(&dir);
        let mut opts = Options::default();
        opts.zoom.max_height = 40.0;
        opts.save(&dir.join("high.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("high.toml")).unwrap();
        assert_eq!(loaded.zoom.max_height, 40.0);
        assert_eq!(
            Options::list_presets(&dir),
            vec!["default".to_owned(), "high".to_owned()]
        );
    }

    #[test]
    fn set_option_updates_nested_fields() {
        let mut opts = Options::default();
        opts.set_option("zoom", "min_height", serde_json::json!(7.5))
            .unwrap();
        opts.set_option("zoom.pivot", "enabled", serde_json::json!(false))
            .unwrap();
        assert_eq!(opts.zoom.min_height, 7.5);
        assert!(!opts.zoom.pivot.enabled);
    }

    #[test]
    fn set_option_rejects_unknown_or_mistyped_fields() {
        let mut opts = Options::default();
        let before = opts.clone();
        assert!(opts
            .set_option("zoom", "no_such_field", serde_json::json!(1.0))
            .is_err());
        assert!(opts
            .set_option("camera", "min_height", serde_json::json!(1.0))
            .is_err());
        assert!(opts
            .set_option("zoom", "min_height", serde_json::json!("high"))
            .is_err());
        assert_eq!(opts, before);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("zoom"));
        assert!(props.contains_key("input"));

        let zoom = &props["zoom"]["properties"];
        assert!(zoom.get("min_height").is_some());
        assert!(zoom.get("pivot").is_some());
        assert!(zoom.get("offset_restart_threshold").is_none());
        assert!(zoom.get("height_offset_terrain_filter").is_none());

        let input = &props["input"]["properties"];
        assert!(input.get("scroll_sensitivity").is_some());
        assert!(input.get("zoom_in_key").is_none());
    }
}
