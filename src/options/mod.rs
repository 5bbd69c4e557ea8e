//! Centralized scene options with TOML preset support.
//!
//! Every tweakable constant of the scene (section layout, camera, kick
//! tweens, material, light, display) lives here. Options serialize to/from
//! TOML so presets can be kept next to the binary and passed on the command
//! line.

mod animation;
mod camera;
mod display;
mod lighting;
mod material;
mod scene;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use lighting::LightingOptions;
pub use material::MaterialOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ScrollscapeError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Section mesh layout and particle field.
    pub scene: SceneOptions,
    /// Camera projection and parallax.
    pub camera: CameraOptions,
    /// Section kick tweens and idle spin.
    pub animation: AnimationOptions,
    /// Toon material and particle appearance.
    pub material: MaterialOptions,
    /// Directional light.
    pub lighting: LightingOptions,
    /// Viewport and page settings.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the tweakable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::OptionsParse`] on malformed TOML or
    /// invalid values (e.g. a bad hex color).
    pub fn from_toml(content: &str) -> Result<Self, ScrollscapeError> {
        toml::from_str(content)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError::Io`] if the file cannot be read, or
    /// [`ScrollscapeError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ScrollscapeError> {
        let content =
            std::fs::read_to_string(path).map_err(ScrollscapeError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ScrollscapeError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), ScrollscapeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ScrollscapeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ScrollscapeError::Io)?;
        }
        std::fs::write(path, content).map_err(ScrollscapeError::Io)
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
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r##"
[material]
color = "#3366ff"

[animation]
kick_easing = "cubic_out"
"##;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.material.color.to_string(), "#3366ff");
        assert_eq!(opts.animation.kick_easing, EasingFunction::CubicOut);
        // Everything else should be default
        assert_eq!(opts.animation.kick_rotation, [6.0, 3.0, 1.5]);
        assert_eq!(opts.scene.particle_count, 200);
        assert_eq!(opts.display.max_pixel_ratio, 2.0);
    }

    #[test]
    fn bad_color_is_a_parse_error() {
        let err = Options::from_toml("[material]\ncolor = \"pink\"\n")
            .unwrap_err();
        assert!(matches!(err, ScrollscapeError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("scrollscape-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.scene.seed = Some(7);
        opts.save(&dir.join("calm.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("calm.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        for section in
            ["scene", "camera", "animation", "material", "lighting", "display"]
        {
            assert!(props.contains_key(section), "missing {section}");
        }

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }
}
