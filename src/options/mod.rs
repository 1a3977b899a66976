//! Centralized session options with TOML preset support.
//!
//! All tweakable settings (initial view, range limits, animation pacing,
//! pointer/keyboard behaviour, label geometry, keybindings) are
//! consolidated here. Options serialize to/from TOML presets.

mod animation;
mod input;
mod keybindings;
mod labels;
mod plane;

use std::path::Path;

pub use animation::AnimationOptions;
pub use input::{BusyInputPolicy, InputOptions};
pub use keybindings::KeybindingOptions;
pub use labels::LabelOptions;
pub use plane::PlaneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PlaneError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial view and conversion parameters.
    pub plane: PlaneOptions,
    /// Transition pacing.
    pub animation: AnimationOptions,
    /// Pointer and keyboard behaviour.
    pub input: InputOptions,
    /// Label geometry.
    pub labels: LabelOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, PlaneError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| PlaneError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PlaneError> {
        let content = std::fs::read_to_string(path).map_err(PlaneError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PlaneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PlaneError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PlaneError::Io)?;
        }
        std::fs::write(path, content).map_err(PlaneError::Io)
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
