//! Manipulator configuration with TOML preset support.
//!
//! Every tunable parameter of the three navigation modes lives in one
//! [`Config`] aggregate, grouped by concern. Configs serialize to/from TOML
//! so hosts can keep per-scene camera presets next to their assets.

mod flight;
mod keybindings;
mod map;
mod orbit;
mod view;

use std::fmt;
use std::path::Path;

pub use flight::FlightOptions;
pub use keybindings::KeybindingOptions;
pub use map::MapOptions;
pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::{Fov, ViewOptions};

use crate::error::CamutilsError;

/// Navigation metaphor implemented by a manipulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Revolve around a pivot point.
    Orbit,
    /// Look straight down at the ground plane and pan/zoom like a 2D map.
    Map,
    /// Unconstrained mouse-look plus keyboard translation.
    FreeFlight,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Orbit => "orbit",
            Self::Map => "map",
            Self::FreeFlight => "free_flight",
        })
    }
}

/// Top-level manipulator configuration. All sub-structs use
/// `#[serde(default)]` so partial TOML files (e.g. only overriding
/// `[flight]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Config {
    /// Projection and world-frame parameters shared by every mode.
    pub view: ViewOptions,
    /// Orbit mode parameters.
    pub orbit: OrbitOptions,
    /// Map mode parameters.
    pub map: MapOptions,
    /// Free-flight mode parameters.
    pub flight: FlightOptions,
    /// Keyboard bindings for free-flight movement.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Config {
    /// Copy of this config with degenerate zero values (zoom speed, up
    /// vector, field of view, far plane, map extent, flight speed ladder)
    /// replaced by their defaults.
    #[must_use]
    pub fn resolved(&self) -> Self {
        let mut config = self.clone();
        config.view.fill_degenerate();
        config.map.fill_degenerate();
        config.flight.fill_degenerate();
        config
    }

    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Load a config from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CamutilsError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| CamutilsError::OptionsParse(e.to_string()))
    }

    /// Save the config to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CamutilsError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamutilsError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
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
