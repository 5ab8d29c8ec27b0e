use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Map", inline)]
#[serde(default)]
/// Map mode parameters.
pub struct MapOptions {
    /// World-space size of the map visible at the home bookmark.
    #[schemars(skip)]
    pub extent: [f32; 2],
    /// Minimum eye height above the ground plane.
    #[schemars(title = "Min Distance", range(min = 0.0, max = 1000.0), extend("step" = 0.5))]
    pub min_distance: f32,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            extent: [512.0, 512.0],
            min_distance: 0.0,
        }
    }
}

impl MapOptions {
    pub(super) fn fill_degenerate(&mut self) {
        if self.extent == [0.0; 2] {
            self.extent = Self::default().extent;
            log::debug!("map extent unset, using {:?}", self.extent);
        }
    }
}
