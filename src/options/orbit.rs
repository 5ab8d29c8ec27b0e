use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Orbit mode parameters.
pub struct OrbitOptions {
    /// Initial eye position; the pivot is `view.target_position`.
    #[schemars(skip)]
    pub home_position: [f32; 3],
    /// Rotation in radians per pixel of drag (horizontal, vertical).
    #[schemars(title = "Orbit Speed")]
    pub speed: [f32; 2],
    /// Whether strafe grabs pan the pivot. When off, strafe grabs rotate.
    #[schemars(title = "Allow Panning")]
    pub panning: bool,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            home_position: [0.0, 0.0, 1.0],
            speed: [0.01, 0.01],
            panning: true,
        }
    }
}
