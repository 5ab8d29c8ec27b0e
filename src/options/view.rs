use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which viewport axis the field of view angle spans.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Fov {
    /// The angle spans the viewport height.
    #[default]
    Vertical,
    /// The angle spans the viewport width.
    Horizontal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "View", inline)]
#[serde(default)]
/// Projection and world-frame parameters shared by every mode.
pub struct ViewOptions {
    /// Viewport size in pixels (width, height).
    #[schemars(skip)]
    pub viewport: [u32; 2],
    /// World-space point the camera initially looks at (orbit pivot, map
    /// origin).
    #[schemars(skip)]
    pub target_position: [f32; 3],
    /// World-space up direction.
    #[schemars(skip)]
    pub up_vector: [f32; 3],
    /// Dolly / zoom sensitivity per unit of scroll.
    #[schemars(title = "Zoom Speed", range(min = 0.001, max = 0.5), extend("step" = 0.001))]
    pub zoom_speed: f32,
    /// Axis spanned by `fov_degrees`.
    #[schemars(title = "FOV Axis")]
    pub fov_direction: Fov,
    /// Full field of view angle in degrees.
    #[schemars(title = "Field of View", range(min = 10.0, max = 120.0), extend("step" = 1.0))]
    pub fov_degrees: f32,
    /// Distance of the far plane used for pointer panning.
    #[schemars(skip)]
    pub far_plane: f32,
    /// Raycast fallback plane `(a, b, c, d)` with `a·x + b·y + c·z + d = 0`.
    #[schemars(skip)]
    pub ground_plane: [f32; 4],
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            viewport: [0, 0],
            target_position: [0.0; 3],
            up_vector: [0.0, 1.0, 0.0],
            zoom_speed: 0.01,
            fov_direction: Fov::Vertical,
            fov_degrees: 33.0,
            far_plane: 5000.0,
            ground_plane: [0.0, 0.0, 1.0, 0.0],
        }
    }
}

impl ViewOptions {
    pub(super) fn fill_degenerate(&mut self) {
        let defaults = Self::default();
        if self.zoom_speed == 0.0 {
            log::debug!("zoom_speed unset, using {}", defaults.zoom_speed);
            self.zoom_speed = defaults.zoom_speed;
        }
        if self.up_vector == [0.0; 3] {
            log::debug!("up_vector unset, using +Y");
            self.up_vector = defaults.up_vector;
        }
        if self.fov_degrees == 0.0 {
            log::debug!("fov_degrees unset, using {}", defaults.fov_degrees);
            self.fov_degrees = defaults.fov_degrees;
        }
        if self.far_plane == 0.0 {
            log::debug!("far_plane unset, using {}", defaults.far_plane);
            self.far_plane = defaults.far_plane;
        }
        if self.ground_plane[..3] == [0.0; 3] {
            log::debug!("ground_plane has no normal, using z = 0");
            self.ground_plane = defaults.ground_plane;
        }
    }
}
