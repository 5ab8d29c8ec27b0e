//! Fluent construction of a [`Manipulator`].

use glam::{Vec2, Vec3};

use crate::manipulator::{Manipulator, RayCallback};
use crate::options::{Config, Fov, Mode};

/// Fluent builder for [`Manipulator`].
///
/// Every setter overrides one [`Config`] field. Unset fields keep their
/// defaults, and degenerate zero values are replaced at
/// [`build`](Self::build) time.
#[derive(Default)]
pub struct Builder {
    config: Config,
    ray_callback: Option<RayCallback>,
}

impl Builder {
    /// Start from the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a preset, e.g. one read with [`Config::load`].
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            ray_callback: None,
        }
    }

    /// Config accumulated so far, before degenerate values are resolved.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ── View ──────────────────────────────────────────────────────────

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.view.viewport = [width, height];
        self
    }

    /// Orbit pivot and map origin.
    #[must_use]
    pub fn target_position(mut self, target: Vec3) -> Self {
        self.config.view.target_position = target.to_array();
        self
    }

    /// World-space up direction.
    #[must_use]
    pub fn up_vector(mut self, up: Vec3) -> Self {
        self.config.view.up_vector = up.to_array();
        self
    }

    /// Scroll sensitivity for orbit dolly and map zoom.
    #[must_use]
    pub fn zoom_speed(mut self, speed: f32) -> Self {
        self.config.view.zoom_speed = speed;
        self
    }

    /// Axis spanned by the field of view angle.
    #[must_use]
    pub fn fov_direction(mut self, direction: Fov) -> Self {
        self.config.view.fov_direction = direction;
        self
    }

    /// Full field of view in degrees.
    #[must_use]
    pub fn fov_degrees(mut self, degrees: f32) -> Self {
        self.config.view.fov_degrees = degrees;
        self
    }

    /// Far plane distance used by pointer panning.
    #[must_use]
    pub fn far_plane(mut self, distance: f32) -> Self {
        self.config.view.far_plane = distance;
        self
    }

    /// Raycast fallback plane `a·x + b·y + c·z + d = 0` given as
    /// `[a, b, c, d]`.
    #[must_use]
    pub fn ground_plane(mut self, plane: [f32; 4]) -> Self {
        self.config.view.ground_plane = plane;
        self
    }

    /// Scene raycast tried before the ground plane. Receives the ray origin
    /// and unit direction and returns the hit distance along the ray.
    #[must_use]
    pub fn raycast_callback(
        mut self,
        callback: impl Fn(Vec3, Vec3) -> Option<f32> + Send + 'static,
    ) -> Self {
        self.ray_callback = Some(Box::new(callback));
        self
    }

    // ── Orbit ─────────────────────────────────────────────────────────

    /// Initial orbit eye position.
    #[must_use]
    pub fn orbit_home_position(mut self, position: Vec3) -> Self {
        self.config.orbit.home_position = position.to_array();
        self
    }

    /// Orbit rotation in radians per pixel.
    #[must_use]
    pub fn orbit_speed(mut self, speed: Vec2) -> Self {
        self.config.orbit.speed = speed.to_array();
        self
    }

    /// Whether strafe grabs pan instead of rotating.
    #[must_use]
    pub fn orbit_panning(mut self, enabled: bool) -> Self {
        self.config.orbit.panning = enabled;
        self
    }

    // ── Map ───────────────────────────────────────────────────────────

    /// World-space map size framed by the home bookmark.
    #[must_use]
    pub fn map_extent(mut self, extent: Vec2) -> Self {
        self.config.map.extent = extent.to_array();
        self
    }

    /// Minimum eye height above the ground.
    #[must_use]
    pub fn map_min_distance(mut self, distance: f32) -> Self {
        self.config.map.min_distance = distance;
        self
    }

    // ── Free flight ───────────────────────────────────────────────────

    /// Initial free-flight eye position.
    #[must_use]
    pub fn flight_start_position(mut self, position: Vec3) -> Self {
        self.config.flight.start_position = position.to_array();
        self
    }

    /// Initial free-flight pitch and yaw in radians.
    #[must_use]
    pub fn flight_start_orientation(mut self, pitch: f32, yaw: f32) -> Self {
        self.config.flight.start_pitch = pitch;
        self.config.flight.start_yaw = yaw;
        self
    }

    /// Top of the speed ladder in world units per second.
    #[must_use]
    pub fn flight_max_move_speed(mut self, speed: f32) -> Self {
        self.config.flight.max_move_speed = speed;
        self
    }

    /// Scroll steps between the slowest and fastest speed.
    #[must_use]
    pub fn flight_speed_steps(mut self, steps: u32) -> Self {
        self.config.flight.speed_steps = steps;
        self
    }

    /// Mouse-look sensitivity in radians per pixel.
    #[must_use]
    pub fn flight_pan_speed(mut self, speed: Vec2) -> Self {
        self.config.flight.pan_speed = speed.to_array();
        self
    }

    /// Velocity damping; zero makes movement stop instantly.
    #[must_use]
    pub fn flight_move_damping(mut self, damping: f32) -> Self {
        self.config.flight.move_damping = damping;
        self
    }

    /// Consume the builder and produce a manipulator positioned at the
    /// mode's home bookmark.
    #[must_use]
    pub fn build(self, mode: Mode) -> Manipulator {
        Manipulator::new(mode, &self.config, self.ray_callback)
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("config", &self.config)
            .field("ray_callback", &self.ray_callback.is_some())
            .finish()
    }
}
