use glam::Vec3;

use crate::options::{Config, Fov};
use crate::plane::Plane;

/// Scene-aware raycast hook: given a ray origin and unit direction, returns
/// the distance along the ray to the nearest hit.
pub type RayCallback = Box<dyn Fn(Vec3, Vec3) -> Option<f32> + Send>;

/// Below this squared length a cross product is treated as degenerate.
const DEGENERATE_EPSILON: f32 = 1e-8;

/// Picking ray through a viewport pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin (the eye).
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Camera basis handed to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAt {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Unit up direction, orthogonal to the gaze.
    pub up: Vec3,
}

/// State shared by every mode: the resolved config, the live eye/target
/// pair and everything needed to turn pixels into rays.
pub(crate) struct Rig {
    pub(crate) config: Config,
    pub(crate) eye: Vec3,
    pub(crate) target: Vec3,
    /// Up hint used to orient the image; modes may override the config's.
    pub(crate) up: Vec3,
    pub(crate) ground: Plane,
    ray_callback: Option<RayCallback>,
}

impl Rig {
    /// `config` must already be resolved.
    pub(crate) fn new(config: Config, ray_callback: Option<RayCallback>) -> Self {
        let up = Vec3::from_array(config.view.up_vector).normalize_or(Vec3::Y);
        let ground = Plane::from_array(config.view.ground_plane);
        let target = Vec3::from_array(config.view.target_position);
        Self {
            config,
            eye: target + Vec3::Z,
            target,
            up,
            ground,
            ray_callback,
        }
    }

    pub(crate) fn target_position(&self) -> Vec3 {
        Vec3::from_array(self.config.view.target_position)
    }

    pub(crate) fn half_fov_tangent(&self) -> f32 {
        (self.config.view.fov_degrees.to_radians() / 2.0).tan()
    }

    pub(crate) fn gaze(&self) -> Vec3 {
        (self.target - self.eye).normalize_or(Vec3::NEG_Z)
    }

    /// Orthonormal (gaze, right, upward) frame for the current view.
    pub(crate) fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let gaze = self.gaze();
        let right = gaze.cross(self.up);
        let right = if right.length_squared() > DEGENERATE_EPSILON {
            right.normalize()
        } else {
            gaze.any_orthonormal_vector()
        };
        (gaze, right, right.cross(gaze))
    }

    pub(crate) fn look_at(&self) -> LookAt {
        let (_, _, up) = self.basis();
        LookAt {
            eye: self.eye,
            target: self.target,
            up,
        }
    }

    /// Unnormalized offset from the gaze toward pixel `(x, y)`, scaled so
    /// its component along the gaze is exactly one.
    fn pixel_offset(&self, x: f32, y: f32) -> Option<Vec3> {
        let [width, height] = self.config.view.viewport;
        if width == 0 || height == 0 {
            return None;
        }
        let (width, height) = (width as f32, height as f32);
        let u = 2.0 * x / width - 1.0;
        let v = 2.0 * y / height - 1.0;
        let tangent = self.half_fov_tangent();
        let aspect = width / height;
        let (su, sv) = match self.config.view.fov_direction {
            Fov::Vertical => (u * tangent * aspect, v * tangent),
            Fov::Horizontal => (u * tangent, v * tangent / aspect),
        };
        let (gaze, right, upward) = self.basis();
        Some(gaze + right * su + upward * sv)
    }

    pub(crate) fn ray(&self, x: f32, y: f32) -> Option<Ray> {
        let offset = self.pixel_offset(x, y)?;
        Some(Ray {
            origin: self.eye,
            direction: offset.normalize(),
        })
    }

    /// Where the ray through `(x, y)` crosses the far plane.
    pub(crate) fn far_point(&self, x: f32, y: f32) -> Option<Vec3> {
        let offset = self.pixel_offset(x, y)?;
        Some(self.eye + offset * self.config.view.far_plane)
    }

    /// Scene hit under `(x, y)`: the callback first, the ground plane when
    /// there is no callback or it misses.
    pub(crate) fn raycast(&self, x: f32, y: f32) -> Option<Vec3> {
        let ray = self.ray(x, y)?;
        let scene_hit = self
            .ray_callback
            .as_ref()
            .and_then(|callback| callback(ray.origin, ray.direction))
            .filter(|t| *t >= 0.0);
        scene_hit
            .or_else(|| self.ground.intersect_ray(ray.origin, ray.direction))
            .map(|t| ray.at(t))
    }

    /// Fraction of the far-plane depth at which `point` sits along the gaze.
    pub(crate) fn depth_ratio(&self, point: Vec3) -> f32 {
        (point - self.eye).dot(self.gaze()) / self.config.view.far_plane
    }
}

impl std::fmt::Debug for Rig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rig")
            .field("eye", &self.eye)
            .field("target", &self.target)
            .field("up", &self.up)
            .field("ground", &self.ground)
            .field("ray_callback", &self.ray_callback.is_some())
            .finish_non_exhaustive()
    }
}
