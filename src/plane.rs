//! Ground plane used as the raycast fallback.

use glam::{Vec3, Vec4};

/// Rays closer than this to parallel with a plane never hit it.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    pub fn from_coefficients(a: f32, b: f32, c: f32, d: f32) -> Self {
        let len = (a * a + b * b + c * c).sqrt();
        if len > 0.0 {
            Self {
                normal: Vec3::new(a / len, b / len, c / len),
                distance: d / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Create a plane from a `[a, b, c, d]` config array.
    pub fn from_array(coefficients: [f32; 4]) -> Self {
        let v = Vec4::from_array(coefficients);
        Self::from_coefficients(v.x, v.y, v.z, v.w)
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Orthogonal projection of `point` onto the plane.
    #[inline]
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        point - self.normal * self.distance_to_point(point)
    }

    /// Ray parameter `t` at which `origin + dir * t` meets the plane.
    ///
    /// Misses (`None`) when the ray is parallel to the plane or the
    /// intersection lies behind the origin.
    pub fn intersect_ray(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let denom = self.normal.dot(dir);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }
        let t = -self.distance_to_point(origin) / denom;
        (t >= 0.0).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_are_normalized() {
        let plane = Plane::from_coefficients(0.0, 2.0, 0.0, -4.0);
        assert_eq!(plane.normal, Vec3::Y);
        assert_eq!(plane.distance, -2.0);
        assert_eq!(plane.distance_to_point(Vec3::new(3.0, 5.0, 1.0)), 3.0);
    }

    #[test]
    fn ray_hits_plane_from_either_side() {
        let plane = Plane::from_array([0.0, 1.0, 0.0, 0.0]);
        let t = plane
            .intersect_ray(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y)
            .unwrap();
        assert!((t - 5.0).abs() < 1e-6);
        let t = plane
            .intersect_ray(Vec3::new(0.0, -2.0, 0.0), Vec3::Y)
            .unwrap();
        assert!((t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn parallel_and_receding_rays_miss() {
        let plane = Plane::from_array([0.0, 1.0, 0.0, 0.0]);
        assert!(plane.intersect_ray(Vec3::Y, Vec3::X).is_none());
        assert!(plane.intersect_ray(Vec3::Y, Vec3::Y).is_none());
    }

    #[test]
    fn project_point_lands_on_plane() {
        let plane = Plane::from_array([0.0, 0.0, 1.0, -1.0]);
        let p = plane.project_point(Vec3::new(2.0, 3.0, 7.0));
        assert_eq!(p, Vec3::new(2.0, 3.0, 1.0));
    }
}
