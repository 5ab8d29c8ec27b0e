//! Camera bookmarks: copyable snapshots of a manipulator's view.
//!
//! A [`Bookmark`] carries the mode-specific coordinates needed to rebuild the
//! camera basis (spherical coordinates for orbit, a ground-plane offset and
//! extent for map, position plus pitch/yaw for free flight). Bookmarks hold
//! no reference to the manipulator that produced them.

use std::f64::consts::{PI, SQRT_2, TAU};

use glam::{Vec2, Vec3};

use crate::error::CamutilsError;
use crate::options::Mode;

/// Orbit view expressed in spherical coordinates around a pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitBookmark {
    /// Elevation above the plane perpendicular to the up vector, radians.
    pub phi: f32,
    /// Azimuth about the up vector, radians.
    pub theta: f32,
    /// Eye-to-pivot distance.
    pub distance: f32,
    /// Point the camera revolves around.
    pub pivot: Vec3,
}

/// Map view expressed in ground-plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBookmark {
    /// Offset of the look-at point from the configured target position,
    /// measured along the ground plane's horizontal and vertical axes.
    pub center: Vec2,
    /// World-space size visible along the field-of-view axis.
    pub extent: f32,
}

/// Free-flight view expressed as a position and orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightBookmark {
    /// Eye position.
    pub position: Vec3,
    /// Pitch in radians.
    pub pitch: f32,
    /// Yaw in radians.
    pub yaw: f32,
}

/// Snapshot of a camera view that can be restored with
/// [`Manipulator::jump_to_bookmark`](crate::manipulator::Manipulator::jump_to_bookmark).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bookmark {
    /// Captured by an orbit manipulator.
    Orbit(OrbitBookmark),
    /// Captured by a map manipulator.
    Map(MapBookmark),
    /// Captured by a free-flight manipulator.
    FreeFlight(FlightBookmark),
}

/// Van Wijk & Nuij smooth zoom-and-pan parameters between two map views.
struct MapPath {
    ux0: f64,
    uy0: f64,
    w0: f64,
    dx: f64,
    dy: f64,
    d1: f64,
    r0: f64,
    /// Whether the closed form applies; false when the
    /// centers coincide.
    valid: bool,
    s_total: f64,
}

impl MapPath {
    fn new(a: &MapBookmark, b: &MapBookmark) -> Self {
        const RHO2: f64 = 2.0;
        const RHO4: f64 = 4.0;
        let (ux0, uy0, w0) =
            (f64::from(a.center.x), f64::from(a.center.y), f64::from(a.extent));
        let (ux1, uy1, w1) =
            (f64::from(b.center.x), f64::from(b.center.y), f64::from(b.extent));
        let (dx, dy) = (ux1 - ux0, uy1 - uy0);
        let d2 = dx * dx + dy * dy;
        let d1 = d2.sqrt();
        let b0 = (w1 * w1 - w0 * w0 + RHO4 * d2) / (2.0 * w0 * RHO2 * d1);
        let b1 = (w1 * w1 - w0 * w0 - RHO4 * d2) / (2.0 * w1 * RHO2 * d1);
        let r0 = ((b0 * b0 + 1.0).sqrt() - b0).ln();
        let r1 = ((b1 * b1 + 1.0).sqrt() - b1).ln();
        let dr = r1 - r0;
        let valid = dr.is_finite() && dr != 0.0;
        let s_total = if valid { dr } else { (w1 / w0).ln() } / SQRT_2;
        Self {
            ux0,
            uy0,
            w0,
            dx,
            dy,
            d1,
            r0,
            valid,
            s_total,
        }
    }

    fn sample(&self, t: f64) -> MapBookmark {
        let s = t * self.s_total;
        if self.valid {
            let cosh_r0 = self.r0.cosh();
            let u = self.w0 / (2.0 * self.d1)
                * (cosh_r0 * (SQRT_2 * s + self.r0).tanh() - self.r0.sinh());
            return MapBookmark {
                center: Vec2::new(
                    (self.ux0 + u * self.dx) as f32,
                    (self.uy0 + u * self.dy) as f32,
                ),
                extent: (self.w0 * cosh_r0 / (SQRT_2 * s + self.r0).cosh())
                    as f32,
            };
        }
        // Coincident centers: geometric zoom in place.
        MapBookmark {
            center: Vec2::new(
                (self.ux0 + t * self.dx) as f32,
                (self.uy0 + t * self.dy) as f32,
            ),
            extent: (self.w0 * (SQRT_2 * s).exp()) as f32,
        }
    }
}

impl Bookmark {
    /// Mode this bookmark was captured in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Orbit(_) => Mode::Orbit,
            Self::Map(_) => Mode::Map,
            Self::FreeFlight(_) => Mode::FreeFlight,
        }
    }

    /// Blend between two bookmarks of the same mode at parameter `t` in
    /// `[0, 1]`.
    ///
    /// Map bookmarks follow the Van Wijk optimal zoom-and-pan path so long
    /// pans zoom out first. Orbit bookmarks blend component-wise. Flight
    /// bookmarks blend position and pitch linearly and yaw along the
    /// shorter arc.
    pub fn interpolate(
        a: &Self,
        b: &Self,
        t: f64,
    ) -> Result<Self, CamutilsError> {
        match (a, b) {
            (Self::Map(a), Self::Map(b)) => {
                Ok(Self::Map(MapPath::new(a, b).sample(t)))
            }
            (Self::Orbit(a), Self::Orbit(b)) => {
                let t = t as f32;
                Ok(Self::Orbit(OrbitBookmark {
                    phi: lerp(a.phi, b.phi, t),
                    theta: a.theta + short_arc(a.theta, b.theta) as f32 * t,
                    distance: lerp(a.distance, b.distance, t),
                    pivot: a.pivot.lerp(b.pivot, t),
                }))
            }
            (Self::FreeFlight(a), Self::FreeFlight(b)) => {
                let yaw_delta = short_arc(a.yaw, b.yaw);
                let t32 = t as f32;
                Ok(Self::FreeFlight(FlightBookmark {
                    position: a.position.lerp(b.position, t32),
                    pitch: lerp(a.pitch, b.pitch, t32),
                    yaw: a.yaw + (yaw_delta * t) as f32,
                }))
            }
            _ => Err(CamutilsError::BookmarkModeMismatch {
                expected: a.mode(),
                found: b.mode(),
            }),
        }
    }

    /// Suggested relative duration of an animated transition between two
    /// map bookmarks (the Van Wijk path length).
    ///
    /// Scale the result by a host-chosen velocity to obtain seconds.
    pub fn duration(a: &Self, b: &Self) -> Result<f64, CamutilsError> {
        match (a, b) {
            (Self::Map(a), Self::Map(b)) => {
                Ok(MapPath::new(a, b).s_total.abs())
            }
            (Self::Map(_), other) => Err(CamutilsError::BookmarkModeMismatch {
                expected: Mode::Map,
                found: other.mode(),
            }),
            (other, _) => {
                Err(CamutilsError::UnsupportedTransition(other.mode()))
            }
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Signed angle from `a` to `b` in `[-π, π)`.
fn short_arc(a: f32, b: f32) -> f64 {
    (f64::from(b - a) + PI).rem_euclid(TAU) - PI
}
