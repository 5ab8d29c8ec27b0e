//! Orbit navigation: revolve around a pivot, strafe to move the pivot,
//! scroll to dolly.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use super::core::Rig;
use crate::bookmark::OrbitBookmark;

/// Closest the eye may dolly to the pivot.
pub const MIN_ORBIT_DISTANCE: f32 = 0.01;

/// Elevation limit; keeps the gaze off the up axis while dragging.
const MAX_PHI: f32 = FRAC_PI_2 - 0.001;

#[derive(Debug, Clone, Copy)]
struct RotateAnchor {
    x: f32,
    y: f32,
    bookmark: OrbitBookmark,
}

#[derive(Debug, Clone, Copy)]
struct PanAnchor {
    /// Latest pointer position of the session.
    pointer: [f32; 2],
    far: Vec3,
    depth_ratio: f32,
    pivot: Vec3,
    eye: Vec3,
}

#[derive(Debug, Clone, Copy)]
enum Grab {
    Idle,
    Rotating(RotateAnchor),
    Panning(PanAnchor),
}

#[derive(Debug)]
pub(crate) struct OrbitState {
    pivot: Vec3,
    /// Rotates the +Y-up spherical frame onto the configured up vector.
    frame: Quat,
    grab: Grab,
}

impl OrbitState {
    pub(crate) fn new(rig: &mut Rig) -> Self {
        let mut state = Self {
            pivot: rig.target_position(),
            frame: Quat::from_rotation_arc(Vec3::Y, rig.up),
            grab: Grab::Idle,
        };
        let home = state.home_bookmark(rig);
        state.jump(rig, &home);
        state
    }

    pub(crate) fn is_grabbing(&self) -> bool {
        !matches!(self.grab, Grab::Idle)
    }

    fn bookmark_from_offset(&self, offset: Vec3, pivot: Vec3) -> OrbitBookmark {
        let local = self.frame.inverse() * offset;
        let distance = local.length();
        if distance <= f32::EPSILON {
            return OrbitBookmark {
                phi: 0.0,
                theta: 0.0,
                distance: MIN_ORBIT_DISTANCE,
                pivot,
            };
        }
        OrbitBookmark {
            phi: (local.y / distance).clamp(-1.0, 1.0).asin(),
            theta: local.x.atan2(local.z),
            distance,
            pivot,
        }
    }

    pub(crate) fn home_bookmark(&self, rig: &Rig) -> OrbitBookmark {
        let home = Vec3::from_array(rig.config.orbit.home_position);
        let pivot = rig.target_position();
        self.bookmark_from_offset(home - pivot, pivot)
    }

    pub(crate) fn current_bookmark(&self, rig: &Rig) -> OrbitBookmark {
        self.bookmark_from_offset(rig.eye - self.pivot, self.pivot)
    }

    pub(crate) fn jump(&mut self, rig: &mut Rig, bookmark: &OrbitBookmark) {
        let (sin_phi, cos_phi) = bookmark.phi.sin_cos();
        let (sin_theta, cos_theta) = bookmark.theta.sin_cos();
        let local =
            Vec3::new(sin_theta * cos_phi, sin_phi, cos_theta * cos_phi);
        let distance = bookmark.distance.abs().max(MIN_ORBIT_DISTANCE);
        self.pivot = bookmark.pivot;
        rig.eye = self.pivot + self.frame * local * distance;
        rig.target = self.pivot;
    }

    pub(crate) fn grab_begin(&mut self, rig: &Rig, x: f32, y: f32, strafe: bool) {
        if strafe && rig.config.orbit.panning {
            let Some(far) = rig.far_point(x, y) else {
                return;
            };
            let scene = rig.raycast(x, y).unwrap_or(self.pivot);
            self.grab = Grab::Panning(PanAnchor {
                pointer: [x, y],
                far,
                depth_ratio: rig.depth_ratio(scene),
                pivot: self.pivot,
                eye: rig.eye,
            });
            log::trace!("orbit pan grab at ({x}, {y})");
        } else {
            self.grab = Grab::Rotating(RotateAnchor {
                x,
                y,
                bookmark: self.current_bookmark(rig),
            });
            log::trace!("orbit rotate grab at ({x}, {y})");
        }
    }

    pub(crate) fn grab_update(&mut self, rig: &mut Rig, x: f32, y: f32) {
        match self.grab {
            Grab::Idle => {}
            Grab::Rotating(anchor) => {
                let [speed_x, speed_y] = rig.config.orbit.speed;
                let mut bookmark = anchor.bookmark;
                bookmark.theta += (anchor.x - x) * speed_x;
                bookmark.phi = (bookmark.phi + (anchor.y - y) * speed_y)
                    .clamp(-MAX_PHI, MAX_PHI);
                self.jump(rig, &bookmark);
            }
            Grab::Panning(mut anchor) => {
                let Some(far) = rig.far_point(x, y) else {
                    return;
                };
                anchor.pointer = [x, y];
                self.grab = Grab::Panning(anchor);
                // Express the far point relative to the eye as it was at
                // grab_begin; panning never changes orientation.
                let far = far - (rig.eye - anchor.eye);
                let translation = (anchor.far - far) * anchor.depth_ratio;
                let offset = rig.eye - self.pivot;
                self.pivot = anchor.pivot + translation;
                rig.eye = self.pivot + offset;
                rig.target = self.pivot;
            }
        }
    }

    pub(crate) fn grab_end(&mut self) {
        self.grab = Grab::Idle;
    }

    /// Dolly toward (negative `delta`) or away from the pivot.
    pub(crate) fn scroll(&mut self, rig: &mut Rig, delta: f32) {
        let mut bookmark = self.current_bookmark(rig);
        let factor = 1.0 + delta * rig.config.view.zoom_speed;
        let max_distance = rig.config.view.far_plane.max(MIN_ORBIT_DISTANCE);
        bookmark.distance = (bookmark.distance * factor.max(0.0))
            .clamp(MIN_ORBIT_DISTANCE, max_distance);
        self.jump(rig, &bookmark);

        // Carry the dolly into an active session so the next update keeps it.
        if let Grab::Rotating(anchor) = &mut self.grab {
            anchor.bookmark.distance = bookmark.distance;
        } else if let Grab::Panning(anchor) = self.grab {
            let [x, y] = anchor.pointer;
            self.grab_begin(rig, x, y, true);
        }
    }
}
