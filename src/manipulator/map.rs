//! Map navigation: the camera looks straight down the ground-plane normal,
//! drags pan the map under the pointer and scroll zooms toward the pointer.

use glam::{Vec2, Vec3};

use super::core::Rig;
use crate::bookmark::MapBookmark;
use crate::options::Fov;

/// Floor for the eye height when no `min_distance` is configured.
const MIN_MAP_HEIGHT: f32 = 1e-3;

#[derive(Debug, Clone, Copy)]
struct PanAnchor {
    /// Latest pointer position of the session.
    pointer: [f32; 2],
    far: Vec3,
    depth_ratio: f32,
    eye: Vec3,
}

#[derive(Debug, Clone, Copy)]
enum Grab {
    Idle,
    Panning(PanAnchor),
}

#[derive(Debug)]
pub(crate) struct MapState {
    /// Unit ground-plane axis mapped to screen right.
    u_axis: Vec3,
    /// Unit ground-plane axis mapped to screen up.
    v_axis: Vec3,
    grab: Grab,
}

impl MapState {
    pub(crate) fn new(rig: &mut Rig) -> Self {
        let normal = rig.ground.normal;
        let u_axis = rig.up.cross(normal);
        let u_axis = if u_axis.length_squared() > 1e-8 {
            u_axis.normalize()
        } else {
            normal.any_orthonormal_vector()
        };
        let v_axis = normal.cross(u_axis);
        rig.up = v_axis;

        let mut state = Self {
            u_axis,
            v_axis,
            grab: Grab::Idle,
        };
        let home = state.home_bookmark(rig);
        state.jump(rig, &home);
        state
    }

    pub(crate) fn is_grabbing(&self) -> bool {
        matches!(self.grab, Grab::Panning(_))
    }

    fn min_height(rig: &Rig) -> f32 {
        rig.config.map.min_distance.max(MIN_MAP_HEIGHT)
    }

    /// Map origin: the configured target position dropped onto the ground.
    fn origin(rig: &Rig) -> Vec3 {
        rig.ground.project_point(rig.target_position())
    }

    pub(crate) fn home_bookmark(&self, rig: &Rig) -> MapBookmark {
        let [width, height] = rig.config.map.extent;
        let extent = match rig.config.view.fov_direction {
            Fov::Horizontal => width,
            Fov::Vertical => height,
        };
        MapBookmark {
            center: Vec2::ZERO,
            extent,
        }
    }

    pub(crate) fn current_bookmark(&self, rig: &Rig) -> MapBookmark {
        let height = rig.ground.distance_to_point(rig.eye);
        let offset = rig.target - Self::origin(rig);
        MapBookmark {
            center: Vec2::new(offset.dot(self.u_axis), offset.dot(self.v_axis)),
            extent: 2.0 * height * rig.half_fov_tangent(),
        }
    }

    pub(crate) fn jump(&mut self, rig: &mut Rig, bookmark: &MapBookmark) {
        let height = (bookmark.extent / 2.0 / rig.half_fov_tangent())
            .max(Self::min_height(rig));
        let target = Self::origin(rig)
            + self.u_axis * bookmark.center.x
            + self.v_axis * bookmark.center.y;
        self.move_with_constraints(rig, target + rig.ground.normal * height);
    }

    /// Places the eye with its height clamped between the minimum height
    /// and the far plane, and drops the target straight below it.
    fn move_with_constraints(&self, rig: &mut Rig, eye: Vec3) {
        let height = rig.ground.distance_to_point(eye);
        let floor = Self::min_height(rig);
        let ceiling = rig.config.view.far_plane.max(floor);
        rig.eye =
            eye + rig.ground.normal * (height.clamp(floor, ceiling) - height);
        rig.target = rig.ground.project_point(rig.eye);
    }

    pub(crate) fn grab_begin(&mut self, rig: &Rig, x: f32, y: f32) {
        // A grab that misses the ground has nothing to drag.
        let (Some(scene), Some(far)) = (rig.raycast(x, y), rig.far_point(x, y))
        else {
            self.grab = Grab::Idle;
            return;
        };
        self.grab = Grab::Panning(PanAnchor {
            pointer: [x, y],
            far,
            depth_ratio: rig.depth_ratio(scene),
            eye: rig.eye,
        });
        log::trace!("map pan grab at ({x}, {y})");
    }

    pub(crate) fn grab_update(&mut self, rig: &mut Rig, x: f32, y: f32) {
        let Grab::Panning(mut anchor) = self.grab else {
            return;
        };
        let Some(far) = rig.far_point(x, y) else {
            return;
        };
        anchor.pointer = [x, y];
        self.grab = Grab::Panning(anchor);
        let far = far - (rig.eye - anchor.eye);
        let translation = (anchor.far - far) * anchor.depth_ratio;
        self.move_with_constraints(rig, anchor.eye + translation);
    }

    pub(crate) fn grab_end(&mut self) {
        self.grab = Grab::Idle;
    }

    /// Zoom toward (negative `delta`) or away from the ground point under
    /// `(x, y)`.
    pub(crate) fn scroll(&mut self, rig: &mut Rig, x: f32, y: f32, delta: f32) {
        let Some(scene) = rig.raycast(x, y) else {
            return;
        };
        // Unnormalized so zooming is faster far from the ground.
        let toward = scene - rig.eye;
        let mut step = -delta * rig.config.view.zoom_speed;
        let descent = -toward.dot(rig.ground.normal);
        if step > 0.0 && descent > 0.0 {
            let headroom =
                rig.ground.distance_to_point(rig.eye) - Self::min_height(rig);
            step = step.min((headroom / descent).max(0.0));
        }
        self.move_with_constraints(rig, rig.eye + toward * step);

        // Re-anchor an active pan at its latest pointer so the next update
        // starts from the zoomed view.
        if let Grab::Panning(anchor) = self.grab {
            let [x, y] = anchor.pointer;
            self.grab_begin(rig, x, y);
        }
    }
}
