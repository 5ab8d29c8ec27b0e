//! Interactive camera manipulator.
//!
//! A [`Manipulator`] owns the live camera (eye, target, up) and one of three
//! navigation state machines selected at build time. Hosts feed it pointer,
//! wheel and key events, call [`Manipulator::update`] once per frame and read
//! the resulting basis with [`Manipulator::look_at`].
//!
//! Pointer coordinates are in pixels with the origin at the lower-left
//! corner of the viewport (y grows upward).
//!
//! Grab sessions are cumulative: every `grab_update` is measured against the
//! pointer position and camera state captured by `grab_begin`, so repeated
//! updates at one position are idempotent regardless of event rate. A
//! scroll during a session rebases the anchor so the zoom survives the next
//! update; a bookmark jump ends the session.

mod core;
mod flight;
mod map;
mod orbit;

use glam::Vec3;
use serde::{Deserialize, Serialize};

pub use self::core::{LookAt, Ray, RayCallback};
use self::core::Rig;
use self::flight::FlightState;
use self::map::MapState;
use self::orbit::OrbitState;
pub use self::orbit::MIN_ORBIT_DISTANCE;
use crate::bookmark::Bookmark;
use crate::error::CamutilsError;
use crate::options::{Config, Mode};

/// Free-flight movement keys. Holding opposite keys cancels them out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    /// Move along the gaze.
    Forward,
    /// Strafe left.
    Left,
    /// Move against the gaze.
    Backward,
    /// Strafe right.
    Right,
    /// Rise along the up vector.
    Up,
    /// Sink along the up vector.
    Down,
}

impl Key {
    pub(crate) const COUNT: usize = 6;

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug)]
enum ModeState {
    Orbit(OrbitState),
    Map(MapState),
    FreeFlight(FlightState),
}

/// Frame-driven camera controller for one navigation mode.
///
/// Built by [`Builder::build`](crate::builder::Builder::build).
#[derive(Debug)]
pub struct Manipulator {
    rig: Rig,
    state: ModeState,
}

impl Manipulator {
    /// Resolve `config` and start at the mode's home bookmark.
    pub(crate) fn new(
        mode: Mode,
        config: &Config,
        ray_callback: Option<RayCallback>,
    ) -> Self {
        let mut rig = Rig::new(config.resolved(), ray_callback);
        let state = match mode {
            Mode::Orbit => ModeState::Orbit(OrbitState::new(&mut rig)),
            Mode::Map => ModeState::Map(MapState::new(&mut rig)),
            Mode::FreeFlight => {
                ModeState::FreeFlight(FlightState::new(&mut rig))
            }
        };
        log::debug!(
            "built {mode} manipulator: eye {} target {}",
            rig.eye,
            rig.target
        );
        Self { rig, state }
    }

    /// Navigation mode chosen at build time.
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self.state {
            ModeState::Orbit(_) => Mode::Orbit,
            ModeState::Map(_) => Mode::Map,
            ModeState::FreeFlight(_) => Mode::FreeFlight,
        }
    }

    /// Resolved configuration the manipulator runs on.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.rig.config
    }

    /// Update the viewport size used to turn pixels into rays. Call whenever
    /// the host surface resizes.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.rig.config.view.viewport = [width, height];
    }

    /// Current camera basis. Call [`update`](Self::update) once per frame
    /// first so time-dependent motion is applied.
    #[must_use]
    pub fn look_at(&self) -> LookAt {
        self.rig.look_at()
    }

    /// Picking ray through pixel `(x, y)`, or `None` while the viewport has
    /// a zero dimension.
    #[must_use]
    pub fn ray(&self, x: f32, y: f32) -> Option<Ray> {
        self.rig.ray(x, y)
    }

    /// World-space point under pixel `(x, y)`.
    ///
    /// Uses the raycast callback when one was configured and falls back to
    /// the ground plane when there is none or it misses. `None` when nothing
    /// is hit: the ray is parallel to the ground, the hit lies behind the
    /// eye, or the viewport is empty.
    #[must_use]
    pub fn raycast(&self, x: f32, y: f32) -> Option<Vec3> {
        self.rig.raycast(x, y)
    }

    /// Start a grab session at `(x, y)`.
    ///
    /// `strafe` selects panning in orbit mode; map mode always pans and
    /// free flight always looks around.
    pub fn grab_begin(&mut self, x: f32, y: f32, strafe: bool) {
        match &mut self.state {
            ModeState::Orbit(orbit) => {
                orbit.grab_begin(&self.rig, x, y, strafe);
            }
            ModeState::Map(map) => map.grab_begin(&self.rig, x, y),
            ModeState::FreeFlight(flight) => flight.grab_begin(x, y),
        }
    }

    /// Move the pointer of the active grab session to `(x, y)`. No-op when
    /// no session is active.
    pub fn grab_update(&mut self, x: f32, y: f32) {
        match &mut self.state {
            ModeState::Orbit(orbit) => orbit.grab_update(&mut self.rig, x, y),
            ModeState::Map(map) => map.grab_update(&mut self.rig, x, y),
            ModeState::FreeFlight(flight) => {
                flight.grab_update(&mut self.rig, x, y);
            }
        }
    }

    /// End the active grab session, if any.
    pub fn grab_end(&mut self) {
        match &mut self.state {
            ModeState::Orbit(orbit) => orbit.grab_end(),
            ModeState::Map(map) => map.grab_end(),
            ModeState::FreeFlight(flight) => flight.grab_end(),
        }
    }

    /// Whether a grab session is active.
    #[must_use]
    pub fn is_grabbing(&self) -> bool {
        match &self.state {
            ModeState::Orbit(orbit) => orbit.is_grabbing(),
            ModeState::Map(map) => map.is_grabbing(),
            ModeState::FreeFlight(flight) => flight.is_grabbing(),
        }
    }

    /// Press a movement key. Only free flight reacts.
    pub fn key_down(&mut self, key: Key) {
        if let ModeState::FreeFlight(flight) = &mut self.state {
            flight.set_key(key, true);
        }
    }

    /// Release a movement key. Only free flight reacts.
    pub fn key_up(&mut self, key: Key) {
        if let ModeState::FreeFlight(flight) = &mut self.state {
            flight.set_key(key, false);
        }
    }

    /// Scroll wheel input at pixel `(x, y)`.
    ///
    /// Orbit dollies toward (negative `delta`) or away from the pivot; map
    /// zooms toward or away from the ground point under `(x, y)`; free
    /// flight moves `delta` steps along the speed ladder and ignores the
    /// position.
    pub fn scroll(&mut self, x: f32, y: f32, delta: f32) {
        match &mut self.state {
            ModeState::Orbit(orbit) => orbit.scroll(&mut self.rig, delta),
            ModeState::Map(map) => map.scroll(&mut self.rig, x, y, delta),
            ModeState::FreeFlight(flight) => flight.scroll(&self.rig, delta),
        }
    }

    /// Advance time-dependent motion by `delta_time` seconds. Negative (or
    /// NaN) steps are treated as zero.
    pub fn update(&mut self, delta_time: f32) {
        let delta_time = delta_time.max(0.0);
        if let ModeState::FreeFlight(flight) = &mut self.state {
            flight.update(&mut self.rig, delta_time);
        }
    }

    /// Free-flight speed in world units per second; `None` in other modes.
    #[must_use]
    pub fn flight_move_speed(&self) -> Option<f32> {
        match &self.state {
            ModeState::FreeFlight(flight) => Some(flight.move_speed()),
            _ => None,
        }
    }

    /// Snapshot of the current view.
    #[must_use]
    pub fn current_bookmark(&self) -> Bookmark {
        match &self.state {
            ModeState::Orbit(orbit) => {
                Bookmark::Orbit(orbit.current_bookmark(&self.rig))
            }
            ModeState::Map(map) => Bookmark::Map(map.current_bookmark(&self.rig)),
            ModeState::FreeFlight(flight) => {
                Bookmark::FreeFlight(flight.current_bookmark(&self.rig))
            }
        }
    }

    /// The view the manipulator started in, derived from the config.
    #[must_use]
    pub fn home_bookmark(&self) -> Bookmark {
        match &self.state {
            ModeState::Orbit(orbit) => {
                Bookmark::Orbit(orbit.home_bookmark(&self.rig))
            }
            ModeState::Map(map) => Bookmark::Map(map.home_bookmark(&self.rig)),
            ModeState::FreeFlight(flight) => {
                Bookmark::FreeFlight(flight.home_bookmark(&self.rig))
            }
        }
    }

    /// Restore a bookmark captured in this manipulator's mode.
    ///
    /// Ends any active grab session, since its anchor no longer describes
    /// the view. Bookmarks from another mode are rejected and leave the view
    /// and the session untouched.
    pub fn jump_to_bookmark(
        &mut self,
        bookmark: &Bookmark,
    ) -> Result<(), CamutilsError> {
        match (&mut self.state, bookmark) {
            (ModeState::Orbit(orbit), Bookmark::Orbit(b)) => {
                orbit.jump(&mut self.rig, b);
            }
            (ModeState::Map(map), Bookmark::Map(b)) => {
                map.jump(&mut self.rig, b);
            }
            (ModeState::FreeFlight(flight), Bookmark::FreeFlight(b)) => {
                flight.jump(&mut self.rig, b);
            }
            _ => {
                let expected = self.mode();
                let found = bookmark.mode();
                log::warn!("rejected {found} bookmark on {expected} manipulator");
                return Err(CamutilsError::BookmarkModeMismatch {
                    expected,
                    found,
                });
            }
        }
        self.grab_end();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::builder::Builder;

    const MODES: [Mode; 3] = [Mode::Orbit, Mode::Map, Mode::FreeFlight];

    fn builder() -> Builder {
        Builder::new()
            .viewport(800, 600)
            .target_position(Vec3::ZERO)
            .orbit_home_position(Vec3::new(0.0, 3.0, 5.0))
            .ground_plane([0.0, 1.0, 0.0, 0.0])
            .up_vector(Vec3::Y)
            .map_extent(Vec2::new(64.0, 48.0))
            .flight_start_position(Vec3::new(1.0, 2.0, 3.0))
            .flight_start_orientation(-0.3, 0.7)
    }

    fn assert_look_eq(a: LookAt, b: LookAt) {
        assert!(a.eye.abs_diff_eq(b.eye, 1e-3), "{a:?} vs {b:?}");
        assert!(a.target.abs_diff_eq(b.target, 1e-3), "{a:?} vs {b:?}");
        assert!(a.up.abs_diff_eq(b.up, 1e-3), "{a:?} vs {b:?}");
    }

    /// Push every mode through a bit of everything.
    fn wander(m: &mut Manipulator) {
        m.grab_begin(400.0, 200.0, false);
        m.grab_update(430.0, 180.0);
        m.grab_end();
        m.scroll(420.0, 150.0, -3.0);
        m.key_down(Key::Forward);
        m.update(0.25);
        m.key_up(Key::Forward);
        m.update(0.25);
    }

    #[test]
    fn mode_matches_build_request() {
        for mode in MODES {
            assert_eq!(builder().build(mode).mode(), mode);
        }
    }

    #[test]
    fn end_to_end_orbit_home_view() {
        let mut m = Builder::new()
            .viewport(800, 600)
            .orbit_home_position(Vec3::new(0.0, 0.0, 5.0))
            .target_position(Vec3::ZERO)
            .build(Mode::Orbit);
        m.update(0.0);
        let look = m.look_at();
        assert!(look.eye.abs_diff_eq(Vec3::new(0.0, 0.0, 5.0), 1e-5));
        assert!(look.target.abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(look.up.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn current_bookmark_round_trips() {
        for mode in MODES {
            let mut m = builder().build(mode);
            wander(&mut m);
            let before = m.look_at();
            let bookmark = m.current_bookmark();
            m.jump_to_bookmark(&bookmark).unwrap();
            assert_look_eq(m.look_at(), before);
        }
    }

    #[test]
    fn home_bookmark_restores_initial_view() {
        for mode in MODES {
            let mut m = builder().build(mode);
            let initial = m.look_at();
            wander(&mut m);
            let home = m.home_bookmark();
            m.jump_to_bookmark(&home).unwrap();
            assert_look_eq(m.look_at(), initial);
        }
    }

    #[test]
    fn orbit_home_matches_configured_positions() {
        let mut m = builder().build(Mode::Orbit);
        wander(&mut m);
        m.jump_to_bookmark(&m.home_bookmark()).unwrap();
        let look = m.look_at();
        assert!(look.eye.abs_diff_eq(Vec3::new(0.0, 3.0, 5.0), 1e-4));
        assert!(look.target.abs_diff_eq(Vec3::ZERO, 1e-6));
    }

    #[test]
    fn grab_without_update_leaves_view_unchanged() {
        for mode in MODES {
            for strafe in [false, true] {
                let mut m = builder().build(mode);
                let before = m.look_at();
                m.grab_begin(123.0, 456.0, strafe);
                assert!(m.is_grabbing());
                m.grab_end();
                assert!(!m.is_grabbing());
                assert_eq!(m.look_at(), before);
            }
        }
    }

    #[test]
    fn stray_grab_calls_are_no_ops() {
        for mode in MODES {
            let mut m = builder().build(mode);
            let before = m.look_at();
            m.grab_update(10.0, 10.0);
            m.grab_end();
            m.grab_end();
            assert_eq!(m.look_at(), before);
        }
    }

    #[test]
    fn jump_during_grab_is_not_undone() {
        for mode in MODES {
            let mut m = builder().build(mode);
            let home = m.home_bookmark();
            m.grab_begin(400.0, 200.0, false);
            m.grab_update(430.0, 180.0);
            m.jump_to_bookmark(&home).unwrap();
            let jumped = m.look_at();
            assert!(!m.is_grabbing());
            m.grab_update(480.0, 150.0);
            assert_eq!(m.look_at(), jumped);
        }
    }

    #[test]
    fn bookmarks_from_other_modes_are_rejected() {
        let mut orbit = builder().build(Mode::Orbit);
        let flight = builder().build(Mode::FreeFlight);
        let before = orbit.look_at();
        let err = orbit
            .jump_to_bookmark(&flight.current_bookmark())
            .unwrap_err();
        assert!(matches!(
            err,
            CamutilsError::BookmarkModeMismatch {
                expected: Mode::Orbit,
                found: Mode::FreeFlight,
            }
        ));
        assert_eq!(orbit.look_at(), before);
    }

    #[test]
    fn raycast_hits_ground_plane_analytically() {
        let m = Builder::new()
            .viewport(800, 600)
            .orbit_home_position(Vec3::new(0.0, 5.0, 5.0))
            .ground_plane([0.0, 1.0, 0.0, 0.0])
            .build(Mode::Orbit);
        let hit = m.raycast(400.0, 300.0).unwrap();
        assert!(hit.abs_diff_eq(Vec3::ZERO, 1e-4));

        let ray = m.ray(250.0, 120.0).unwrap();
        let hit = m.raycast(250.0, 120.0).unwrap();
        let t = -ray.origin.y / ray.direction.y;
        assert!(hit.abs_diff_eq(ray.at(t), 1e-3));
        assert!(hit.y.abs() < 1e-4);
    }

    #[test]
    fn raycast_misses_when_ray_is_parallel_to_ground() {
        let m = Builder::new()
            .viewport(800, 600)
            .target_position(Vec3::new(0.0, 1.0, 0.0))
            .orbit_home_position(Vec3::new(0.0, 1.0, 5.0))
            .ground_plane([0.0, 1.0, 0.0, 0.0])
            .build(Mode::Orbit);
        assert!(m.raycast(400.0, 300.0).is_none());
        // Above the horizon the ray climbs away from the ground.
        assert!(m.raycast(400.0, 500.0).is_none());
        // Below it, the ground is hit.
        assert!(m.raycast(400.0, 100.0).is_some());
    }

    #[test]
    fn zero_viewport_always_misses() {
        for mode in MODES {
            let mut m = builder().build(mode);
            m.set_viewport(0, 0);
            assert!(m.ray(0.0, 0.0).is_none());
            assert!(m.raycast(0.0, 0.0).is_none());
            assert!(m.raycast(400.0, 300.0).is_none());
            // Grabs and scrolls stay finite without a viewport.
            m.grab_begin(1.0, 1.0, true);
            m.grab_update(5.0, 5.0);
            m.scroll(1.0, 1.0, -1.0);
            let look = m.look_at();
            assert!(look.eye.is_finite() && look.up.is_finite());
        }
    }

    #[test]
    fn negative_delta_time_is_ignored() {
        let mut m = builder().build(Mode::FreeFlight);
        let before = m.look_at();
        m.key_down(Key::Forward);
        m.update(-1.0);
        m.update(f32::NAN);
        assert_eq!(m.look_at(), before);
    }

    #[test]
    fn keys_are_ignored_outside_free_flight() {
        let mut m = builder().build(Mode::Orbit);
        let before = m.look_at();
        m.key_down(Key::Forward);
        m.update(1.0);
        assert_eq!(m.look_at(), before);
        assert_eq!(m.flight_move_speed(), None);
    }
}
