//! Free-flight navigation: grab to look around, hold keys to move, scroll
//! to pick a speed from the speed ladder.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Quat, Vec3};

use super::core::Rig;
use super::Key;
use crate::bookmark::FlightBookmark;

const MAX_PITCH: f32 = FRAC_PI_2 - 0.001;

#[derive(Debug, Clone, Copy)]
struct LookAnchor {
    x: f32,
    y: f32,
    pitch: f32,
    yaw: f32,
}

#[derive(Debug, Clone, Copy)]
enum Grab {
    Idle,
    Looking(LookAnchor),
}

#[derive(Debug)]
pub(crate) struct FlightState {
    /// Rotates the +Y-up local frame onto the configured up vector.
    frame: Quat,
    pitch: f32,
    yaw: f32,
    velocity: Vec3,
    held: [bool; Key::COUNT],
    /// Position on the speed ladder, in `[-steps / 2, steps / 2]`.
    wheel: f32,
    move_speed: f32,
    grab: Grab,
}

impl FlightState {
    pub(crate) fn new(rig: &mut Rig) -> Self {
        let mut state = Self {
            frame: Quat::from_rotation_arc(Vec3::Y, rig.up),
            pitch: 0.0,
            yaw: 0.0,
            velocity: Vec3::ZERO,
            held: [false; Key::COUNT],
            wheel: 0.0,
            move_speed: 1.0,
            grab: Grab::Idle,
        };
        let home = state.home_bookmark(rig);
        state.jump(rig, &home);
        state
    }

    pub(crate) fn is_grabbing(&self) -> bool {
        matches!(self.grab, Grab::Looking(_))
    }

    pub(crate) fn move_speed(&self) -> f32 {
        self.move_speed
    }

    fn orientation(&self) -> Quat {
        self.frame
            * Quat::from_rotation_y(self.yaw)
            * Quat::from_rotation_x(self.pitch)
    }

    fn aim(&self, rig: &mut Rig) {
        rig.target = rig.eye + self.orientation() * Vec3::NEG_Z;
    }

    pub(crate) fn home_bookmark(&self, rig: &Rig) -> FlightBookmark {
        let flight = &rig.config.flight;
        FlightBookmark {
            position: Vec3::from_array(flight.start_position),
            pitch: flight.start_pitch,
            yaw: flight.start_yaw,
        }
    }

    pub(crate) fn current_bookmark(&self, rig: &Rig) -> FlightBookmark {
        FlightBookmark {
            position: rig.eye,
            pitch: self.pitch,
            yaw: self.yaw,
        }
    }

    pub(crate) fn jump(&mut self, rig: &mut Rig, bookmark: &FlightBookmark) {
        rig.eye = bookmark.position;
        self.pitch = bookmark.pitch.clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw = bookmark.yaw;
        self.velocity = Vec3::ZERO;
        self.aim(rig);
    }

    pub(crate) fn grab_begin(&mut self, x: f32, y: f32) {
        self.grab = Grab::Looking(LookAnchor {
            x,
            y,
            pitch: self.pitch,
            yaw: self.yaw,
        });
        log::trace!("flight look grab at ({x}, {y})");
    }

    pub(crate) fn grab_update(&mut self, rig: &mut Rig, x: f32, y: f32) {
        let Grab::Looking(anchor) = self.grab else {
            return;
        };
        let [yaw_speed, pitch_speed] = rig.config.flight.pan_speed;
        self.pitch = (anchor.pitch - (anchor.y - y) * pitch_speed)
            .clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw = (anchor.yaw + (anchor.x - x) * yaw_speed).rem_euclid(TAU);
        self.aim(rig);
    }

    pub(crate) fn grab_end(&mut self) {
        self.grab = Grab::Idle;
    }

    pub(crate) fn set_key(&mut self, key: Key, down: bool) {
        self.held[key.index()] = down;
    }

    fn axis(&self, positive: Key, negative: Key) -> f32 {
        f32::from(u8::from(self.held[positive.index()]))
            - f32::from(u8::from(self.held[negative.index()]))
    }

    /// Step along the speed ladder; each unit of `delta` is one step.
    pub(crate) fn scroll(&mut self, rig: &Rig, delta: f32) {
        let flight = &rig.config.flight;
        let half_steps = flight.speed_steps as f32 / 2.0;
        self.wheel = (self.wheel + delta).clamp(-half_steps, half_steps);
        self.move_speed = flight.max_move_speed.powf(self.wheel / half_steps);
    }

    pub(crate) fn update(&mut self, rig: &mut Rig, delta_time: f32) {
        let local = Vec3::new(
            self.axis(Key::Right, Key::Left),
            0.0,
            self.axis(Key::Backward, Key::Forward),
        );
        let lift = self.axis(Key::Up, Key::Down);
        let force =
            (self.orientation() * local + rig.up * lift) * self.move_speed;

        let damping = rig.config.flight.move_damping;
        if damping == 0.0 {
            self.velocity = force;
        } else {
            // Damping pulls the velocity toward the key force; the blend is
            // capped so large steps settle instead of overshooting.
            let blend = (damping * delta_time).min(1.0);
            self.velocity += (force - self.velocity) * blend;
        }

        let step = self.velocity * delta_time;
        rig.eye += step;
        rig.target += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmark::Bookmark;
    use crate::builder::Builder;
    use crate::manipulator::Manipulator;
    use crate::options::Mode;

    fn flight(damping: f32) -> Manipulator {
        Builder::new()
            .viewport(800, 600)
            .flight_start_position(Vec3::new(0.0, 2.0, 10.0))
            .flight_move_damping(damping)
            .build(Mode::FreeFlight)
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let m = flight(0.0);
        let look = m.look_at();
        assert_eq!(look.eye, Vec3::new(0.0, 2.0, 10.0));
        assert!((look.target - look.eye).abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(look.up.abs_diff_eq(Vec3::Y, 1e-6));
        assert_eq!(m.flight_move_speed(), Some(1.0));
    }

    #[test]
    fn undamped_forward_moves_at_move_speed() {
        let mut m = flight(0.0);
        m.key_down(Key::Forward);
        m.update(0.5);
        let eye = m.look_at().eye;
        assert!(eye.abs_diff_eq(Vec3::new(0.0, 2.0, 9.5), 1e-5));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut m = flight(0.0);
        m.key_down(Key::Forward);
        m.key_down(Key::Backward);
        m.key_down(Key::Up);
        m.key_down(Key::Down);
        m.update(1.0);
        assert_eq!(m.look_at().eye, Vec3::new(0.0, 2.0, 10.0));
    }

    #[test]
    fn damping_accelerates_and_coasts() {
        let mut m = flight(15.0);
        m.key_down(Key::Right);
        m.update(0.01);
        let first = m.look_at().eye.x;
        assert!(first > 0.0 && first < 0.01);
        for _ in 0..100 {
            m.update(0.01);
        }
        m.key_up(Key::Right);
        let released = m.look_at().eye.x;
        m.update(0.01);
        // Still coasting right after release.
        assert!(m.look_at().eye.x > released);
        for _ in 0..200 {
            m.update(0.01);
        }
        let settled = m.look_at().eye.x;
        m.update(0.01);
        assert!((m.look_at().eye.x - settled).abs() < 1e-5);
    }

    #[test]
    fn huge_time_steps_do_not_overshoot() {
        let mut m = flight(15.0);
        m.key_down(Key::Up);
        m.update(10.0);
        // Velocity saturates at the key force: 1 unit/s for 10 s.
        assert!((m.look_at().eye.y - 12.0).abs() < 1e-4);
    }

    #[test]
    fn speed_ladder_saturates_at_both_ends() {
        let mut m = flight(0.0);
        m.scroll(0.0, 0.0, -1_000.0);
        assert!((m.flight_move_speed().unwrap() - 0.1).abs() < 1e-6);
        for _ in 0..80 {
            m.scroll(0.0, 0.0, 1.0);
        }
        assert_eq!(m.flight_move_speed(), Some(10.0));
        for _ in 0..10 {
            m.scroll(0.0, 0.0, 1.0);
        }
        assert_eq!(m.flight_move_speed(), Some(10.0));
    }

    #[test]
    fn invalid_max_speed_falls_back_to_default() {
        for max in [-5.0, f32::NAN, f32::INFINITY] {
            let mut m = Builder::new()
                .viewport(800, 600)
                .flight_max_move_speed(max)
                .flight_move_damping(0.0)
                .build(Mode::FreeFlight);
            assert_eq!(m.config().flight.max_move_speed, 10.0);
            m.scroll(0.0, 0.0, 3.0);
            m.key_down(Key::Forward);
            m.update(0.1);
            assert!(m.flight_move_speed().unwrap().is_finite());
            assert!(m.look_at().eye.is_finite());
        }
    }

    #[test]
    fn speed_never_exceeds_max_below_one() {
        let mut m = Builder::new()
            .viewport(800, 600)
            .flight_max_move_speed(0.5)
            .build(Mode::FreeFlight);
        let max = m.config().flight.max_move_speed;
        assert_eq!(max, 1.0);
        m.scroll(0.0, 0.0, -1_000.0);
        assert!(m.flight_move_speed().unwrap() <= max);
        m.scroll(0.0, 0.0, 2_000.0);
        assert!(m.flight_move_speed().unwrap() <= max);
    }

    #[test]
    fn look_drag_turns_and_clamps_pitch() {
        let mut m = flight(0.0);
        m.grab_begin(400.0, 300.0, false);
        // Dragging right by 157 pixels turns ~90° to the right.
        m.grab_update(557.08, 300.0);
        let look = m.look_at();
        assert!((look.target - look.eye).abs_diff_eq(Vec3::X, 1e-3));

        m.grab_update(400.0, 100_000.0);
        let gaze = m.look_at().target - m.look_at().eye;
        assert!(gaze.y > 0.99 && gaze.y < 1.0);
        m.grab_end();

        let Bookmark::FreeFlight(bookmark) = m.current_bookmark() else {
            panic!("expected flight bookmark");
        };
        assert!((bookmark.pitch - MAX_PITCH).abs() < 1e-6);
    }

    #[test]
    fn grab_update_without_grab_is_ignored() {
        let mut m = flight(0.0);
        let before = m.look_at();
        m.grab_update(0.0, 0.0);
        assert_eq!(m.look_at(), before);
    }
}
