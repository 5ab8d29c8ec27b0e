use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Free Flight", inline)]
#[serde(default)]
/// Free-flight mode parameters.
pub struct FlightOptions {
    /// Initial eye position.
    #[schemars(skip)]
    pub start_position: [f32; 3],
    /// Initial pitch in radians (positive looks up).
    #[schemars(skip)]
    pub start_pitch: f32,
    /// Initial yaw in radians about the up vector.
    #[schemars(skip)]
    pub start_yaw: f32,
    /// Top of the speed ladder, in world units per second.
    #[schemars(title = "Max Move Speed", range(min = 1.0, max = 100.0), extend("step" = 1.0))]
    pub max_move_speed: f32,
    /// Number of scroll steps between the slowest and fastest speed.
    #[schemars(title = "Speed Steps", range(min = 2, max = 200))]
    pub speed_steps: u32,
    /// Mouse-look sensitivity in radians per pixel (yaw, pitch).
    #[schemars(title = "Look Speed")]
    pub pan_speed: [f32; 2],
    /// Velocity damping; 0 stops instantly, higher values settle faster.
    #[schemars(title = "Move Damping", range(min = 0.0, max = 60.0), extend("step" = 0.5))]
    pub move_damping: f32,
}

impl Default for FlightOptions {
    fn default() -> Self {
        Self {
            start_position: [0.0; 3],
            start_pitch: 0.0,
            start_yaw: 0.0,
            max_move_speed: 10.0,
            speed_steps: 80,
            pan_speed: [0.01, 0.01],
            move_damping: 15.0,
        }
    }
}

impl FlightOptions {
    pub(super) fn fill_degenerate(&mut self) {
        let defaults = Self::default();
        if !(self.max_move_speed.is_finite() && self.max_move_speed > 0.0) {
            log::debug!(
                "flight max_move_speed {} invalid, using {}",
                self.max_move_speed,
                defaults.max_move_speed
            );
            self.max_move_speed = defaults.max_move_speed;
        } else if self.max_move_speed < 1.0 {
            // The ladder spans [1 / max, max]; below one it would invert.
            log::debug!(
                "flight max_move_speed {} below 1, using 1",
                self.max_move_speed
            );
            self.max_move_speed = 1.0;
        }
        if self.speed_steps == 0 {
            log::debug!(
                "flight speed_steps unset, using {}",
                defaults.speed_steps
            );
            self.speed_steps = defaults.speed_steps;
        }
    }
}
