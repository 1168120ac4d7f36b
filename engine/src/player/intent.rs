//! Player Intent
//!
//! Accumulates locomotion input between frames. The building core forwards
//! move, look and jump commands here and never reads them back; the
//! character's movement component (outside this crate) consumes the intent
//! once per frame.
//!
//! # Usage
//!
//! ```rust,ignore
//! use building_blocks_engine::player::{Locomotion, PlayerIntent};
//! use glam::Vec2;
//!
//! let mut intent = PlayerIntent::new();
//! intent.add_movement_input(Vec2::new(0.0, 1.0));
//! let frame = intent.take();
//! let world_dir = frame.movement_direction(control_yaw);
//! ```

use glam::{Vec2, Vec3};

/// Receiver for locomotion commands.
pub trait Locomotion {
    /// Movement axis: X strafes right, Y moves forward.
    fn add_movement_input(&mut self, axis: Vec2);

    /// Look axis: X adds yaw, Y adds pitch.
    fn add_look_input(&mut self, axis: Vec2);

    fn set_jump_held(&mut self, held: bool);
}

/// Locomotion input accumulated since the last [`PlayerIntent::take`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerIntent {
    /// Summed movement axis
    pub movement: Vec2,
    /// Summed yaw input
    pub yaw_input: f32,
    /// Summed pitch input
    pub pitch_input: f32,
    /// Whether jump is currently held
    pub jump_held: bool,
}

impl PlayerIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated intent and clears the axes.
    ///
    /// Jump is a held state, so it survives the reset.
    pub fn take(&mut self) -> PlayerIntent {
        let frame = *self;
        self.movement = Vec2::ZERO;
        self.yaw_input = 0.0;
        self.pitch_input = 0.0;
        frame
    }

    /// World-space movement vector for a control yaw in degrees (Z-up).
    ///
    /// Only the yaw matters: looking up or down does not tilt movement.
    /// The result is not normalized; analog sticks keep their magnitude.
    pub fn movement_direction(&self, control_yaw_degrees: f32) -> Vec3 {
        let (sy, cy) = control_yaw_degrees.to_radians().sin_cos();
        let forward = Vec3::new(cy, sy, 0.0);
        let right = Vec3::new(-sy, cy, 0.0);
        forward * self.movement.y + right * self.movement.x
    }

    pub fn is_idle(&self) -> bool {
        self.movement == Vec2::ZERO
            && self.yaw_input == 0.0
            && self.pitch_input == 0.0
            && !self.jump_held
    }
}

impl Locomotion for PlayerIntent {
    fn add_movement_input(&mut self, axis: Vec2) {
        self.movement += axis;
    }

    fn add_look_input(&mut self, axis: Vec2) {
        self.yaw_input += axis.x;
        self.pitch_input += axis.y;
    }

    fn set_jump_held(&mut self, held: bool) {
        self.jump_held = held;
    }
}
