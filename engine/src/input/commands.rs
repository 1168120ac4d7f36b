//! Input Commands
//!
//! Semantic commands produced by the input-resolution layer. Device decoding
//! and key mapping happen upstream; by the time a command gets here it is
//! already debounced and means exactly one thing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// High-level player command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Movement axis: X strafes right, Y moves forward
    Move { axis: Vec2 },
    /// Look axis: X adds yaw, Y adds pitch
    Look { axis: Vec2 },
    /// Jump pressed (`true`) or released (`false`)
    Jump { pressed: bool },
    /// Place a block where the player is aiming
    PlaceBlock,
    /// Remove the block the player is aiming at
    RemoveBlock,
    /// Flip between place and remove mode
    ToggleBlockMode,
    /// Flip debug tracing on or off
    ToggleDebug,
}

impl Command {
    /// Edge-triggered commands fire once per press and carry no payload.
    pub fn is_edge_triggered(&self) -> bool {
        matches!(
            self,
            Command::PlaceBlock
                | Command::RemoveBlock
                | Command::ToggleBlockMode
                | Command::ToggleDebug
        )
    }

    /// Commands consumed by locomotion rather than the building core.
    pub fn is_locomotion(&self) -> bool {
        matches!(
            self,
            Command::Move { .. } | Command::Look { .. } | Command::Jump { .. }
        )
    }
}
