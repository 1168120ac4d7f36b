//! Player Module
//!
//! The locomotion seam. Movement physics live outside this crate; this
//! module only defines where move/look/jump commands go.
//!
//! # Components
//!
//! - [`Locomotion`] - Receiver trait for locomotion commands
//! - [`PlayerIntent`] - Per-frame accumulator implementing it

pub mod intent;

pub use intent::{Locomotion, PlayerIntent};
