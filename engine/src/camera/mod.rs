//! Camera Module
//!
//! Camera pose sampling and aim raycasting.
//! This module does not simulate the camera boom; it only consumes the pose
//! the boom produced this frame.

pub mod raycast;

pub use raycast::{
    CameraPose, DEFAULT_ARM_LENGTH, DEFAULT_TRACE_EXTENSION, HitResult, RayQuery, cast_ray,
    rotation_to_forward,
};
