//! Builder Module
//!
//! Block building core: place/remove mode, the aim ray and the placement
//! policy that turns a hit into a spawn or destroy request.

pub mod mode;
pub mod placement;
pub mod raycast;

pub use mode::{BlockMode, BuilderState};
pub use placement::{
    PlacementOutcome, RemovalOutcome, place_block, placement_anchor, placement_target,
    remove_block,
};
pub use raycast::{cast_aim_ray, fmt_vec};
