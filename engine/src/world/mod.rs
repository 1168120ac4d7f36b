//! World Module
//!
//! The placement lattice and the world container the aim ray is traced against.
//!
//! The world is Z-up; one unit is one centimeter.

pub mod grid;
pub mod scene;

pub use grid::{DEFAULT_CELL_SIZE, GridConfig, snap_to_grid};
pub use scene::{
    ObjectId, ObjectKind, Scene, SpatialQuery, SpawnRequest, TraceHit, TraceResponse,
    WorldMutation, WorldObject,
};
