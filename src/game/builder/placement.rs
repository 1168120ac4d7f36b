//! Block Placement
//!
//! Mode-gated place and remove handlers.
//!
//! Both start from a fresh aim query and silently do nothing when a
//! precondition fails. The returned outcome reports what happened so the
//! caller can log it; it is never treated as an error.

use glam::Vec3;

use crate::camera::{CameraPose, HitResult};
use crate::game::config::BuilderConfig;
use crate::game::diagnostics::DebugDraw;
use crate::world::{ObjectId, SpatialQuery, SpawnRequest, WorldMutation};

use super::mode::BlockMode;
use super::raycast::{cast_aim_ray, fmt_vec};

/// Result of a place request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementOutcome {
    /// A block now occupies the snapped cell
    Spawned { id: ObjectId, location: Vec3 },
    /// The snapped cell was already occupied
    Rejected { location: Vec3 },
    /// The aim ray hit nothing
    NoTarget,
    /// Builder is in remove mode
    WrongMode,
}

impl PlacementOutcome {
    pub fn spawned(&self) -> Option<ObjectId> {
        match self {
            PlacementOutcome::Spawned { id, .. } => Some(*id),
            _ => None,
        }
    }
}

/// Result of a remove request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalOutcome {
    Destroyed(ObjectId),
    /// The aim ray hit nothing
    NoTarget,
    /// The struck object is gone or was never reported
    InvalidTarget,
    /// The struck object is not a block of the configured class
    WrongType,
    /// Builder is in place mode
    WrongMode,
}

impl RemovalOutcome {
    pub fn destroyed(&self) -> Option<ObjectId> {
        match self {
            RemovalOutcome::Destroyed(id) => Some(*id),
            _ => None,
        }
    }
}

/// Pre-snap anchor: the impact point pushed out along the normal, then
/// pulled back by `inset` on every axis.
///
/// Blocks pivot at their minimum corner, so a half-cell inset puts the
/// anchor inside the cell next to the struck face.
pub fn placement_anchor(location: Vec3, normal: Vec3, inset: f32) -> Vec3 {
    location + normal - Vec3::splat(inset)
}

/// Snapped spawn location for a hit.
pub fn placement_target(hit: &HitResult, config: &BuilderConfig) -> Vec3 {
    config
        .grid()
        .snap(placement_anchor(hit.location, hit.normal, config.anchor_inset))
}

/// Place a block next to whatever the player is aiming at.
///
/// # Arguments
/// * `mode` - Current builder mode; anything but `Place` is a no-op
/// * `world` - World to query and spawn into
/// * `camera` - This frame's camera pose
/// * `config` - Lattice, inset and block class
/// * `owner` - Object recorded as the spawn owner
/// * `debug` - Diagnostic writer
pub fn place_block<W>(
    mode: BlockMode,
    world: &mut W,
    camera: &CameraPose,
    config: &BuilderConfig,
    owner: Option<ObjectId>,
    debug: &mut DebugDraw<'_>,
) -> PlacementOutcome
where
    W: SpatialQuery + WorldMutation + ?Sized,
{
    if mode != BlockMode::Place {
        return PlacementOutcome::WrongMode;
    }

    let hit = cast_aim_ray(&*world, camera, config.trace_extension, debug);
    if !hit.is_hit() {
        return PlacementOutcome::NoTarget;
    }

    let anchor = placement_anchor(hit.location, hit.normal, config.anchor_inset);
    let location = config.grid().snap(anchor);
    debug.message(|| format!("Pre-snap {}", fmt_vec(anchor)));
    debug.message(|| format!("Post-snap {}", fmt_vec(location)));

    let request = SpawnRequest {
        class: config.block_class.clone(),
        location,
        extent: config.block_extent_vec(),
        owner,
    };

    match world.spawn(request) {
        Some(id) => {
            log::debug!("placed {} {id} at {location}", config.block_class);
            PlacementOutcome::Spawned { id, location }
        }
        None => PlacementOutcome::Rejected { location },
    }
}

/// Remove the block the player is aiming at.
///
/// Only objects tagged with `config.block_class` are removed; terrain and
/// other geometry are left alone.
pub fn remove_block<W>(
    mode: BlockMode,
    world: &mut W,
    camera: &CameraPose,
    config: &BuilderConfig,
    debug: &mut DebugDraw<'_>,
) -> RemovalOutcome
where
    W: SpatialQuery + WorldMutation + ?Sized,
{
    if mode != BlockMode::Remove {
        return RemovalOutcome::WrongMode;
    }

    let hit = cast_aim_ray(&*world, camera, config.trace_extension, debug);
    if !hit.is_hit() {
        return RemovalOutcome::NoTarget;
    }

    let Some(id) = hit.object else {
        return RemovalOutcome::InvalidTarget;
    };
    let Some(target) = world.object(id) else {
        return RemovalOutcome::InvalidTarget;
    };
    if !target.kind.is_block_of(&config.block_class) {
        return RemovalOutcome::WrongType;
    }

    if world.destroy(id) {
        log::debug!("removed {} {id}", config.block_class);
        RemovalOutcome::Destroyed(id)
    } else {
        RemovalOutcome::InvalidTarget
    }
}
