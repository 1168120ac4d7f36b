//! Scene Module
//!
//! The world container: every block and every piece of static geometry the
//! aim ray can strike. The building core never touches a `Scene` directly;
//! it talks to the two capabilities below so it can run against any world.
//!
//! - [`SpatialQuery`] answers line traces and object lookups.
//! - [`WorldMutation`] applies spawn and destroy requests.
//!
//! Mutations are applied immediately and atomically, so the next trace
//! always observes a fully applied world.

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec3;

use crate::physics::{Aabb, aabb_surface_normal, ray_aabb_intersect};

/// Stable identity of a world object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Type tag carried by every world object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    /// A spawnable block of the named class
    Block { class: String },
    /// Terrain, walls, props and anything else that is not a block
    Static,
    /// The player's own pawn
    Pawn,
}

impl ObjectKind {
    pub fn block(class: impl Into<String>) -> Self {
        ObjectKind::Block {
            class: class.into(),
        }
    }

    /// Returns true when this is a block of exactly `class`.
    pub fn is_block_of(&self, class: &str) -> bool {
        matches!(self, ObjectKind::Block { class: c } if c == class)
    }
}

/// How an object reacts to aim traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceResponse {
    /// Stops the trace; the object can be aimed at
    #[default]
    Block,
    /// The trace passes through; the object still occupies space
    Ignore,
}

/// An object living in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    /// Spawn/pivot location
    pub location: Vec3,
    pub bounds: Aabb,
    pub response: TraceResponse,
    /// Object that requested the spawn, if any
    pub owner: Option<ObjectId>,
}

/// Nearest blocking hit returned by a line trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    /// World-space impact point
    pub location: Vec3,
    /// Outward normal of the struck face
    pub normal: Vec3,
    pub object: ObjectId,
    /// Distance from trace start to impact
    pub distance: f32,
}

/// A request to instantiate a block.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest {
    /// Block class tag stamped on the new object
    pub class: String,
    /// Pivot location; the block occupies `[location, location + extent]`
    pub location: Vec3,
    pub extent: Vec3,
    pub owner: Option<ObjectId>,
}

impl SpawnRequest {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_origin(self.location, self.extent)
    }
}

/// Read-only collision queries against the world.
pub trait SpatialQuery {
    /// Nearest blocking object along the segment `start..end`.
    ///
    /// Only front faces count: an object that encloses `start` is not reported.
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceHit>;

    /// Looks an object up by id. `None` once it has been destroyed.
    fn object(&self, id: ObjectId) -> Option<&WorldObject>;

    /// Returns true if any object's bounds overlap `bounds`.
    fn overlaps_any(&self, bounds: &Aabb) -> bool;
}

/// World mutation requests issued by the building core.
pub trait WorldMutation {
    /// Instantiates a block unless its volume overlaps existing geometry.
    /// Returns `None` when the spawn is aborted.
    fn spawn(&mut self, request: SpawnRequest) -> Option<ObjectId>;

    /// Removes an object. Returns false if it did not exist.
    fn destroy(&mut self, id: ObjectId) -> bool;
}

/// In-memory world container.
///
/// Objects are kept in id order so traces that tie on distance resolve the
/// same way every run.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: BTreeMap<ObjectId, WorldObject>,
    next_id: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> ObjectId {
        self.next_id += 1;
        ObjectId(self.next_id)
    }

    /// Adds static geometry that blocks aim traces.
    pub fn add_static(&mut self, name: impl Into<String>, bounds: Aabb) -> ObjectId {
        self.add_object(name, ObjectKind::Static, bounds, TraceResponse::Block)
    }

    /// Adds an arbitrary object without any overlap check.
    pub fn add_object(
        &mut self,
        name: impl Into<String>,
        kind: ObjectKind,
        bounds: Aabb,
        response: TraceResponse,
    ) -> ObjectId {
        let id = self.allocate_id();
        self.objects.insert(
            id,
            WorldObject {
                id,
                name: name.into(),
                kind,
                location: bounds.min,
                bounds,
                response,
                owner: None,
            },
        );
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// All blocks of the given class.
    pub fn blocks_of<'a>(&'a self, class: &'a str) -> impl Iterator<Item = &'a WorldObject> + 'a {
        self.objects.values().filter(move |o| o.kind.is_block_of(class))
    }

    pub fn block_count(&self) -> usize {
        self.objects
            .values()
            .filter(|o| matches!(o.kind, ObjectKind::Block { .. }))
            .count()
    }
}

impl SpatialQuery for Scene {
    /// Brute-force over every object; fine for hand-built scenes.
    fn line_trace(&self, start: Vec3, end: Vec3) -> Option<TraceHit> {
        let segment = end - start;
        let max_dist = segment.length();
        if max_dist <= f32::EPSILON {
            return None;
        }
        let direction = segment / max_dist;

        let mut closest: Option<TraceHit> = None;

        for object in self.objects.values() {
            if object.response == TraceResponse::Ignore || object.bounds.encloses(start) {
                continue;
            }
            let Aabb { min, max } = object.bounds;
            if let Some(t) = ray_aabb_intersect(start, direction, min, max)
                && closest.map_or(t <= max_dist, |c| t < c.distance)
            {
                let location = start + direction * t;
                closest = Some(TraceHit {
                    location,
                    normal: aabb_surface_normal(location, min, max),
                    object: object.id,
                    distance: t,
                });
            }
        }

        closest
    }

    fn object(&self, id: ObjectId) -> Option<&WorldObject> {
        self.objects.get(&id)
    }

    fn overlaps_any(&self, bounds: &Aabb) -> bool {
        self.objects.values().any(|o| o.bounds.overlaps(bounds))
    }
}

impl WorldMutation for Scene {
    fn spawn(&mut self, request: SpawnRequest) -> Option<ObjectId> {
        let bounds = request.bounds();
        if self.overlaps_any(&bounds) {
            log::debug!(
                "spawn of {} at {} rejected: volume occupied",
                request.class,
                request.location
            );
            return None;
        }

        let id = self.allocate_id();
        let name = format!("{}_{}", request.class, id.0);
        self.objects.insert(
            id,
            WorldObject {
                id,
                name,
                kind: ObjectKind::Block {
                    class: request.class,
                },
                location: request.location,
                bounds,
                response: TraceResponse::Block,
                owner: request.owner,
            },
        );
        Some(id)
    }

    fn destroy(&mut self, id: ObjectId) -> bool {
        self.objects.remove(&id).is_some()
    }
}
