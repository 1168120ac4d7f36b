//! Raycast Module
//!
//! Builds aim rays from the follow camera and resolves them against the
//! world.
//!
//! The camera sits at the end of a boom behind the character, so an aim ray
//! has to reach past the boom before it can touch anything in front of the
//! player. Its length is the boom length plus a fixed extension.

use glam::Vec3;

use crate::world::{ObjectId, SpatialQuery};

/// Default boom length between character and follow camera.
pub const DEFAULT_ARM_LENGTH: f32 = 400.0;

/// Default distance an aim ray reaches beyond the boom.
pub const DEFAULT_TRACE_EXTENSION: f32 = 250.0;

/// Camera pose sampled for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// World position of the follow camera
    pub position: Vec3,
    /// Unit view direction
    pub forward: Vec3,
    /// Boom length between the character and the camera
    pub arm_length: f32,
}

impl CameraPose {
    /// Creates a pose, normalizing `forward`.
    pub fn new(position: Vec3, forward: Vec3, arm_length: f32) -> Self {
        Self {
            position,
            forward: forward.normalize_or_zero(),
            arm_length,
        }
    }

    /// Creates a pose from a control rotation in degrees.
    ///
    /// Yaw turns around +Z starting from +X; positive pitch looks up.
    pub fn from_rotation(position: Vec3, yaw_degrees: f32, pitch_degrees: f32, arm_length: f32) -> Self {
        Self {
            position,
            forward: rotation_to_forward(yaw_degrees, pitch_degrees),
            arm_length,
        }
    }
}

/// Converts a yaw/pitch pair in degrees to a unit forward vector (Z-up).
pub fn rotation_to_forward(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let (sy, cy) = yaw_degrees.to_radians().sin_cos();
    let (sp, cp) = pitch_degrees.to_radians().sin_cos();
    Vec3::new(cp * cy, cp * sy, sp)
}

/// A single ray to trace. Built fresh for every query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayQuery {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
    /// Maximum trace distance (>= 0)
    pub max_distance: f32,
}

impl RayQuery {
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            max_distance: max_distance.max(0.0),
        }
    }

    /// Aim ray from the camera: length is the boom length plus `extra_distance`.
    pub fn from_camera(camera: &CameraPose, extra_distance: f32) -> Self {
        Self::new(
            camera.position,
            camera.forward,
            camera.arm_length + extra_distance,
        )
    }

    /// End point of the ray segment.
    pub fn end(&self) -> Vec3 {
        self.origin + self.direction * self.max_distance
    }
}

/// Result of one aim query.
///
/// When `hit` is false the other fields are left at their defaults and must
/// not be read as meaningful.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitResult {
    /// Whether the ray struck anything
    pub hit: bool,
    /// World-space point of impact
    pub location: Vec3,
    /// Surface normal at the impact (zero on a miss)
    pub normal: Vec3,
    /// The struck object
    pub object: Option<ObjectId>,
    /// Distance from the ray origin to the impact
    pub distance: f32,
}

impl HitResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            location: Vec3::ZERO,
            normal: Vec3::ZERO,
            object: None,
            distance: 0.0,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

impl Default for HitResult {
    fn default() -> Self {
        Self::miss()
    }
}

/// Traces `ray` against the world and returns the nearest hit.
///
/// Stateless: the same world and ray always give the same result.
pub fn cast_ray<W: SpatialQuery + ?Sized>(world: &W, ray: &RayQuery) -> HitResult {
    if ray.max_distance <= 0.0 || ray.direction == Vec3::ZERO {
        return HitResult::miss();
    }

    match world.line_trace(ray.origin, ray.end()) {
        Some(trace) => HitResult {
            hit: true,
            location: trace.location,
            normal: trace.normal,
            object: Some(trace.object),
            distance: trace.distance,
        },
        None => HitResult::miss(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Aabb;
    use crate::world::Scene;

    fn ground_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add_static(
            "Ground",
            Aabb::new(Vec3::new(-1000.0, -1000.0, -100.0), Vec3::new(1000.0, 1000.0, 0.0)),
        );
        scene
    }

    #[test]
    fn test_rotation_to_forward_is_normalized() {
        for yaw in [0.0, 45.0, 90.0, 180.0, -135.0] {
            for pitch in [-89.0, -30.0, 0.0, 30.0, 89.0] {
                let forward = rotation_to_forward(yaw, pitch);
                assert!(
                    (forward.length() - 1.0).abs() < 0.001,
                    "forward should be unit length, got {}",
                    forward.length()
                );
            }
        }
    }

    #[test]
    fn test_rotation_axes() {
        assert!((rotation_to_forward(0.0, 0.0) - Vec3::X).length() < 0.001);
        assert!((rotation_to_forward(90.0, 0.0) - Vec3::Y).length() < 0.001);
        assert!((rotation_to_forward(0.0, -90.0) - Vec3::NEG_Z).length() < 0.001);
    }

    #[test]
    fn test_ray_length_includes_arm() {
        let camera = CameraPose::new(Vec3::ZERO, Vec3::X, DEFAULT_ARM_LENGTH);
        let ray = RayQuery::from_camera(&camera, DEFAULT_TRACE_EXTENSION);
        assert_eq!(ray.max_distance, 650.0);
        assert_eq!(ray.end(), Vec3::new(650.0, 0.0, 0.0));
    }

    #[test]
    fn test_cast_ray_hit() {
        let scene = ground_scene();
        let camera = CameraPose::new(Vec3::new(123.0, 47.0, 500.0), Vec3::NEG_Z, 400.0);
        let result = cast_ray(&scene, &RayQuery::from_camera(&camera, 250.0));

        assert!(result.is_hit());
        assert_eq!(result.location, Vec3::new(123.0, 47.0, 0.0));
        assert_eq!(result.normal, Vec3::Z);
        assert!(result.object.is_some());
    }

    #[test]
    fn test_cast_ray_out_of_reach_misses() {
        let scene = ground_scene();
        // 700 units above the ground with 650 units of reach.
        let camera = CameraPose::new(Vec3::new(0.0, 0.0, 700.0), Vec3::NEG_Z, 400.0);
        let result = cast_ray(&scene, &RayQuery::from_camera(&camera, 250.0));

        assert!(!result.is_hit());
        assert_eq!(result, HitResult::miss());
    }

    #[test]
    fn test_cast_ray_is_repeatable() {
        let scene = ground_scene();
        let camera = CameraPose::from_rotation(Vec3::new(0.0, 0.0, 300.0), 30.0, -45.0, 400.0);
        let ray = RayQuery::from_camera(&camera, 250.0);
        assert_eq!(cast_ray(&scene, &ray), cast_ray(&scene, &ray));
    }

    #[test]
    fn test_zero_length_ray_misses() {
        let scene = ground_scene();
        let ray = RayQuery::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, 0.0);
        assert!(!cast_ray(&scene, &ray).is_hit());
    }
}
