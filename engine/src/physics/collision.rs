//! Collision detection module
//!
//! Ray-AABB intersection and box overlap tests used by the scene's line
//! traces and by collision-safe spawning.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use building_blocks_engine::physics::collision::{ray_aabb_intersect, Aabb};
//! use glam::Vec3;
//!
//! let origin = Vec3::new(0.0, 0.0, -5.0);
//! let direction = Vec3::new(0.0, 0.0, 1.0);
//! let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
//!
//! if let Some(t) = ray_aabb_intersect(origin, direction, aabb.min, aabb.max) {
//!     let hit_point = origin + direction * t;
//!     println!("Hit at distance {}: {:?}", t, hit_point);
//! }
//! ```

use glam::Vec3;

/// Penetration depth below which two boxes count as touching, not overlapping.
pub const OVERLAP_TOLERANCE: f32 = 0.01;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners, ordering them per axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box with its minimum corner at `origin` spanning `extent` on each axis.
    pub fn from_origin(origin: Vec3, extent: Vec3) -> Self {
        Self::new(origin, origin + extent)
    }

    /// Box centered on `center` with the given half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Returns true when the boxes share volume deeper than [`OVERLAP_TOLERANCE`].
    ///
    /// Boxes whose faces merely touch (adjacent lattice cells) do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x - OVERLAP_TOLERANCE
            && self.max.x > other.min.x + OVERLAP_TOLERANCE
            && self.min.y < other.max.y - OVERLAP_TOLERANCE
            && self.max.y > other.min.y + OVERLAP_TOLERANCE
            && self.min.z < other.max.z - OVERLAP_TOLERANCE
            && self.max.z > other.min.z + OVERLAP_TOLERANCE
    }

    /// Returns true when `point` lies strictly inside the box, not on a face.
    pub fn encloses(&self, point: Vec3) -> bool {
        point.cmpgt(self.min).all() && point.cmplt(self.max).all()
    }
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// The slab method works by finding the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the AABB
/// at valid times (t_enter < t_exit and t_exit > 0), there is an intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0)
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if dir.abs() < 1e-10 {
            // Parallel to this slab: either always inside it or never.
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (lo - origin) * inv;
        let t2 = (hi - origin) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    // Check if there's a valid intersection
    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the AABB
            Some(t_max)
        }
    } else {
        None
    }
}

/// Computes the surface normal for a point on an AABB surface.
///
/// Determines which face of the AABB the point is on and returns the outward normal.
///
/// # Arguments
///
/// * `point` - Point on the AABB surface
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// Normalized outward normal vector
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(f32::EPSILON));
    let local = point - center;

    // Normalize to unit cube space
    let normalized = local / half_extents;

    // Find which face we're closest to (highest absolute normalized coordinate)
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hits_aabb_from_front() {
        let origin = Vec3::new(0.0, 0.0, -5.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let result = ray_aabb_intersect(origin, dir, aabb_min, aabb_max);
        assert!(result.is_some());
        let t = result.unwrap();
        assert!((t - 4.0).abs() < 0.001, "Expected t=4.0, got t={}", t);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let origin = Vec3::new(0.0, 5.0, -5.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let result = ray_aabb_intersect(origin, dir, aabb_min, aabb_max);
        assert!(result.is_none());
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let origin = Vec3::ZERO;
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let t = ray_aabb_intersect(origin, dir, aabb_min, aabb_max).unwrap();
        // Should hit the exit face at z=1
        assert!((t - 1.0).abs() < 0.001, "Expected t=1.0, got t={}", t);
    }

    #[test]
    fn test_ray_aabb_behind_origin() {
        let origin = Vec3::new(0.0, 0.0, 5.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let result = ray_aabb_intersect(origin, dir, aabb_min, aabb_max);
        assert!(result.is_none());
    }

    #[test]
    fn test_diagonal_ray_hits_top_face() {
        let origin = Vec3::new(0.0, 0.0, 10.0);
        let dir = Vec3::new(1.0, 0.0, -1.0).normalize();
        let aabb = Aabb::new(Vec3::new(0.0, -5.0, -10.0), Vec3::new(100.0, 5.0, 0.0));

        let t = ray_aabb_intersect(origin, dir, aabb.min, aabb.max).unwrap();
        let point = origin + dir * t;
        assert!((point.z).abs() < 0.001);
        assert!((point.x - 10.0).abs() < 0.001);
        assert_eq!(aabb_surface_normal(point, aabb.min, aabb.max), Vec3::Z);
    }

    #[test]
    fn test_surface_normal_x_face() {
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let normal = aabb_surface_normal(Vec3::new(1.0, 0.0, 0.0), aabb_min, aabb_max);
        assert_eq!(normal, Vec3::X);

        let normal = aabb_surface_normal(Vec3::new(-1.0, 0.0, 0.0), aabb_min, aabb_max);
        assert_eq!(normal, Vec3::NEG_X);
    }

    #[test]
    fn test_surface_normal_z_face_on_flat_slab() {
        // Wide, thin ground slab: the top face must win over the nearer-looking x axis.
        let aabb_min = Vec3::new(-1000.0, -1000.0, -100.0);
        let aabb_max = Vec3::new(1000.0, 1000.0, 0.0);

        let normal = aabb_surface_normal(Vec3::new(123.0, 47.0, 0.0), aabb_min, aabb_max);
        assert_eq!(normal, Vec3::Z);
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = Aabb::from_origin(Vec3::ZERO, Vec3::splat(100.0));
        let b = Aabb::from_origin(Vec3::new(100.0, 0.0, 0.0), Vec3::splat(100.0));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_shared_volume_overlaps() {
        let a = Aabb::from_origin(Vec3::ZERO, Vec3::splat(100.0));
        let b = Aabb::from_origin(Vec3::splat(50.0), Vec3::splat(100.0));
        assert!(a.overlaps(&b));

        let inner = Aabb::from_center(Vec3::splat(50.0), Vec3::splat(5.0));
        assert!(a.overlaps(&inner));
        assert!(inner.overlaps(&a));
    }

    #[test]
    fn test_aabb_new_orders_corners() {
        let aabb = Aabb::new(Vec3::new(5.0, -1.0, 3.0), Vec3::new(-5.0, 1.0, -3.0));
        assert_eq!(aabb.min, Vec3::new(-5.0, -1.0, -3.0));
        assert_eq!(aabb.max, Vec3::new(5.0, 1.0, 3.0));
        assert!(aabb.encloses(Vec3::new(4.0, 0.0, 2.0)));
        assert!(!aabb.encloses(Vec3::new(5.0, 0.0, 2.0)));
    }
}
