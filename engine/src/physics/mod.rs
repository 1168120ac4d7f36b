//! Physics module
//!
//! Collision primitives for the building core. There is no rigid-body
//! simulation here; the only physics the core needs is answering "what does
//! this ray hit first" and "would this box overlap something".
//!
//! # Unit System
//!
//! **1 unit = 1 centimeter**, Z-up. A default block is 100 units on a side.
//!
//! # Submodules
//!
//! - [`collision`] - Ray-AABB intersection and box overlap

pub mod collision;

pub use collision::{Aabb, OVERLAP_TOLERANCE, aabb_surface_normal, ray_aabb_intersect};
