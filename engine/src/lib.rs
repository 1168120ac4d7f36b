//! Building Blocks Engine Library
//!
//! Aim resolution and grid placement for a voxel building tool. The player
//! looks at something, and a command either places a lattice-aligned block
//! next to it or removes the block that was hit.
//!
//! # Modules
//!
//! - [`camera`] - Camera poses and aim ray queries
//! - [`input`] - Semantic commands and the command queue
//! - [`physics`] - Ray/AABB intersection and overlap tests
//! - [`player`] - Locomotion intent forwarded from commands
//! - [`world`] - Lattice snapping and the in-memory scene
//! - [`game`] - Builder mode, placement policy, diagnostics and dispatch
//!
//! # Example
//!
//! ```ignore
//! use building_blocks_engine::camera::CameraPose;
//! use building_blocks_engine::game::{BuilderConfig, BuilderController, LogSink};
//! use building_blocks_engine::input::Command;
//! use building_blocks_engine::physics::Aabb;
//! use building_blocks_engine::player::PlayerIntent;
//! use building_blocks_engine::world::Scene;
//! use glam::Vec3;
//!
//! let mut scene = Scene::new();
//! scene.add_static("Ground", Aabb::new(Vec3::new(-1000.0, -1000.0, -100.0), Vec3::new(1000.0, 1000.0, 0.0)));
//!
//! let mut controller = BuilderController::new(BuilderConfig::default(), LogSink);
//! let mut intent = PlayerIntent::new();
//! let camera = CameraPose::from_rotation(Vec3::new(0.0, 0.0, 300.0), 0.0, -45.0, 400.0);
//!
//! controller.dispatch(Command::PlaceBlock, &camera, &mut scene, &mut intent);
//! ```

pub mod camera;
pub mod input;
pub mod logging;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::{CameraPose, HitResult, RayQuery, cast_ray};
pub use input::{Command, CommandQueue, CommandSender};
pub use logging::init_logger;
pub use world::{GridConfig, Scene, snap_to_grid};
