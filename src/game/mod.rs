//! Game Module
//!
//! Building gameplay on top of the engine: builder mode and placement,
//! configuration, diagnostics and command dispatch.

pub mod builder;
pub mod config;
pub mod controller;
pub mod diagnostics;

pub use builder::{
    BlockMode, BuilderState, PlacementOutcome, RemovalOutcome, cast_aim_ray, place_block,
    placement_anchor, placement_target, remove_block,
};
pub use config::{BuilderConfig, ConfigError, DEFAULT_BLOCK_CLASS};
pub use controller::{BuilderController, CommandOutcome};
pub use diagnostics::{
    DebugColor, DebugDraw, DebugPrimitive, DiagnosticSink, LogSink, RecordingSink,
};
