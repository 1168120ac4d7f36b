//! Block Builder - Headless Building Demo
//!
//! Runs a scripted sequence of building commands against a flat ground slab
//! and reports what was placed and removed.
//!
//! Run with: `cargo run --bin block_builder [config.json] [script.json]`
//!
//! The script is a JSON array of frames, each a command plus the camera
//! pose for that frame:
//!
//! ```json
//! [
//!   { "command": { "type": "toggle_debug" }, "camera": { "position": [0, 0, 500], "yaw": 0, "pitch": -90 } },
//!   { "command": { "type": "place_block" }, "camera": { "position": [123, 47, 500], "yaw": 0, "pitch": -90 } }
//! ]
//! ```

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::Deserialize;

use building_blocks_engine::game::{BuilderConfig, BuilderController, CommandOutcome, LogSink};
use building_blocks_engine::init_logger;
use building_blocks_engine::input::{Command, CommandQueue};
use building_blocks_engine::physics::Aabb;
use building_blocks_engine::player::PlayerIntent;
use building_blocks_engine::world::{ObjectKind, Scene, TraceResponse};

/// Half width of the ground slab.
const GROUND_HALF_SIZE: f32 = 5000.0;
/// Ground slab thickness below z = 0.
const GROUND_DEPTH: f32 = 100.0;

#[derive(Debug, Deserialize)]
struct ScriptCamera {
    position: Vec3,
    /// Degrees around +Z from +X
    yaw: f32,
    /// Degrees, positive looks up
    pitch: f32,
}

#[derive(Debug, Deserialize)]
struct ScriptStep {
    command: Command,
    camera: ScriptCamera,
}

fn main() {
    init_logger();

    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(1) {
        Some(path) => match BuilderConfig::load(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("failed to load config {path}: {e}");
                std::process::exit(1);
            }
        },
        None => BuilderConfig::default(),
    };

    let script = match args.get(2) {
        Some(path) => match load_script(Path::new(path)) {
            Ok(script) => script,
            Err(e) => {
                log::error!("failed to load script {path}: {e}");
                std::process::exit(1);
            }
        },
        None => default_script(),
    };

    log::info!(
        "block builder: cell {} inset {} reach {}+{}, {} frames",
        config.cell_size,
        config.anchor_inset,
        config.arm_length,
        config.trace_extension,
        script.len()
    );

    let mut scene = Scene::new();
    scene.add_static(
        "Ground",
        Aabb::new(
            Vec3::new(-GROUND_HALF_SIZE, -GROUND_HALF_SIZE, -GROUND_DEPTH),
            Vec3::new(GROUND_HALF_SIZE, GROUND_HALF_SIZE, 0.0),
        ),
    );
    let pawn = scene.add_object(
        "Pawn",
        ObjectKind::Pawn,
        Aabb::from_center(Vec3::new(0.0, 0.0, 90.0), Vec3::new(40.0, 40.0, 90.0)),
        TraceResponse::Ignore,
    );

    match config.to_json() {
        Ok(json) => log::debug!("effective config:\n{json}"),
        Err(e) => log::warn!("could not serialize config: {e}"),
    }

    let mut controller = BuilderController::new(config, LogSink).with_owner(pawn);
    let mut intent = PlayerIntent::new();
    let queue = CommandQueue::new();
    let sender = queue.sender();

    let mut placed = 0usize;
    let mut removed = 0usize;

    for (frame, step) in script.into_iter().enumerate() {
        let camera = controller.config().camera_pose(
            step.camera.position,
            step.camera.yaw,
            step.camera.pitch,
        );
        sender.send(step.command);

        for outcome in controller.process_queue(&queue, &camera, &mut scene, &mut intent) {
            log::debug!("frame {frame}: {outcome:?}");
            match outcome {
                CommandOutcome::Placed(p) if p.spawned().is_some() => placed += 1,
                CommandOutcome::Removed(r) if r.destroyed().is_some() => removed += 1,
                _ => {}
            }
        }

        let frame_intent = intent.take();
        if !frame_intent.is_idle() && step.command.is_locomotion() {
            log::debug!(
                "frame {frame}: move {} look ({}, {})",
                frame_intent.movement_direction(step.camera.yaw),
                frame_intent.yaw_input,
                frame_intent.pitch_input
            );
        }
    }

    let class = controller.config().block_class.clone();
    log::info!(
        "done: {placed} placed, {removed} removed, {} {class} blocks in the scene",
        scene.blocks_of(&class).count()
    );
    for block in scene.blocks_of(&class) {
        log::info!("  {} at {}", block.name, block.location);
    }
}

fn load_script(path: &Path) -> Result<Vec<ScriptStep>, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Build a short wall, stack on it, then knock one block out.
fn default_script() -> Vec<ScriptStep> {
    let down = |x: f32, y: f32| ScriptCamera {
        position: Vec3::new(x, y, 500.0),
        yaw: 0.0,
        pitch: -90.0,
    };
    let step = |command, camera| ScriptStep { command, camera };

    vec![
        step(Command::ToggleDebug, down(0.0, 0.0)),
        step(Command::Move { axis: Vec2::new(0.0, 1.0) }, down(0.0, 0.0)),
        step(Command::PlaceBlock, down(123.0, 47.0)),
        step(Command::PlaceBlock, down(223.0, 47.0)),
        step(Command::PlaceBlock, down(323.0, 47.0)),
        step(Command::PlaceBlock, down(223.0, 47.0)),
        step(Command::Look { axis: Vec2::new(1.5, -0.5) }, down(0.0, 0.0)),
        step(Command::ToggleBlockMode, down(0.0, 0.0)),
        step(Command::RemoveBlock, down(323.0, 47.0)),
        // Ground is not a block; nothing happens.
        step(Command::RemoveBlock, down(-800.0, -800.0)),
        step(Command::ToggleBlockMode, down(0.0, 0.0)),
        step(Command::ToggleDebug, down(0.0, 0.0)),
    ]
}
