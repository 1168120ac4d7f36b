//! Builder Controller
//!
//! Routes semantic commands to the building core. Owns the mode/debug state
//! and the diagnostic sink; the world, camera and locomotion component are
//! borrowed per call.

use crate::camera::CameraPose;
use crate::game::builder::{
    BlockMode, BuilderState, PlacementOutcome, RemovalOutcome, place_block, remove_block,
};
use crate::game::config::BuilderConfig;
use crate::game::diagnostics::{DebugDraw, DiagnosticSink};
use crate::input::{Command, CommandQueue};
use crate::player::Locomotion;
use crate::world::{ObjectId, SpatialQuery, WorldMutation};

/// What a single command did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    Placed(PlacementOutcome),
    Removed(RemovalOutcome),
    ModeChanged(BlockMode),
    DebugChanged(bool),
    /// Handed to the locomotion component
    Forwarded,
}

/// Player-side dispatcher for building commands.
pub struct BuilderController<D: DiagnosticSink> {
    state: BuilderState,
    config: BuilderConfig,
    /// Recorded as the owner of every spawned block
    owner: Option<ObjectId>,
    sink: D,
}

impl<D: DiagnosticSink> BuilderController<D> {
    pub fn new(config: BuilderConfig, sink: D) -> Self {
        Self {
            state: BuilderState::new(),
            config,
            owner: None,
            sink,
        }
    }

    pub fn with_owner(mut self, owner: ObjectId) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn state(&self) -> &BuilderState {
        &self.state
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Handle one command.
    ///
    /// # Arguments
    /// * `command` - Already-debounced semantic command
    /// * `camera` - Camera pose for the current frame
    /// * `world` - World to query and mutate
    /// * `locomotion` - Receives move, look and jump input
    pub fn dispatch<W, L>(
        &mut self,
        command: Command,
        camera: &CameraPose,
        world: &mut W,
        locomotion: &mut L,
    ) -> CommandOutcome
    where
        W: SpatialQuery + WorldMutation + ?Sized,
        L: Locomotion + ?Sized,
    {
        if command.is_edge_triggered() {
            log::debug!("dispatch {command:?} in {} mode", self.state.mode());
        }

        match command {
            Command::Move { axis } => {
                locomotion.add_movement_input(axis);
                CommandOutcome::Forwarded
            }
            Command::Look { axis } => {
                locomotion.add_look_input(axis);
                CommandOutcome::Forwarded
            }
            Command::Jump { pressed } => {
                locomotion.set_jump_held(pressed);
                CommandOutcome::Forwarded
            }
            Command::PlaceBlock => {
                let mut debug = DebugDraw::new(self.state.debug_enabled(), &mut self.sink);
                CommandOutcome::Placed(place_block(
                    self.state.mode(),
                    world,
                    camera,
                    &self.config,
                    self.owner,
                    &mut debug,
                ))
            }
            Command::RemoveBlock => {
                let mut debug = DebugDraw::new(self.state.debug_enabled(), &mut self.sink);
                CommandOutcome::Removed(remove_block(
                    self.state.mode(),
                    world,
                    camera,
                    &self.config,
                    &mut debug,
                ))
            }
            Command::ToggleBlockMode => CommandOutcome::ModeChanged(self.state.toggle_mode()),
            Command::ToggleDebug => CommandOutcome::DebugChanged(self.state.toggle_debug()),
        }
    }

    /// Handle every pending command in arrival order against one camera pose.
    pub fn process_queue<W, L>(
        &mut self,
        queue: &CommandQueue,
        camera: &CameraPose,
        world: &mut W,
        locomotion: &mut L,
    ) -> Vec<CommandOutcome>
    where
        W: SpatialQuery + WorldMutation + ?Sized,
        L: Locomotion + ?Sized,
    {
        let mut outcomes = Vec::with_capacity(queue.len());
        for command in queue.drain() {
            outcomes.push(self.dispatch(command, camera, world, locomotion));
        }
        outcomes
    }
}
