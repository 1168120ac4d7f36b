//! Builder Mode
//!
//! Place/remove mode and the debug flag. Both are flipped by edge-triggered
//! commands and nothing else; they are independent of each other.

use std::fmt;

/// Which action the block buttons perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    #[default]
    Place,
    Remove,
}

impl BlockMode {
    pub fn toggled(self) -> Self {
        match self {
            BlockMode::Place => BlockMode::Remove,
            BlockMode::Remove => BlockMode::Place,
        }
    }
}

impl fmt::Display for BlockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockMode::Place => write!(f, "Place"),
            BlockMode::Remove => write!(f, "Remove"),
        }
    }
}

/// Mode and debug state owned by the player's controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuilderState {
    mode: BlockMode,
    debug: bool,
}

impl BuilderState {
    /// Place mode, debug off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> BlockMode {
        self.mode
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug
    }

    /// Flip place/remove. Returns the new mode.
    pub fn toggle_mode(&mut self) -> BlockMode {
        self.mode = self.mode.toggled();
        log::info!("[Builder] mode: {}", self.mode);
        self.mode
    }

    /// Flip the debug flag. Returns the new value.
    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        log::info!(
            "[Builder] debug tracing {}",
            if self.debug { "on" } else { "off" }
        );
        self.debug
    }
}
