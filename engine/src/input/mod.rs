//! Input Module
//!
//! Semantic player commands and the queue that carries them to the dispatch
//! layer. This module is decoupled from any windowing system: key and mouse
//! decoding live upstream.
//!
//! # Example
//!
//! ```rust,ignore
//! use building_blocks_engine::input::{Command, CommandQueue};
//!
//! let queue = CommandQueue::new();
//! let sender = queue.sender();
//! sender.send(Command::ToggleBlockMode);
//! for command in queue.drain() {
//!     // dispatch
//! }
//! ```

pub mod commands;
pub mod queue;

pub use commands::Command;
pub use queue::{CommandQueue, CommandSender};
