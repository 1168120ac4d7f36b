//! Config Module
//!
//! Centralized configuration for the building core.

pub mod builder_config;

pub use builder_config::{BuilderConfig, ConfigError, DEFAULT_BLOCK_CLASS};
