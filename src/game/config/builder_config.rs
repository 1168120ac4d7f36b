//! Builder Configuration
//!
//! Boundary configuration for the building core: lattice size, aim reach,
//! placement inset and the block class. `Default` matches the stock
//! third-person template (1 m blocks, 4 m camera boom).
//!
//! Loaded from JSON; every field is optional and falls back to its default.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraPose, DEFAULT_ARM_LENGTH, DEFAULT_TRACE_EXTENSION};
use crate::world::{DEFAULT_CELL_SIZE, GridConfig};

/// Block class tag used when none is configured.
pub const DEFAULT_BLOCK_CLASS: &str = "Block";

/// Configuration for placement and removal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Lattice cell size
    pub cell_size: f32,
    /// Distance the aim ray reaches past the camera boom
    pub trace_extension: f32,
    /// Offset subtracted from every axis of the anchor before snapping
    pub anchor_inset: f32,
    /// Class tag for spawned blocks; removal only accepts this class
    pub block_class: String,
    /// Edge length of a spawned block (its pivot is the minimum corner)
    pub block_extent: f32,
    /// Camera boom length. Only read by [`BuilderConfig::camera_pose`]; the
    /// aim ray takes its boom length from the pose it is given.
    pub arm_length: f32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            trace_extension: DEFAULT_TRACE_EXTENSION,
            anchor_inset: DEFAULT_CELL_SIZE * 0.5,
            block_class: DEFAULT_BLOCK_CLASS.to_string(),
            block_extent: DEFAULT_CELL_SIZE,
            arm_length: DEFAULT_ARM_LENGTH,
        }
    }
}

/// Errors that can occur while loading a [`BuilderConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// A field parsed but holds an unusable value.
    InvalidValue { field: &'static str, reason: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl BuilderConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BuilderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        log::debug!("loaded builder config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "cell_size",
                reason: "must be a positive finite number",
            });
        }
        if !(self.block_extent.is_finite() && self.block_extent > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "block_extent",
                reason: "must be a positive finite number",
            });
        }
        if !(self.trace_extension.is_finite() && self.trace_extension >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "trace_extension",
                reason: "must be a finite number >= 0",
            });
        }
        if !(self.arm_length.is_finite() && self.arm_length >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "arm_length",
                reason: "must be a finite number >= 0",
            });
        }
        if !self.anchor_inset.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "anchor_inset",
                reason: "must be finite",
            });
        }
        if self.block_class.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "block_class",
                reason: "must not be empty",
            });
        }
        if self.block_extent > self.cell_size {
            log::warn!(
                "block_extent {} exceeds cell_size {}; adjacent blocks will overlap and be rejected",
                self.block_extent,
                self.cell_size
            );
        }
        Ok(())
    }

    pub fn grid(&self) -> GridConfig {
        GridConfig::new(self.cell_size)
    }

    pub fn block_extent_vec(&self) -> Vec3 {
        Vec3::splat(self.block_extent)
    }

    /// Camera pose for a control rotation (degrees) using the configured boom.
    pub fn camera_pose(&self, position: Vec3, yaw_degrees: f32, pitch_degrees: f32) -> CameraPose {
        CameraPose::from_rotation(position, yaw_degrees, pitch_degrees, self.arm_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuilderConfig::default();
        assert_eq!(config.cell_size, 100.0);
        assert_eq!(config.trace_extension, 250.0);
        assert_eq!(config.anchor_inset, 50.0);
        assert_eq!(config.block_class, "Block");
        assert_eq!(config.arm_length, 400.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BuilderConfig::from_json(r#"{ "cell_size": 50.0, "anchor_inset": 25.0 }"#).unwrap();
        assert_eq!(config.cell_size, 50.0);
        assert_eq!(config.anchor_inset, 25.0);
        assert_eq!(config.trace_extension, 250.0);
        assert_eq!(config.block_class, "Block");
    }

    #[test]
    fn test_rejects_zero_cell_size() {
        let err = BuilderConfig::from_json(r#"{ "cell_size": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { field: "cell_size", .. }
        ));
        assert!(err.to_string().contains("cell_size"));
    }

    #[test]
    fn test_rejects_negative_extension_and_empty_class() {
        let err = BuilderConfig::from_json(r#"{ "trace_extension": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "trace_extension", .. }));

        let err = BuilderConfig::from_json(r#"{ "block_class": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "block_class", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = BuilderConfig::from_json("{ cell_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let mut config = BuilderConfig::default();
        config.block_class = "BP_Brick".to_string();
        let json = config.to_json().unwrap();
        assert_eq!(BuilderConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_camera_pose_uses_configured_boom() {
        let config = BuilderConfig::from_json(r#"{ "arm_length": 300.0, "trace_extension": 100.0 }"#).unwrap();
        let pose = config.camera_pose(Vec3::new(0.0, 0.0, 200.0), 0.0, -90.0);
        assert_eq!(pose.arm_length, 300.0);
        assert!((pose.forward - Vec3::NEG_Z).length() < 0.001);

        let ray = crate::camera::RayQuery::from_camera(&pose, config.trace_extension);
        assert_eq!(ray.max_distance, 400.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BuilderConfig::load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
