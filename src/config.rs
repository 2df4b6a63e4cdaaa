//! Runtime-tunable simulation parameters.
//!
//! The constants in [`crate::constants`] are the built-in defaults; this
//! module exposes them as a [`SimConfig`] resource that the demo binary can
//! override from a JSON file. Missing fields keep their defaults so a
//! config file only needs to name what it changes.

use std::fs;
use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{FRICTION, VOID_DAMAGE, VOID_FLOOR};

/// Error raised when a configuration file cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents were not valid JSON for [`SimConfig`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable simulation parameters, inserted as a resource by
/// [`crate::SimulationPlugin`] when absent.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Multiplicative decay applied to velocity every tick.
    pub friction: f32,
    /// Damage removed per tick while below the void floor.
    pub void_damage: f32,
    /// Y coordinate below which the void starts.
    pub void_floor: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            friction: FRICTION,
            void_damage: VOID_DAMAGE,
            void_floor: VOID_FLOOR,
        }
    }
}

impl SimConfig {
    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when its contents are not a valid
    /// [`SimConfig`] object.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
