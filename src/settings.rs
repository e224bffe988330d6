//! Runtime settings
//!
//! Loaded from a JSON file; any field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Host and gameplay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    /// Visible field width (normally the display width)
    pub width: u32,
    /// Visible field height (normally the display height)
    pub height: u32,

    // === Simulation ===
    /// RNG seed for cloud directions
    pub seed: u64,
    /// Longest frame simulated in one tick (seconds)
    pub max_frame_dt: f64,

    // === Balance ===
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,

            seed: 0,
            max_frame_dt: MAX_FRAME_DT,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Read and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::invalid("width", "must be greater than zero"));
        }
        if self.height == 0 {
            return Err(ConfigError::invalid("height", "must be greater than zero"));
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::invalid(
                "max_frame_dt",
                format!("must be a positive number of seconds, got {}", self.max_frame_dt),
            ));
        }
        if self.tuning.start_lives == 0 {
            return Err(ConfigError::invalid("tuning.start_lives", "must be at least 1"));
        }
        if self.tuning.cloud_cap == 0 {
            return Err(ConfigError::invalid("tuning.cloud_cap", "must be at least 1"));
        }
        if let Some(field) = self.tuning.first_non_finite() {
            return Err(ConfigError::invalid(field, "must be a finite number"));
        }
        Ok(())
    }
}
