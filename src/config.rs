//! Configuration file handling.
//!
//! Supplies defaults for the laser source parameters that are usually
//! fixed for a given instrument, plus evaluation and output preferences.
//! Every section is optional.

use crate::hazard::limits::{DEFAULT_PULSE_DURATION_S, DEFAULT_REP_RATE_HZ};
use crate::hazard::WavelengthPolicy;
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Laser source parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserConfig {
    /// Pulse repetition rate in Hz.
    pub rep_rate_hz: f64,
    /// Pulse duration in seconds.
    pub pulse_duration_s: f64,
}

impl Default for LaserConfig {
    fn default() -> Self {
        Self {
            rep_rate_hz: DEFAULT_REP_RATE_HZ,
            pulse_duration_s: DEFAULT_PULSE_DURATION_S,
        }
    }
}

impl LaserConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rep_rate_hz.is_finite() || self.rep_rate_hz <= 0.0 {
            return Err(ConfigError::InvalidRepRate);
        }
        if !self.pulse_duration_s.is_finite() || self.pulse_duration_s < 0.0 {
            return Err(ConfigError::InvalidPulseDuration);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid repetition rate (must be positive)")]
    InvalidRepRate,
    #[error("invalid pulse duration (must not be negative)")]
    InvalidPulseDuration,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Evaluation preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Handling of wavelengths outside 400–500 nm.
    #[serde(default)]
    pub wavelength_policy: WavelengthPolicy,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report format.
    #[serde(default)]
    pub format: ReportFormat,
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub laser: LaserConfig,
    #[serde(default)]
    pub evaluation: EvaluationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.laser.validate()?;
        Ok(config)
    }
}
