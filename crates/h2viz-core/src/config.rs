//! Configuration for h2viz
//!
//! Chart defaults shared by every view: colormap, domain padding, tick
//! density, legend gradient and number formatting. Files may be partial;
//! missing fields take their defaults.
//!
//! ```toml
//! colormap = "coolwarm"
//! domain_padding = 0.05
//! tick_count = 6
//!
//! [format]
//! precision = 1
//! unit = "MPa"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::axis::{DEFAULT_PADDING, DEFAULT_TICK_COUNT};
use crate::colormap::ColormapName;
use crate::error::{ConfigError, VizResult};
use crate::format::{FormatOptions, MAX_PRECISION};

/// Visualization defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Colormap for continuous fields
    pub colormap: ColormapName,
    /// Fraction of the data range added to each side of an axis domain
    pub domain_padding: f64,
    /// Number of ticks aimed for on linear axes
    pub tick_count: usize,
    /// Number of stops in legend gradients
    pub gradient_stops: usize,
    /// CSS direction of legend gradients
    pub gradient_direction: String,
    /// Number formatting for labels and tables
    pub format: FormatOptions,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            colormap: ColormapName::default(),
            domain_padding: DEFAULT_PADDING,
            tick_count: DEFAULT_TICK_COUNT,
            gradient_stops: 10,
            gradient_direction: "to right".to_string(),
            format: FormatOptions::default(),
        }
    }
}

impl VizConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> VizResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> VizResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> VizResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> VizResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> VizResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), colormap = %config.colormap, "loaded configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.domain_padding.is_finite() || self.domain_padding < 0.0 {
            return Err(ConfigError::OutOfRange(format!(
                "domain_padding must be a non-negative number, got {}",
                self.domain_padding
            )));
        }

        if self.tick_count < 2 {
            return Err(ConfigError::OutOfRange(
                "tick_count must be at least 2".to_string(),
            ));
        }

        if self.gradient_stops < 2 {
            return Err(ConfigError::OutOfRange(
                "gradient_stops must be at least 2".to_string(),
            ));
        }

        if self.format.precision > MAX_PRECISION {
            return Err(ConfigError::OutOfRange(format!(
                "format.precision must be at most {}",
                MAX_PRECISION
            )));
        }

        Ok(())
    }
}
