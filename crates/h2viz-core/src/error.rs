//! Error types for h2viz-core
//!
//! Only the scaling side of the crate can fail: domain calculation, color
//! scales built from samples, colormap lookup by name and configuration
//! loading. Color interpolation and value formatting always produce output.

use h2viz_stats::StatsError;
use thiserror::Error;

/// Main error type for h2viz operations
#[derive(Error, Debug)]
pub enum VizError {
    /// Empty sample or a non-finite element where bounds are required
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Colormap name not among the built-in tables
    #[error("Unknown colormap: {name}")]
    UnknownColormap { name: String },

    /// Configuration values failed validation
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// TOML configuration could not be parsed
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML configuration could not be written
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VizError {
    /// Whether this error rejects the caller's data
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, VizError::InvalidInput { .. })
    }
}

impl From<StatsError> for VizError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::InvalidInput { message } => VizError::InvalidInput { message },
        }
    }
}

/// Configuration validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for h2viz operations
pub type VizResult<T> = Result<T, VizError>;
