//! h2viz-core - Visualization formatting for hydrogen vessel design exploration
//!
//! This crate turns engineering analysis results (stresses, burst margins,
//! temperatures, costs) into the colors, strings and axis scales that charts,
//! tables and 3D viewers display.
//!
//! # Key Components
//!
//! - **Colormap**: five built-in control-point tables with piecewise-linear
//!   interpolation to RGB, hex, CSS and vertex-color outputs
//! - **Format**: display strings with scientific, compact, unit, percent and
//!   currency variants
//! - **Axis**: padded domains, nice tick spacing and labeled tick marks
//! - **ColorScale**: a colormap bound to a value range, linear or log10
//! - **CategoryPalette**: stable qualitative colors for discrete series
//! - **VizConfig**: shared chart defaults loaded from TOML or JSON
//!
//! # Failure Policy
//!
//! Color and formatting functions never fail; bad input still yields a
//! renderable color or string. Domain calculation and sample-derived scales
//! return [`VizError::InvalidInput`] on empty or non-finite data.

pub mod axis;
pub mod category;
pub mod color;
pub mod colormap;
pub mod config;
pub mod error;
pub mod format;
pub mod scale;

pub use axis::*;
pub use category::*;
pub use color::*;
pub use colormap::*;
pub use config::*;
pub use error::{ConfigError, VizError, VizResult};
pub use format::*;
pub use scale::*;

pub use h2viz_stats::{normalize_log_scale, normalize_values, Extent, NormalizationResult};

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
