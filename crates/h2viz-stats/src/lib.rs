//! h2viz-stats - Sample statistics for chart scaling
//!
//! This crate provides the numeric primitives the visualization layer builds
//! axis scales and color scales on:
//!
//! - **Extent**: observed min/max of a sample, rejecting empty or non-finite data
//! - **Normalization**: linear and log10 mapping of a sample onto [0, 1]
//!
//! # Error Policy
//!
//! Extent and linear normalization fail fast with [`StatsError::InvalidInput`]
//! because silently propagating NaN would produce wrong axes. Log normalization
//! never fails: values it cannot place on a log axis map to 0.

pub mod error;
pub mod extent;
pub mod normalize;

pub use error::*;
pub use extent::*;
pub use normalize::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
