//! Normalization of samples onto [0, 1]
//!
//! Two mappings are provided:
//! - Linear, using the observed extent of the sample
//! - Log10, using the extent of the strictly positive values
//!
//! The input slice is never modified; results are freshly allocated.

use serde::{Deserialize, Serialize};

use crate::error::StatsResult;
use crate::extent::Extent;

/// A normalized view of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct NormalizationResult {
    /// One value in [0, 1] per input element, in input order
    pub normalized: Vec<f64>,
    /// Lower bound the sample was scaled from
    pub min: f64,
    /// Upper bound the sample was scaled from
    pub max: f64,
}

impl NormalizationResult {
    /// Map a normalized position back to the original scale (linear only)
    pub fn denormalize(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }
}

/// Linearly scale a sample onto [0, 1]
///
/// Fails on an empty sample or any non-finite element. A constant sample
/// yields all zeros.
pub fn normalize_values(values: &[f64]) -> StatsResult<NormalizationResult> {
    let extent = Extent::of(values)?;
    let range = if extent.is_degenerate() {
        1.0
    } else {
        extent.range()
    };

    let normalized = values.iter().map(|&x| (x - extent.min) / range).collect();

    Ok(NormalizationResult {
        normalized,
        min: extent.min,
        max: extent.max,
    })
}

/// Scale a sample onto [0, 1] on a log10 axis
///
/// Only finite, strictly positive values define the envelope; everything else
/// maps to 0. Without any positive value the result is all zeros with a
/// reported range of [0, 1]. `min` and `max` are reported on the original
/// scale.
pub fn normalize_log_scale(values: &[f64]) -> NormalizationResult {
    let Some(extent) = Extent::positive_of(values) else {
        tracing::debug!(len = values.len(), "no positive values for log scale");
        return NormalizationResult {
            normalized: vec![0.0; values.len()],
            min: 0.0,
            max: 1.0,
        };
    };

    let log_min = extent.min.log10();
    let log_max = extent.max.log10();
    let log_range = if log_max > log_min {
        log_max - log_min
    } else {
        1.0
    };

    let normalized = values
        .iter()
        .map(|&x| {
            if x.is_finite() && x > 0.0 {
                ((x.log10() - log_min) / log_range).clamp(0.0, 1.0)
            } else {
                0.0
            }
        })
        .collect();

    NormalizationResult {
        normalized,
        min: extent.min,
        max: extent.max,
    }
}
