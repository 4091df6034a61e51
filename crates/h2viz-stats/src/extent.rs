//! Observed bounds of a numeric sample
//!
//! Provides the min/max envelope that axis domains, color scales and
//! normalization are derived from:
//! - Strict extent (rejects empty or non-finite samples)
//! - Positive extent (finite, strictly positive values only, for log axes)

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};

/// Minimum and maximum of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Extent {
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl Extent {
    /// Create an extent from explicit bounds
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Compute the extent of a sample
    ///
    /// Fails on an empty sample, when any element is NaN or infinite, or when
    /// `max - min` overflows.
    pub fn of(values: &[f64]) -> StatsResult<Self> {
        if values.is_empty() {
            tracing::debug!("rejecting empty sample");
            return Err(StatsError::invalid_input("sample is empty"));
        }

        if let Some(index) = values.iter().position(|x| !x.is_finite()) {
            tracing::debug!(index, value = values[index], "rejecting non-finite sample element");
            return Err(StatsError::invalid_input(format!(
                "element {} is not finite ({})",
                index, values[index]
            )));
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if !(max - min).is_finite() {
            tracing::debug!(min, max, "rejecting sample with overflowing range");
            return Err(StatsError::invalid_input(format!(
                "range of sample overflows ({} to {})",
                min, max
            )));
        }

        Ok(Self { min, max })
    }

    /// Extent of the finite, strictly positive values in a sample
    ///
    /// Returns `None` when the sample has no such value.
    pub fn positive_of(values: &[f64]) -> Option<Self> {
        let (min, max) = values
            .iter()
            .copied()
            .filter(|x| x.is_finite() && *x > 0.0)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });

        if min.is_finite() {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Whether every value in the sample was equal
    pub fn is_degenerate(&self) -> bool {
        self.range() == 0.0
    }

    /// Check whether a value lies inside the extent (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
