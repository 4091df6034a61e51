//! Color scales binding a colormap to a value range
//!
//! A `ColorScale` is what a contour plot or a 3D mesh shader uses to turn a
//! field value (von Mises stress, wall temperature) into a color, optionally
//! on a log10 axis and with the colormap reversed.

use h2viz_stats::Extent;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::colormap::{normalized_position, ColormapName};
use crate::error::VizResult;

/// Colormap configuration for a visualization
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ColorScale {
    /// Colormap to sample
    pub colormap: ColormapName,

    /// Value range for mapping
    pub min: f64,
    pub max: f64,

    /// Whether to use logarithmic scaling
    pub log_scale: bool,

    /// Whether to reverse the colormap
    pub reversed: bool,
}

/// One entry of a color legend
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct LegendEntry {
    pub value: f64,
    pub color: Rgb,
}

impl ColorScale {
    /// Create a linear color scale over `[min, max]`
    pub fn new(colormap: ColormapName, min: f64, max: f64) -> Self {
        Self {
            colormap,
            min,
            max,
            log_scale: false,
            reversed: false,
        }
    }

    /// Create a color scale spanning the extent of a sample
    ///
    /// Fails with `InvalidInput` on an empty sample or a non-finite element.
    pub fn from_values(values: &[f64], colormap: ColormapName) -> VizResult<Self> {
        let extent = Extent::of(values)?;
        Ok(Self::new(colormap, extent.min, extent.max))
    }

    /// Use logarithmic scaling
    pub fn with_log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }

    /// Reverse the colormap
    pub fn reversed(mut self) -> Self {
        self.reversed = !self.reversed;
        self
    }

    fn uses_log(&self) -> bool {
        self.log_scale && self.min > 0.0 && self.max > 0.0
    }

    /// Map a value to a normalized position (0.0 to 1.0)
    pub fn normalize(&self, value: f64) -> f64 {
        let t = if self.uses_log() && value > 0.0 {
            normalized_position(value.log10(), self.min.log10(), self.max.log10())
        } else {
            if self.log_scale {
                tracing::trace!(
                    value,
                    min = self.min,
                    max = self.max,
                    "log color scale falling back to linear"
                );
            }
            normalized_position(value, self.min, self.max)
        };

        if self.reversed {
            1.0 - t
        } else {
            t
        }
    }

    /// Value at a normalized position along the scale (before reversal)
    pub fn value_at(&self, t: f64) -> f64 {
        if self.uses_log() {
            let log_min = self.min.log10();
            10.0_f64.powf(log_min + t * (self.max.log10() - log_min))
        } else {
            self.min + t * (self.max - self.min)
        }
    }

    /// Map a value to a color
    pub fn color(&self, value: f64) -> Rgb {
        self.colormap.sample(self.normalize(value))
    }

    /// Evenly spaced legend entries from `min` to `max` (at least two)
    pub fn legend_stops(&self, count: usize) -> Vec<LegendEntry> {
        let count = count.max(2);
        (0..count)
            .map(|i| {
                let value = self.value_at(i as f64 / (count - 1) as f64);
                LegendEntry {
                    value,
                    color: self.color(value),
                }
            })
            .collect()
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(ColormapName::default(), 0.0, 1.0)
    }
}
