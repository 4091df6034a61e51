//! Axis domains and tick marks for engineering charts
//!
//! Provides padded domain calculation, "nice" tick spacing on a
//! 1/2/5/10 × 10^k step, and labeled tick marks for linear and log10 axes.
//! Stress and margin values may be negative, so domains are never forced to
//! include zero.

use h2viz_stats::Extent;
use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};
use crate::format::{format_value, FormatOptions};

/// Fraction of the data range added on each side of a domain
pub const DEFAULT_PADDING: f64 = 0.1;

/// Number of ticks aimed for when none is given
pub const DEFAULT_TICK_COUNT: usize = 5;

/// Upper bound on the tick count a caller may ask for
pub const MAX_TICK_COUNT: usize = 1000;

/// The numeric range an axis displays
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Create a domain from explicit bounds
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Get the width (max - min)
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether a value lies inside the domain (inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<Extent> for Domain {
    fn from(extent: Extent) -> Self {
        Self::new(extent.min, extent.max)
    }
}

/// Calculate a padded axis domain for a sample
///
/// Fails with `InvalidInput` on an empty sample, any non-finite element, or
/// a sample whose padded bounds overflow.
/// A constant sample is padded by `max(|v| * padding, 1)` on each side so the
/// axis always has a visible width.
pub fn calculate_domain(values: &[f64], padding: f64) -> VizResult<Domain> {
    let extent = Extent::of(values)?;

    let pad = if extent.is_degenerate() {
        (extent.min.abs() * padding).max(1.0)
    } else {
        extent.range() * padding
    };

    let domain = Domain::new(extent.min - pad, extent.max + pad);
    if !domain.width().is_finite() {
        return Err(VizError::InvalidInput {
            message: format!("padded domain of [{}, {}] overflows", extent.min, extent.max),
        });
    }

    Ok(domain)
}

/// Round a rough step up to 1, 2, 5 or 10 times a power of ten
fn nice_step(rough_step: f64) -> f64 {
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;

    let nice = if residual <= 1.5 {
        1.0
    } else if residual <= 3.0 {
        2.0
    } else if residual <= 7.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Round a tick to the decimal precision of its step
fn snap_to_step(value: f64, step: f64) -> f64 {
    let decimals = (-step.log10().floor()).max(0.0);
    if decimals > f64::MAX_10_EXP as f64 {
        return value;
    }

    let scale = 10.0_f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Calculate "nice" tick positions covering `[min, max]`
///
/// The first tick is at or below `min` and the last at or above `max`.
/// A `target_count` of 0 or 1, or an empty or non-finite range, returns
/// exactly `[min, max]`, as does a range too narrow to hold a representable
/// step. `target_count` is capped at [`MAX_TICK_COUNT`].
///
/// ```
/// use h2viz_core::calculate_nice_ticks;
///
/// assert_eq!(
///     calculate_nice_ticks(0.0, 100.0, 5),
///     vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
/// );
/// ```
pub fn calculate_nice_ticks(min: f64, max: f64, target_count: usize) -> Vec<f64> {
    if target_count <= 1 {
        return vec![min, max];
    }

    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        tracing::trace!(min, max, "degenerate tick range");
        return vec![min, max];
    }

    let target_count = target_count.min(MAX_TICK_COUNT);
    let step = nice_step(range / (target_count - 1) as f64);
    if !step.is_finite() || step <= 0.0 {
        tracing::trace!(min, max, step, "no representable tick step");
        return vec![min, max];
    }

    let first = (min / step).floor();
    let last = (max / step).ceil();
    let span = last - first;
    if !span.is_finite() || span > (target_count * 4 + 2) as f64 {
        tracing::trace!(min, max, step, "tick span out of bounds");
        return vec![min, max];
    }

    (first as i64..=last as i64)
        .map(|k| snap_to_step(k as f64 * step, step))
        .collect()
}

/// Scale type for axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ScaleType {
    #[default]
    Linear,
    Log10,
}

/// A labeled tick mark on an axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct TickMark {
    /// Position in data coordinates
    pub value: f64,

    /// Position in normalized coordinates (0.0 to 1.0)
    pub normalized: f64,

    /// Label text
    pub label: String,
}

/// An axis: a scale type applied to a domain
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub scale: ScaleType,
    pub domain: Domain,
}

impl AxisScale {
    /// Create a linear axis
    pub fn linear(domain: Domain) -> Self {
        Self {
            scale: ScaleType::Linear,
            domain,
        }
    }

    /// Create a log10 axis
    pub fn log10(domain: Domain) -> Self {
        Self {
            scale: ScaleType::Log10,
            domain,
        }
    }

    /// Map a data value to its position along the axis (0.0 to 1.0)
    ///
    /// On a log axis, non-positive values and non-positive domains map to 0.
    pub fn normalize(&self, value: f64) -> f64 {
        let t = match self.scale {
            ScaleType::Linear => (value - self.domain.min) / self.domain.width(),
            ScaleType::Log10 => {
                if value <= 0.0 || self.domain.min <= 0.0 {
                    return 0.0;
                }
                let log_min = self.domain.min.log10();
                (value.log10() - log_min) / (self.domain.max.log10() - log_min)
            }
        };

        if t.is_nan() {
            0.0
        } else {
            t.clamp(0.0, 1.0)
        }
    }

    /// Calculate labeled tick marks inside the domain
    pub fn ticks(&self, target_count: usize, options: &FormatOptions) -> Vec<TickMark> {
        match self.scale {
            ScaleType::Linear => self.linear_ticks(target_count, options),
            ScaleType::Log10 => self.log_ticks(),
        }
    }

    fn linear_ticks(&self, target_count: usize, options: &FormatOptions) -> Vec<TickMark> {
        let tolerance = self.domain.width().abs() * 1e-9;

        calculate_nice_ticks(self.domain.min, self.domain.max, target_count)
            .into_iter()
            .filter(|&value| {
                value >= self.domain.min - tolerance && value <= self.domain.max + tolerance
            })
            .map(|value| TickMark {
                value,
                normalized: self.normalize(value),
                label: format_value(value, options),
            })
            .collect()
    }

    fn log_ticks(&self) -> Vec<TickMark> {
        let Domain { min, max } = self.domain;
        if min <= 0.0 || max <= 0.0 || !min.is_finite() || !max.is_finite() {
            return vec![];
        }

        let start_decade = min.log10().floor() as i32;
        let end_decade = max.log10().ceil() as i32;

        (start_decade..=end_decade)
            .filter_map(|decade| {
                let value = 10.0_f64.powi(decade);
                self.domain.contains(value).then(|| TickMark {
                    value,
                    normalized: self.normalize(value),
                    label: format!("10{}", superscript(decade)),
                })
            })
            .collect()
    }
}

/// Convert an integer to superscript Unicode characters
fn superscript(n: i32) -> String {
    const SUPERSCRIPTS: &[char] = &['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    let mut result = String::new();
    if n < 0 {
        result.push('⁻');
    }

    for digit in n.unsigned_abs().to_string().bytes() {
        result.push(SUPERSCRIPTS[(digit - b'0') as usize]);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_calculate_domain_padding() {
        let domain = calculate_domain(&[-10.0, 10.0], 0.1).unwrap();
        assert_close(domain.min, -12.0);
        assert_close(domain.max, 12.0);
    }

    #[test]
    fn test_calculate_domain_constant() {
        let domain = calculate_domain(&[5.0], DEFAULT_PADDING).unwrap();
        assert_close(domain.min, 4.0);
        assert_close(domain.max, 6.0);

        let domain = calculate_domain(&[200.0, 200.0], DEFAULT_PADDING).unwrap();
        assert_close(domain.min, 180.0);
        assert_close(domain.max, 220.0);
    }

    #[test]
    fn test_calculate_domain_negative_allowed() {
        let domain = calculate_domain(&[-50.0, -30.0], 0.5).unwrap();
        assert_close(domain.min, -60.0);
        assert_close(domain.max, -20.0);
    }

    #[test]
    fn test_calculate_domain_rejects_bad_input() {
        assert!(calculate_domain(&[], DEFAULT_PADDING)
            .unwrap_err()
            .is_invalid_input());
        assert!(calculate_domain(&[1.0, f64::NAN], DEFAULT_PADDING)
            .unwrap_err()
            .is_invalid_input());
    }

    #[test]
    fn test_calculate_domain_rejects_overflow() {
        assert!(calculate_domain(&[-1e308, 1e308], DEFAULT_PADDING)
            .unwrap_err()
            .is_invalid_input());
        assert!(calculate_domain(&[1.7e308], DEFAULT_PADDING)
            .unwrap_err()
            .is_invalid_input());
        assert!(calculate_domain(&[0.0, 1e308], DEFAULT_PADDING).is_ok());
    }

    #[test]
    fn test_nice_step() {
        assert_close(nice_step(25.0), 20.0);
        assert_close(nice_step(0.12), 0.1);
        assert_close(nice_step(0.4), 0.5);
        assert_close(nice_step(8.0), 10.0);
        assert_close(nice_step(1.6), 2.0);
    }

    #[test]
    fn test_calculate_nice_ticks_covers_range() {
        let ticks = calculate_nice_ticks(3.0, 97.0, 5);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_calculate_nice_ticks_fractional_step() {
        let ticks = calculate_nice_ticks(0.0, 1.0, 6);
        assert_eq!(ticks, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_calculate_nice_ticks_negative_range() {
        let ticks = calculate_nice_ticks(-12.0, 12.0, 5);
        assert_eq!(ticks, vec![-15.0, -10.0, -5.0, 0.0, 5.0, 10.0, 15.0]);
    }

    #[test]
    fn test_calculate_nice_ticks_degenerate() {
        assert_eq!(calculate_nice_ticks(2.0, 8.0, 1), vec![2.0, 8.0]);
        assert_eq!(calculate_nice_ticks(2.0, 8.0, 0), vec![2.0, 8.0]);
        assert_eq!(calculate_nice_ticks(4.0, 4.0, 5), vec![4.0, 4.0]);
        assert_eq!(calculate_nice_ticks(0.0, f64::INFINITY, 5).len(), 2);
    }

    #[test]
    fn test_calculate_nice_ticks_subnormal_range() {
        assert_eq!(calculate_nice_ticks(0.0, 5e-324, 5), vec![0.0, 5e-324]);
    }

    #[test]
    fn test_calculate_nice_ticks_huge_target() {
        let ticks = calculate_nice_ticks(0.0, 1.0, usize::MAX);
        assert!(ticks.len() <= MAX_TICK_COUNT * 4 + 3);
        assert_eq!(ticks[0], 0.0);
        assert!(ticks[ticks.len() - 1] >= 1.0);
    }

    #[test]
    fn test_calculate_nice_ticks_tiny_range() {
        let ticks = calculate_nice_ticks(0.0, 1e-18, 5);
        assert!(ticks.len() >= 5);
        assert!(ticks.windows(2).all(|w| w[1] > w[0]));
        assert!((ticks[1] - 2e-19).abs() < 1e-30);
        assert!(ticks[ticks.len() - 1] >= 1e-18 * (1.0 - 1e-9));
    }

    #[test]
    fn test_linear_axis_ticks_inside_domain() {
        let axis = AxisScale::linear(Domain::new(3.0, 97.0));
        let ticks = axis.ticks(5, &FormatOptions::default().with_precision(0));

        let values: Vec<f64> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![20.0, 40.0, 60.0, 80.0]);
        assert_eq!(ticks[0].label, "20");
        assert!(ticks.iter().all(|t| (0.0..=1.0).contains(&t.normalized)));
    }

    #[test]
    fn test_linear_axis_tick_labels_use_units() {
        let axis = AxisScale::linear(Domain::new(0.0, 5000.0));
        let ticks = axis.ticks(6, &FormatOptions::default().with_unit("psi"));
        assert_eq!(ticks.last().unwrap().label, "5.0k psi");
        assert_eq!(ticks[0].label, "0 psi");
    }

    #[test]
    fn test_log_axis_ticks() {
        let axis = AxisScale::log10(Domain::new(1.0, 1000.0));
        let ticks = axis.ticks(DEFAULT_TICK_COUNT, &FormatOptions::default());

        // Should have ticks at 10^0, 10^1, 10^2, 10^3
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0].label, "10⁰");
        assert_eq!(ticks[3].label, "10³");
        assert_close(ticks[0].normalized, 0.0);
        assert_close(ticks[3].normalized, 1.0);
    }

    #[test]
    fn test_log_axis_non_positive_domain() {
        let axis = AxisScale::log10(Domain::new(-1.0, 100.0));
        assert!(axis.ticks(5, &FormatOptions::default()).is_empty());
        assert_eq!(axis.normalize(10.0), 0.0);
    }

    #[test]
    fn test_axis_normalize() {
        let axis = AxisScale::linear(Domain::new(-10.0, 10.0));
        assert_close(axis.normalize(0.0), 0.5);
        assert_close(axis.normalize(50.0), 1.0);

        let axis = AxisScale::log10(Domain::new(1.0, 100.0));
        assert_close(axis.normalize(10.0), 0.5);
        assert_eq!(axis.normalize(-5.0), 0.0);

        let flat = AxisScale::linear(Domain::new(3.0, 3.0));
        assert_eq!(flat.normalize(3.0), 0.0);
    }

    #[test]
    fn test_superscript() {
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(1), "¹");
        assert_eq!(superscript(-2), "⁻²");
        assert_eq!(superscript(12), "¹²");
    }
}
