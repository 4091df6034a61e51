//! Display formatting for analysis results
//!
//! Turns raw numbers into strings for tables, tick labels and chart legends.
//! Formatting never fails: NaN, infinities and zero all have fixed
//! renderings so a legend can always be drawn.

use serde::{Deserialize, Serialize};

/// Largest number of fractional digits honored by the formatters
pub const MAX_PRECISION: u32 = 100;

/// Values below this magnitude (and non-zero) switch to exponential notation
const SCIENTIFIC_THRESHOLD: f64 = 0.001;

/// Options controlling [`format_value`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
#[serde(default)]
pub struct FormatOptions {
    /// Always use exponential notation
    pub is_scientific: bool,

    /// Fractional digits for fixed-point output (clamped to 0..=100)
    pub precision: u32,

    /// Unit appended after a single space (e.g., "MPa", "kg")
    pub unit: Option<String>,

    /// Abbreviate thousands and millions with "k" and "M"
    pub compact: bool,
}

impl FormatOptions {
    /// Create options with the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unit
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the number of fractional digits
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Force exponential notation
    pub fn scientific(mut self) -> Self {
        self.is_scientific = true;
        self
    }

    /// Disable "k"/"M" abbreviation
    pub fn without_compact(mut self) -> Self {
        self.compact = false;
        self
    }

    fn effective_precision(&self) -> usize {
        self.precision.min(MAX_PRECISION) as usize
    }

    fn append_unit(&self, body: String) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", body, unit),
            None => body,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            is_scientific: false,
            precision: 2,
            unit: None,
            compact: true,
        }
    }
}

/// Rendering for values that have no numeric form
fn non_finite_label(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("-")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Round to `digits` fractional digits with ties away from zero
///
/// `{:.N}` alone rounds exact ties to even, so 0.125 would print as "0.12".
/// Values too large to scale are returned unchanged.
fn round_half_away(value: f64, digits: usize) -> f64 {
    let scale = 10.0_f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= 2.0_f64.powi(52) {
        return value;
    }
    scaled.round() / scale
}

/// Format a number for display
///
/// ```
/// use h2viz_core::{format_value, FormatOptions};
///
/// assert_eq!(format_value(0.0, &FormatOptions::default()), "0");
/// assert_eq!(format_value(1_500_000.0, &FormatOptions::default()), "1.5M");
/// assert_eq!(format_value(12.5, &FormatOptions::new().with_unit("MPa")), "12.50 MPa");
/// ```
pub fn format_value(value: f64, options: &FormatOptions) -> String {
    if let Some(label) = non_finite_label(value) {
        return label.to_string();
    }

    if value == 0.0 {
        return options.append_unit("0".to_string());
    }

    let precision = options.effective_precision();
    let magnitude = value.abs();

    let body = if options.is_scientific || magnitude < SCIENTIFIC_THRESHOLD {
        format!("{:.*e}", precision.saturating_sub(1), value)
    } else if options.compact && magnitude >= 1_000_000.0 {
        format!("{:.1}M", round_half_away(value / 1_000_000.0, 1))
    } else if options.compact && magnitude >= 1_000.0 {
        format!("{:.1}k", round_half_away(value / 1_000.0, 1))
    } else {
        format!("{:.*}", precision, round_half_away(value, precision))
    };

    options.append_unit(body)
}

/// Format a possibly missing value; `None` renders as "-"
pub fn format_optional(value: Option<f64>, options: &FormatOptions) -> String {
    match value {
        Some(v) => format_value(v, options),
        None => "-".to_string(),
    }
}

/// Format a fraction as a percentage (0.125 -> "12.5%" with precision 1)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_percent(fraction: f64, precision: u32) -> String {
    if let Some(label) = non_finite_label(fraction) {
        return label.to_string();
    }
    let precision = precision.min(MAX_PRECISION) as usize;
    format!("{:.*}%", precision, round_half_away(fraction * 100.0, precision))
}

/// Format a monetary amount with thousands separators and two decimals
///
/// Amounts of a million or more are abbreviated ("$2.4M").
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn format_currency(value: f64, symbol: &str) -> String {
    if let Some(label) = non_finite_label(value) {
        return label.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!(
            "{}{}{:.1}M",
            sign,
            symbol,
            round_half_away(magnitude / 1_000_000.0, 1)
        );
    }

    let cents = (magnitude * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
