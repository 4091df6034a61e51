//! Colormap system for stress and thermal visualization
//!
//! Five built-in colormaps are shipped as static control-point tables:
//! - Rainbow: jet
//! - Sequential: thermal, viridis, plasma
//! - Diverging: coolwarm
//!
//! A colormap with `n` control points is split into `n - 1` equal-width
//! segments over [0, 1] and each channel is interpolated linearly inside a
//! segment. Nothing in this module can fail: out-of-range values clamp to the
//! ends of the map and degenerate ranges fall back to the first control point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::VizError;

/// Identifier of a built-in colormap
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ColormapName {
    #[default]
    Jet,
    Thermal,
    Viridis,
    Plasma,
    Coolwarm,
}

impl ColormapName {
    /// Every built-in colormap
    pub const ALL: [ColormapName; 5] = [
        ColormapName::Jet,
        ColormapName::Thermal,
        ColormapName::Viridis,
        ColormapName::Plasma,
        ColormapName::Coolwarm,
    ];

    /// Lowercase name of the colormap
    pub fn name(&self) -> &'static str {
        match self {
            ColormapName::Jet => "jet",
            ColormapName::Thermal => "thermal",
            ColormapName::Viridis => "viridis",
            ColormapName::Plasma => "plasma",
            ColormapName::Coolwarm => "coolwarm",
        }
    }

    /// Control points of the colormap, from low to high
    pub fn control_points(&self) -> &'static [Rgb] {
        match self {
            ColormapName::Jet => &JET,
            ColormapName::Thermal => &THERMAL,
            ColormapName::Viridis => &VIRIDIS,
            ColormapName::Plasma => &PLASMA,
            ColormapName::Coolwarm => &COOLWARM,
        }
    }

    /// First control point (the color of the lowest value)
    pub fn first(&self) -> Rgb {
        self.control_points()[0]
    }

    /// Last control point (the color of the highest value)
    pub fn last(&self) -> Rgb {
        let points = self.control_points();
        points[points.len() - 1]
    }

    /// Sample the colormap at a position (0.0 to 1.0)
    ///
    /// Positions outside [0, 1] are clamped; NaN samples the first point.
    pub fn sample(&self, t: f64) -> Rgb {
        let points = self.control_points();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let segments = points.len() - 1;
        let scaled = t * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        let local_t = scaled - index as f64;

        Rgb::lerp(&points[index], &points[index + 1], local_t)
    }
}

impl fmt::Display for ColormapName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColormapName {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColormapName::ALL
            .into_iter()
            .find(|cmap| cmap.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VizError::UnknownColormap {
                name: s.to_string(),
            })
    }
}

// MARK: - Built-in Colormaps

const JET: [Rgb; 9] = [
    Rgb::new(0, 0, 143),
    Rgb::new(0, 0, 255),
    Rgb::new(0, 127, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(127, 255, 127),
    Rgb::new(255, 255, 0),
    Rgb::new(255, 127, 0),
    Rgb::new(255, 0, 0),
    Rgb::new(127, 0, 0),
];

const THERMAL: [Rgb; 9] = [
    Rgb::new(0, 0, 0),
    Rgb::new(40, 0, 70),
    Rgb::new(110, 0, 110),
    Rgb::new(180, 20, 60),
    Rgb::new(230, 60, 0),
    Rgb::new(255, 120, 0),
    Rgb::new(255, 185, 20),
    Rgb::new(255, 235, 120),
    Rgb::new(255, 255, 255),
];

const VIRIDIS: [Rgb; 11] = [
    Rgb::new(68, 1, 84),
    Rgb::new(72, 36, 117),
    Rgb::new(65, 68, 135),
    Rgb::new(53, 95, 141),
    Rgb::new(42, 120, 142),
    Rgb::new(33, 145, 140),
    Rgb::new(34, 168, 132),
    Rgb::new(68, 191, 112),
    Rgb::new(122, 209, 81),
    Rgb::new(189, 223, 38),
    Rgb::new(253, 231, 37),
];

const PLASMA: [Rgb; 9] = [
    Rgb::new(13, 8, 135),
    Rgb::new(75, 3, 161),
    Rgb::new(126, 3, 168),
    Rgb::new(170, 35, 157),
    Rgb::new(204, 71, 120),
    Rgb::new(229, 101, 78),
    Rgb::new(248, 142, 39),
    Rgb::new(253, 191, 41),
    Rgb::new(240, 249, 33),
];

const COOLWARM: [Rgb; 9] = [
    Rgb::new(59, 76, 192),
    Rgb::new(98, 130, 234),
    Rgb::new(141, 176, 254),
    Rgb::new(184, 208, 249),
    Rgb::new(221, 221, 221),
    Rgb::new(245, 196, 173),
    Rgb::new(244, 154, 123),
    Rgb::new(222, 96, 77),
    Rgb::new(180, 4, 38),
];

// MARK: - Value Mapping

/// Position of `value` inside `[min, max]`, clamped to [0, 1]
///
/// A zero-width or non-finite range yields 0.
pub fn normalized_position(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }

    let t = (value - min) / (max - min);
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Map a value in `[min, max]` to a color
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn interpolate_color(value: f64, min: f64, max: f64, colormap: ColormapName) -> Rgb {
    colormap.sample(normalized_position(value, min, max))
}

/// Map a value to a `#rrggbb` string
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn interpolate_color_hex(value: f64, min: f64, max: f64, colormap: ColormapName) -> String {
    interpolate_color(value, min, max, colormap).to_hex()
}

/// Map a value to a CSS `rgb(r, g, b)` string
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn interpolate_color_css(value: f64, min: f64, max: f64, colormap: ColormapName) -> String {
    interpolate_color(value, min, max, colormap).to_css()
}

/// Map a value to channels in [0, 1]
pub fn interpolate_color_normalized(
    value: f64,
    min: f64,
    max: f64,
    colormap: ColormapName,
) -> [f32; 3] {
    interpolate_color(value, min, max, colormap).to_normalized()
}

/// Map many values at once into a flat `[r, g, b, r, g, b, ...]` buffer
///
/// Channels are in [0, 1], ready for a vertex color attribute.
pub fn interpolate_colors_flat(
    values: &[f64],
    min: f64,
    max: f64,
    colormap: ColormapName,
) -> Vec<f32> {
    let mut out = Vec::with_capacity(values.len() * 3);
    for &value in values {
        out.extend_from_slice(&interpolate_color_normalized(value, min, max, colormap));
    }
    out
}

// MARK: - Gradients and Palettes

/// A gradient stop: offset in [0, 1] and a CSS color
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

/// Evenly spaced gradient stops across a colormap (at least two)
pub fn color_stops(colormap: ColormapName, count: usize) -> Vec<ColorStop> {
    let count = count.max(2);
    (0..count)
        .map(|i| {
            let offset = i as f64 / (count - 1) as f64;
            ColorStop {
                offset,
                color: colormap.sample(offset).to_css(),
            }
        })
        .collect()
}

/// Build a CSS `linear-gradient(...)` for a colormap legend
pub fn gradient_css(colormap: ColormapName, count: usize, direction: &str) -> String {
    let stops: Vec<String> = color_stops(colormap, count)
        .into_iter()
        .map(|stop| {
            let percent = (stop.offset * 10000.0).round() / 100.0;
            format!("{} {}%", stop.color, percent)
        })
        .collect();

    format!("linear-gradient({}, {})", direction, stops.join(", "))
}

/// Sample `count` evenly spaced hex colors from a colormap
///
/// The first color is the map's first control point and, for two or more
/// colors, the last is its last control point.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn discrete_colors(colormap: ColormapName, count: u32) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => vec![colormap.first().to_hex()],
        _ => (0..count)
            .map(|i| colormap.sample(i as f64 / (count - 1) as f64).to_hex())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_have_eight_to_twelve_points() {
        for cmap in ColormapName::ALL {
            let n = cmap.control_points().len();
            assert!((8..=12).contains(&n), "{} has {} points", cmap, n);
        }
    }

    #[test]
    fn test_sample_endpoints() {
        for cmap in ColormapName::ALL {
            assert_eq!(cmap.sample(0.0), cmap.first());
            assert_eq!(cmap.sample(1.0), cmap.last());
        }
    }

    #[test]
    fn test_sample_hits_interior_control_points() {
        // jet has 9 points, so t = k / 8 lands exactly on point k
        let points = ColormapName::Jet.control_points();
        for (k, expected) in points.iter().enumerate() {
            assert_eq!(ColormapName::Jet.sample(k as f64 / 8.0), *expected);
        }
    }

    #[test]
    fn test_sample_midpoint_of_segment() {
        // halfway between (0, 0, 143) and (0, 0, 255)
        let c = ColormapName::Jet.sample(1.0 / 16.0);
        assert_eq!(c, Rgb::new(0, 0, 199));
    }

    #[test]
    fn test_interpolate_color_clamps() {
        let cmap = ColormapName::Viridis;
        assert_eq!(interpolate_color(-50.0, 0.0, 10.0, cmap), cmap.first());
        assert_eq!(interpolate_color(50.0, 0.0, 10.0, cmap), cmap.last());
        assert_eq!(interpolate_color(f64::INFINITY, 0.0, 10.0, cmap), cmap.last());
        assert_eq!(interpolate_color(f64::NEG_INFINITY, 0.0, 10.0, cmap), cmap.first());
    }

    #[test]
    fn test_interpolate_color_degenerate_range() {
        let cmap = ColormapName::Plasma;
        assert_eq!(interpolate_color(3.0, 3.0, 3.0, cmap), cmap.first());
        assert_eq!(interpolate_color(100.0, 3.0, 3.0, cmap), cmap.first());
        assert_eq!(interpolate_color(f64::INFINITY, 3.0, 3.0, cmap), cmap.first());
        assert_eq!(interpolate_color(f64::NAN, 0.0, 1.0, cmap), cmap.first());
    }

    #[test]
    fn test_hex_and_css_agree() {
        let c = interpolate_color(0.3, 0.0, 1.0, ColormapName::Coolwarm);
        assert_eq!(interpolate_color_hex(0.3, 0.0, 1.0, ColormapName::Coolwarm), c.to_hex());
        assert_eq!(interpolate_color_css(0.3, 0.0, 1.0, ColormapName::Coolwarm), c.to_css());
    }

    #[test]
    fn test_interpolate_colors_flat() {
        let flat = interpolate_colors_flat(&[0.0, 1.0], 0.0, 1.0, ColormapName::Thermal);
        assert_eq!(flat.len(), 6);
        assert_eq!(&flat[0..3], &[0.0, 0.0, 0.0]);
        assert_eq!(&flat[3..6], &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_color_stops() {
        let stops = color_stops(ColormapName::Jet, 3);
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].offset, 0.0);
        assert_eq!(stops[1].offset, 0.5);
        assert_eq!(stops[2].color, "rgb(127, 0, 0)");

        // fewer than two stops is widened to two
        assert_eq!(color_stops(ColormapName::Jet, 0).len(), 2);
    }

    #[test]
    fn test_gradient_css() {
        let css = gradient_css(ColormapName::Jet, 2, "to right");
        assert_eq!(
            css,
            "linear-gradient(to right, rgb(0, 0, 143) 0%, rgb(127, 0, 0) 100%)"
        );
    }

    #[test]
    fn test_gradient_css_fractional_offsets() {
        let css = gradient_css(ColormapName::Viridis, 4, "to top");
        assert!(css.contains("33.33%"));
        assert!(css.contains("66.67%"));
    }

    #[test]
    fn test_discrete_colors() {
        let colors = discrete_colors(ColormapName::Jet, 5);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], "#00008f");
        assert_eq!(colors[4], "#7f0000");

        assert!(discrete_colors(ColormapName::Jet, 0).is_empty());
        assert_eq!(discrete_colors(ColormapName::Jet, 1), vec!["#00008f".to_string()]);
    }

    #[test]
    fn test_colormap_from_str() {
        assert_eq!("viridis".parse::<ColormapName>().unwrap(), ColormapName::Viridis);
        assert_eq!(" CoolWarm ".parse::<ColormapName>().unwrap(), ColormapName::Coolwarm);
        assert!(matches!(
            "rainbow".parse::<ColormapName>(),
            Err(VizError::UnknownColormap { .. })
        ));
    }

    #[test]
    fn test_colormap_serde_name() {
        let json = serde_json::to_string(&ColormapName::Thermal).unwrap();
        assert_eq!(json, "\"thermal\"");
        let parsed: ColormapName = serde_json::from_str("\"plasma\"").unwrap();
        assert_eq!(parsed, ColormapName::Plasma);
    }
}
