//! Categorical colors for discrete series
//!
//! Design variants, liner materials and load cases are plotted with a fixed
//! qualitative palette instead of a continuous colormap.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Qualitative palette, in assignment order
pub const CATEGORY_COLORS: [Rgb; 10] = [
    Rgb::new(31, 119, 180),
    Rgb::new(255, 127, 14),
    Rgb::new(44, 160, 44),
    Rgb::new(214, 39, 40),
    Rgb::new(148, 103, 189),
    Rgb::new(140, 86, 75),
    Rgb::new(227, 119, 194),
    Rgb::new(127, 127, 127),
    Rgb::new(188, 189, 34),
    Rgb::new(23, 190, 207),
];

/// Palette color for a category index, wrapping after the last entry
pub fn category_color(index: usize) -> Rgb {
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()]
}

/// Assigns palette colors to category names in first-seen order
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CategoryPalette {
    names: Vec<String>,
}

impl CategoryPalette {
    /// Create an empty palette
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for a category, assigning the next palette entry on first use
    pub fn color_for(&mut self, name: &str) -> Rgb {
        let index = match self.names.iter().position(|n| n == name) {
            Some(index) => index,
            None => {
                self.names.push(name.to_string());
                self.names.len() - 1
            }
        };
        category_color(index)
    }

    /// Color previously assigned to a category, if any
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(category_color)
    }

    /// Categories with their colors, in assignment order
    pub fn entries(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), category_color(i)))
    }

    /// Number of categories seen
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no category has been assigned yet
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
