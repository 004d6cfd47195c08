//! Fixed RSS color tables.
//!
//! Everything here is `static` data; lookups by name return
//! [`PaletteError`] for unknown keys.

mod significant;

pub use significant::{
    RSS_COLS, SIGNIF_BLUE, SIGNIF_GREEN, SIGNIF_ORANGE, SIGNIF_RED, SIGNIF_YELLOW,
};

use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::PaletteError;

/// How a palette is meant to be read, which decides how it stretches to
/// more or fewer colors in [`Palette::colors_n`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaletteKind {
    Qualitative,
    Sequential,
    Diverging,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub kind: PaletteKind,
    pub colors: &'static [Color],
}

impl Palette {
    pub fn colors(&self) -> &'static [Color] {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn reversed(&self) -> Vec<Color> {
        self.colors.iter().rev().copied().collect()
    }

    /// Returns exactly `n` colors.
    ///
    /// Qualitative palettes cycle through their entries. Sequential and
    /// diverging palettes are resampled by linear interpolation between
    /// stops, keeping the first and last stop in place.
    pub fn colors_n(&self, n: usize) -> Vec<Color> {
        if n == 0 || self.colors.is_empty() {
            return Vec::new();
        }
        match self.kind {
            PaletteKind::Qualitative => self.colors.iter().copied().cycle().take(n).collect(),
            PaletteKind::Sequential | PaletteKind::Diverging => {
                if n == 1 || self.colors.len() == 1 {
                    return vec![self.colors[0]; n];
                }
                let segments = (self.colors.len() - 1) as f32;
                (0..n)
                    .map(|i| {
                        let pos = i as f32 / (n - 1) as f32 * segments;
                        let lower = (pos.floor() as usize).min(self.colors.len() - 2);
                        self.colors[lower].lerp(self.colors[lower + 1], pos - lower as f32)
                    })
                    .collect()
            }
        }
    }
}

/// All RSS palettes, in display order.
pub static RSS_PALETTES: &[Palette] = &[
    Palette {
        name: "signif_qual",
        kind: PaletteKind::Qualitative,
        colors: &[SIGNIF_RED, SIGNIF_YELLOW, SIGNIF_BLUE, SIGNIF_ORANGE, SIGNIF_GREEN],
    },
    Palette {
        name: "rss_brand",
        kind: PaletteKind::Qualitative,
        colors: &[
            Color::from_pixel(0x1F2A44), // dark blue
            Color::from_pixel(0x0072CE), // blue
            Color::from_pixel(0x00857C), // teal
            Color::from_pixel(0x9CC4E4), // light blue
            Color::from_pixel(0x6E6E6E), // grey
        ],
    },
    Palette {
        name: "signif_seq",
        kind: PaletteKind::Sequential,
        colors: &[
            Color::from_pixel(0xF1F6FB),
            Color::from_pixel(0xC6DBEF),
            Color::from_pixel(0x9CC4E4),
            Color::from_pixel(0x4F9BD9),
            Color::from_pixel(0x0072CE),
            Color::from_pixel(0x1F2A44),
        ],
    },
    Palette {
        name: "signif_div",
        kind: PaletteKind::Diverging,
        colors: &[
            SIGNIF_RED,
            Color::from_pixel(0xE7848F),
            Color::from_pixel(0xF5F5F5), // neutral midpoint
            Color::from_pixel(0x80B8E6),
            SIGNIF_BLUE,
        ],
    },
];

pub fn palette(name: &str) -> Result<&'static Palette, PaletteError> {
    RSS_PALETTES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| PaletteError::UnknownPalette(name.to_string()))
}

pub fn palette_names() -> impl Iterator<Item = &'static str> {
    RSS_PALETTES.iter().map(|p| p.name)
}

pub fn rss_col(name: &str) -> Result<Color, PaletteError> {
    RSS_COLS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, color)| *color)
        .ok_or_else(|| PaletteError::UnknownColor(name.to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/palettes.rs"]
mod tests;
