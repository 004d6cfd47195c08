use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;
use crate::palettes::{self, Palette};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemesConfig {
    pub fonts: FontConfig,
    pub palette: PaletteConfig,
}

impl ThemesConfig {
    /// Resolves the configured default palette name.
    pub fn default_palette(&self) -> Result<&'static Palette, PaletteError> {
        palettes::palette(&self.palette.default)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Replaces the bundled font directory when set.
    pub directory: Option<PathBuf>,
    pub verbose: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub default: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            default: "signif_qual".to_string(),
        }
    }
}
