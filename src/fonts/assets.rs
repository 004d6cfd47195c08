use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::FontConfig;

/// Bundled Source Sans Pro directory, relative to the crate root.
pub(crate) const BUNDLED_FONT_DIR: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/assets/fonts/source_sans_pro");

const FONT_EXTENSION: &str = "ttf";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontWeight {
    Regular,
    Italic,
    Bold,
    BoldItalic,
}

impl FontWeight {
    pub const ALL: [FontWeight; 4] = [
        FontWeight::Regular,
        FontWeight::Italic,
        FontWeight::Bold,
        FontWeight::BoldItalic,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            FontWeight::Regular => "regular",
            FontWeight::Italic => "italic",
            FontWeight::Bold => "bold",
            FontWeight::BoldItalic => "bold_italic",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            FontWeight::Regular => "SourceSansPro-Regular.ttf",
            FontWeight::Italic => "SourceSansPro-Italic.ttf",
            FontWeight::Bold => "SourceSansPro-Bold.ttf",
            FontWeight::BoldItalic => "SourceSansPro-BoldItalic.ttf",
        }
    }
}

/// Weight key to expected file name. Pure; existence is not checked.
pub fn weight_mapping() -> BTreeMap<&'static str, &'static str> {
    FontWeight::ALL
        .into_iter()
        .map(|weight| (weight.key(), weight.file_name()))
        .collect()
}

/// A directory of typeface files.
///
/// A missing directory behaves like an empty one for every read-only query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontAssets {
    dir: PathBuf,
}

impl FontAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn bundled() -> Self {
        Self::new(BUNDLED_FONT_DIR)
    }

    /// Uses the configured directory override, or the bundled one.
    pub fn from_config(config: &FontConfig) -> Self {
        match &config.directory {
            Some(dir) => Self::new(dir.clone()),
            None => Self::bundled(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full paths of the `.ttf` files, sorted by file name.
    pub fn font_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_font_file(path))
            .collect();
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        files
    }

    /// Sorted `.ttf` file names.
    pub fn list(&self) -> Vec<String> {
        self.font_files()
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect()
    }

    pub fn path_for(&self, weight: FontWeight) -> PathBuf {
        self.dir.join(weight.file_name())
    }

    /// Weights whose expected file is not in the listing.
    pub fn missing_weights(&self) -> Vec<FontWeight> {
        let listed = self.list();
        FontWeight::ALL
            .into_iter()
            .filter(|weight| !listed.iter().any(|name| name == weight.file_name()))
            .collect()
    }
}

impl Default for FontAssets {
    fn default() -> Self {
        Self::bundled()
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(FONT_EXTENSION)
}
