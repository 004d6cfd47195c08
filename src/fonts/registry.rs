use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use skrifa::MetadataProvider;
use skrifa::raw::FontRef;
use skrifa::string::StringId;

use super::FontManager;
use crate::error::FontError;

/// One font file known to a [`FontRegistry`].
#[derive(Clone, Debug)]
pub struct RegisteredFont {
    pub path: PathBuf,
    pub family: String,
    /// Subfamily name from the `name` table, e.g. `Bold Italic`.
    pub style: String,
    data: Vec<u8>,
}

impl RegisteredFont {
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// In-process [`FontManager`] that keeps parsed font files in memory and
/// resolves family names back to their data.
///
/// [`faces`](Self::faces) and [`resolve`](Self::resolve) read an index that
/// is only refreshed by [`FontManager::rebuild_cache`]. After calling
/// `add_font` directly, `family_names` already lists the new family but
/// `faces` stays empty until the cache is rebuilt. [`FontAssets::register`]
/// rebuilds it for you.
///
/// [`FontAssets::register`]: super::FontAssets::register
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: Vec<RegisteredFont>,
    // family -> indices into `fonts`; refreshed by `rebuild_cache`
    index: HashMap<String, Vec<usize>>,
}

impl FontRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn fonts(&self) -> &[RegisteredFont] {
        &self.fonts
    }

    /// Faces of `family` as of the last cache rebuild.
    pub fn faces(&self, family: &str) -> Vec<&RegisteredFont> {
        self.index
            .get(family)
            .map(|indices| indices.iter().map(|&i| &self.fonts[i]).collect())
            .unwrap_or_default()
    }

    /// Looks up one face by family and style, ignoring ASCII case of the style.
    pub fn resolve(&self, family: &str, style: &str) -> Option<&RegisteredFont> {
        self.faces(family)
            .into_iter()
            .find(|font| font.style.eq_ignore_ascii_case(style))
    }
}

impl FontManager for FontRegistry {
    fn add_font(&mut self, path: &Path) -> Result<(), FontError> {
        let data = fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        fontdue::Font::from_bytes(data.as_slice(), fontdue::FontSettings::default()).map_err(
            |reason| FontError::InvalidFont {
                path: path.to_path_buf(),
                reason: reason.to_string(),
            },
        )?;
        let (family, style) = read_names(path, &data)?;

        let font = RegisteredFont {
            path: path.to_path_buf(),
            family,
            style,
            data,
        };
        match self.fonts.iter_mut().find(|f| f.path == font.path) {
            Some(existing) => *existing = font,
            None => self.fonts.push(font),
        }
        Ok(())
    }

    fn family_names(&self) -> BTreeSet<String> {
        self.fonts.iter().map(|font| font.family.clone()).collect()
    }

    fn rebuild_cache(&mut self) -> Result<(), FontError> {
        self.index.clear();
        for (i, font) in self.fonts.iter().enumerate() {
            self.index.entry(font.family.clone()).or_default().push(i);
        }
        Ok(())
    }
}

/// Family and subfamily from the `name` table. The typographic family
/// (name ID 16) wins over the legacy family so that every weight of a
/// superfamily lands under one name.
fn read_names(path: &Path, data: &[u8]) -> Result<(String, String), FontError> {
    let font = FontRef::new(data).map_err(|err| FontError::InvalidFont {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    let name = |id: StringId| {
        font.localized_strings(id)
            .english_or_first()
            .map(|s| s.to_string())
            .filter(|s| !s.is_empty())
    };

    let family = name(StringId::TYPOGRAPHIC_FAMILY_NAME)
        .or_else(|| name(StringId::FAMILY_NAME))
        .ok_or_else(|| FontError::InvalidFont {
            path: path.to_path_buf(),
            reason: "name table has no family name".to_string(),
        })?;
    let style = name(StringId::TYPOGRAPHIC_SUBFAMILY_NAME)
        .or_else(|| name(StringId::SUBFAMILY_NAME))
        .unwrap_or_else(|| "Regular".to_string());
    Ok((family, style))
}
