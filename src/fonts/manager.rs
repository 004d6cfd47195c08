use std::collections::BTreeSet;
use std::path::Path;

use crate::error::FontError;

/// The font-manager boundary a plotting backend exposes.
///
/// Registration only ever goes through this trait, so the process-wide
/// registry of whatever backend is in use stays owned by that backend.
pub trait FontManager {
    /// Makes one font file known to the manager.
    fn add_font(&mut self, path: &Path) -> Result<(), FontError>;

    /// Family names the manager can currently resolve.
    fn family_names(&self) -> BTreeSet<String>;

    /// Rebuilds any lookup cache after new fonts were added.
    fn rebuild_cache(&mut self) -> Result<(), FontError> {
        Err(FontError::RebuildUnsupported)
    }
}
