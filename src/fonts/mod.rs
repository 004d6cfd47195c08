//! Bundled Source Sans Pro fonts and their registration with a font manager.

mod assets;
mod manager;
mod register;
mod registry;

pub use assets::{FontAssets, FontWeight};
pub use manager::FontManager;
pub use register::RegistrationReport;
pub use registry::{FontRegistry, RegisteredFont};

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::ThemesConfig;
use crate::error::FontError;

/// Family name the bundled fonts register under.
pub const SOURCE_SANS_FAMILY: &str = "Source Sans Pro";

/// Location of the bundled font directory. The path is returned whether or
/// not the directory exists.
pub fn get_font_path() -> PathBuf {
    FontAssets::bundled().dir().to_path_buf()
}

/// Sorted `.ttf` file names in the bundled directory; empty if it is absent.
pub fn list_available_fonts() -> Vec<String> {
    FontAssets::bundled().list()
}

/// `regular`, `italic`, `bold` and `bold_italic` mapped to their file names.
pub fn get_source_sans_weights() -> BTreeMap<&'static str, &'static str> {
    assets::weight_mapping()
}

/// Registers the bundled fonts with `manager`.
///
/// `None` means no font manager is available, which is the one hard error:
/// [`FontError::CapabilityUnavailable`]. Individual files that fail are
/// skipped. Returns whether at least one file was registered.
pub fn register_source_sans_fonts(
    manager: Option<&mut dyn FontManager>,
    verbose: bool,
) -> Result<bool, FontError> {
    FontAssets::bundled().register(manager, verbose)
}

/// Registers fonts from the configured directory with the configured verbosity.
pub fn register_configured_fonts(
    config: &ThemesConfig,
    manager: Option<&mut dyn FontManager>,
) -> Result<bool, FontError> {
    FontAssets::from_config(&config.fonts).register(manager, config.fonts.verbose)
}

/// Whether `manager` currently knows the Source Sans Pro family.
pub fn is_source_sans_available(manager: Option<&dyn FontManager>) -> bool {
    manager.is_some_and(|m| m.family_names().contains(SOURCE_SANS_FAMILY))
}

#[cfg(test)]
#[path = "../../tests/unit/fonts.rs"]
mod tests;
