//! RSS plot styling assets: the RSS color palettes, the significant
//! highlight colors, and the bundled Source Sans Pro typeface.
//!
//! ```no_run
//! use rss_themes::{register_source_sans_fonts, FontRegistry, SIGNIF_RED};
//!
//! let mut fonts = FontRegistry::new();
//! if register_source_sans_fonts(Some(&mut fonts), true)? {
//!     println!("highlight with {SIGNIF_RED}");
//! }
//! # Ok::<(), rss_themes::FontError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod fonts;
pub mod palettes;

pub use crate::core::Color;
pub use config::{FontConfig, PaletteConfig, ThemesConfig};
pub use error::{ConfigError, FontError, PaletteError};
pub use fonts::{
    FontAssets, FontManager, FontRegistry, FontWeight, RegisteredFont, RegistrationReport,
    SOURCE_SANS_FAMILY, get_font_path, get_source_sans_weights, is_source_sans_available,
    list_available_fonts, register_configured_fonts, register_source_sans_fonts,
};
pub use palettes::{
    Palette, PaletteKind, RSS_COLS, RSS_PALETTES, SIGNIF_BLUE, SIGNIF_GREEN, SIGNIF_ORANGE,
    SIGNIF_RED, SIGNIF_YELLOW, palette, palette_names, rss_col,
};
