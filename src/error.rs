use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FontError {
    /// No font manager was supplied, so nothing can be registered.
    #[error("no font manager is available; font registration requires one")]
    CapabilityUnavailable,
    #[error("failed to read font file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a usable font: {reason}", path.display())]
    InvalidFont { path: PathBuf, reason: String },
    /// The manager has no cache to rebuild. Registration treats this as success.
    #[error("font cache rebuild is not supported by this font manager")]
    RebuildUnsupported,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("unknown palette '{0}'")]
    UnknownPalette(String),
    #[error("unknown color '{0}'")]
    UnknownColor(String),
    #[error("invalid hex color '{0}', expected #RRGGBB")]
    InvalidHex(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] ron::Error),
}
