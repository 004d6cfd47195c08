use std::path::PathBuf;

use super::{FontAssets, FontManager};
use crate::error::FontError;

/// Outcome of one registration pass.
#[derive(Debug, Default)]
pub struct RegistrationReport {
    pub registered: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, FontError)>,
}

impl RegistrationReport {
    pub fn any_registered(&self) -> bool {
        !self.registered.is_empty()
    }
}

// Verbose runs report at info/warn, quiet runs keep the same messages at debug.
macro_rules! report {
    ($verbose:expr, $level:ident, $($arg:tt)+) => {
        if $verbose {
            log::$level!($($arg)+);
        } else {
            log::debug!($($arg)+);
        }
    };
}

impl FontAssets {
    /// Registers every `.ttf` file with `manager`.
    ///
    /// Returns `true` iff at least one file was accepted. A missing or empty
    /// directory, or a batch where every file fails, yields `false`.
    pub fn register(
        &self,
        manager: Option<&mut dyn FontManager>,
        verbose: bool,
    ) -> Result<bool, FontError> {
        Ok(self.register_with_report(manager, verbose)?.any_registered())
    }

    /// Like [`FontAssets::register`], but keeps every per-file failure.
    pub fn register_with_report(
        &self,
        manager: Option<&mut dyn FontManager>,
        verbose: bool,
    ) -> Result<RegistrationReport, FontError> {
        let manager = manager.ok_or(FontError::CapabilityUnavailable)?;
        let mut report = RegistrationReport::default();

        if !self.dir().is_dir() {
            report!(verbose, info, "Font directory not found: {}", self.dir().display());
            return Ok(report);
        }
        let files = self.font_files();
        if files.is_empty() {
            report!(verbose, info, "No font files found in: {}", self.dir().display());
            return Ok(report);
        }

        for path in files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match manager.add_font(&path) {
                Ok(()) => {
                    report!(verbose, info, "Registered: {name}");
                    report.registered.push(path);
                }
                Err(err) => {
                    report!(verbose, warn, "Failed to register {name}: {err}");
                    report.failed.push((path, err));
                }
            }
        }

        if report.any_registered() {
            match manager.rebuild_cache() {
                Ok(()) | Err(FontError::RebuildUnsupported) => {}
                Err(err) => log::debug!("font cache rebuild failed: {err}"),
            }
            report!(
                verbose,
                info,
                "Successfully registered {} font(s)",
                report.registered.len()
            );
        }

        Ok(report)
    }
}
