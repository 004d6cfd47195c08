use std::fs;
use std::path::{Path, PathBuf};

use super::ThemesConfig;
use crate::error::ConfigError;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/rss-themes/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("rss-themes").join("config.ron"))
}

/// Loads the config from disk, falling back to defaults on any error.
pub fn load_config() -> ThemesConfig {
    let Some(path) = config_path() else {
        return ThemesConfig::default();
    };
    if !path.is_file() {
        return ThemesConfig::default();
    }
    match load_config_from(&path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{err}; using default config");
            ThemesConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<ThemesConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Persists the config to disk. Errors are logged and otherwise ignored.
pub fn save_config(config: &ThemesConfig) {
    let Some(path) = config_path() else {
        return;
    };
    if let Err(err) = save_config_to(config, &path) {
        log::debug!("{err}");
    }
}

pub fn save_config_to(config: &ThemesConfig, path: &Path) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, serialized).map_err(io_err)
}
