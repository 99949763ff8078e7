//! Configuration loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ConfigError;

use super::defaults::config_file_names;
use super::types::PublishSettings;

/// Load settings from a TOML file
pub fn load_settings(path: &Path) -> Result<PublishSettings, ConfigError> {
    info!(path = %path.display(), "loading config");

    let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
    let settings: PublishSettings = toml::from_str(&content)?;

    debug!(path = %path.display(), "config loaded");
    Ok(settings)
}

/// Find configuration file in directory or parent directories.
///
/// At each directory level the search checks:
///   1. `<dir>/<name>`          (e.g. `herald.toml`)
///   2. `<dir>/.github/<name>`  (e.g. `.github/herald.toml`)
///
/// The first match wins. Parents are walked until the filesystem root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for config file");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in config_file_names() {
            let config_path = current.join(name);
            if config_path.is_file() {
                info!(path = %config_path.display(), "found config file");
                return Some(config_path);
            }

            let github_path = current.join(".github").join(name);
            if github_path.is_file() {
                info!(path = %github_path.display(), "found config file in .github/");
                return Some(github_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no config file found");
    None
}

/// Load settings from an explicit file, or from the nearest config file.
///
/// An explicit path must exist. Without one, a missing config file yields
/// empty settings.
pub fn load_settings_or_default(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<(PublishSettings, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return Ok((load_settings(path)?, Some(path.to_path_buf())));
    }

    match find_config(dir) {
        Some(path) => Ok((load_settings(&path)?, Some(path))),
        None => {
            debug!(dir = %dir.display(), "no config found, using environment and flags only");
            Ok((PublishSettings::default(), None))
        }
    }
}
