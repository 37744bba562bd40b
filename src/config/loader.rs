use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::core::CallmetaConfig;
use crate::core::{Error, Result};

/// Name of the configuration file looked up in the working directory and
/// its ancestors.
pub const CONFIG_FILE_NAME: &str = ".callmeta.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse configuration from a TOML string
pub fn parse_config(contents: &str) -> Result<CallmetaConfig> {
    toml::from_str::<CallmetaConfig>(contents).map_err(Error::from)
}

/// Load an explicitly requested configuration file. Errors are fatal.
pub fn load_config_from(path: &Path) -> Result<CallmetaConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    parse_config(&contents).map_err(|e| {
        Error::Configuration(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Try a discovered configuration file. Unreadable or invalid files are
/// skipped with a warning.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CallmetaConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("Invalid config {}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// `start` followed by its parents, at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a configuration file.
pub fn load_config_in(start: PathBuf) -> CallmetaConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CallmetaConfig::default()
        })
}

/// Search from the current directory.
pub fn load_config() -> CallmetaConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_in(dir),
        Err(e) => {
            warn!("Failed to get current directory: {}. Using default config.", e);
            CallmetaConfig::default()
        }
    }
}
