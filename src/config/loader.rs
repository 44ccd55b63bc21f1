use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};

use super::core::WordFreqsConfig;

pub const CONFIG_FILE_NAME: &str = ".wordfreqs.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse config from a TOML string
pub fn parse_config(contents: &str, path: &Path) -> Result<WordFreqsConfig> {
    toml::from_str::<WordFreqsConfig>(contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load an explicitly requested config file. Any failure is an error.
pub fn load_config_from_path(path: &Path) -> Result<WordFreqsConfig> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io_with_path("Failed to read config file", path, e))?;
    let config = parse_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file, warning rather than failing
fn try_load_config_from_path(config_path: &Path) -> Option<WordFreqsConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents, config_path) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Generate directory ancestors up to a depth limit
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

/// Discover `.wordfreqs.toml` from `start` upwards, falling back to defaults.
pub fn discover_config(start: PathBuf) -> WordFreqsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            WordFreqsConfig::default()
        })
}

/// Discover config starting at the current directory.
pub fn load_config() -> WordFreqsConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            WordFreqsConfig::default()
        }
    }
}
