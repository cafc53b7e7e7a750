//! Configuration handling for the inam-ui CLI.
//! Loads user configuration from the working directory, trying multiple file
//! names and formats, and falls back to defaults when nothing usable exists.

use crate::constants::CONFIG_FILES;
use crate::error::Result;
use log::{debug, warn};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// User-tunable defaults for component generation.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct InamConfig {
    /// Default directory where components are generated
    pub default_path: String,

    /// Prepend the generated file header to new components
    pub add_file_header: bool,

    /// Check for required project dependencies before generating
    pub check_dependencies: bool,

    /// Tailwind CSS major version the templates target
    pub tailwind_version: u8,
}

impl Default for InamConfig {
    fn default() -> Self {
        Self {
            default_path: "src/components/ui".to_string(),
            add_file_header: true,
            check_dependencies: true,
            tailwind_version: 4,
        }
    }
}

/// Returns the path of the first config file present in `dir`, if any.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|file| dir.join(file))
        .find(|path| path.exists())
}

/// Loads configuration from `dir`, trying the supported file names in order.
///
/// Files are parsed as JSON first, then YAML. Fields that are absent keep
/// their defaults. A file that exists but cannot be parsed logs a warning and
/// yields the defaults rather than aborting the run.
pub fn load_config(dir: &Path) -> Result<InamConfig> {
    let Some(config_path) = find_config_file(dir) else {
        debug!("No configuration file found, using defaults");
        return Ok(InamConfig::default());
    };

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(&config_path)?;

    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            warn!(
                "Could not parse {}, using defaults: {}",
                config_path.display(),
                err
            );
            Ok(InamConfig::default())
        }
    }
}

/// Parses configuration content, trying JSON first and YAML as a fallback.
pub fn parse_config(content: &str) -> std::result::Result<InamConfig, String> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| format!("invalid configuration format: {}", e)),
    }
}
