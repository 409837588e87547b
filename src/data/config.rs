use crate::data::error::ConfigError;
use crate::models::{is_hex_color, StatusColorMap};
use std::path::{Path, PathBuf};

/// Data file used when nothing else is configured (relative to the working directory)
pub const DEFAULT_DATA_LOCATION: &str = "data/joined_projects_data.csv";

/// Dashboard configuration
///
/// Read from `~/.pmdash/rc`, one `key=value` per line:
///
/// ```text
/// # where the project export lives (relative paths resolve against this file)
/// data.location=./joined_projects_data.csv
/// # per-status colors and the fallback for unknown statuses
/// color.atrasado=#FF8C00
/// color.fallback=#A9A9A9
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_location: PathBuf,
    pub colors: StatusColorMap,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_location: PathBuf::from(DEFAULT_DATA_LOCATION),
            colors: StatusColorMap::default(),
        }
    }
}

impl Config {
    /// Get the configuration file path, if a home directory is known
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".pmdash").join("rc"))
    }

    /// Load the user configuration, or defaults when no rc file exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        log::debug!("Reading configuration from {}", path.display());
        Self::parse(&content, base_dir)
    }

    /// Parse rc content; relative `data.location` values resolve against `base_dir`
    pub fn parse(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::InvalidLine {
                line: line_no,
                content: line.to_string(),
            })?;
            let key = key.trim();
            let value = value.trim();

            if key == "data.location" {
                let path = PathBuf::from(value);
                config.data_location = if path.is_relative() {
                    base_dir.join(path)
                } else {
                    path
                };
            } else if let Some(status) = key.strip_prefix("color.") {
                if !is_hex_color(value) {
                    return Err(ConfigError::InvalidColor {
                        line: line_no,
                        key: key.to_string(),
                        value: value.to_string(),
                    });
                }
                if status == "fallback" {
                    config.colors.set_fallback(value);
                } else {
                    config.colors.set(status, value);
                }
            } else {
                log::warn!("Ignoring unknown configuration key '{}' on line {}", key, line_no);
            }
        }

        Ok(config)
    }
}
