//! User configuration
//!
//! Stored in `~/.config/casekit/config.yaml`. Every field has a default, so a
//! partial (or missing) file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::DEFAULT_HISTORY_LIMIT;

/// casekit configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum undo snapshots kept (0 = unbounded)
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// File name used by "download" when none is given
    #[serde(default = "default_download_filename")]
    pub download_filename: String,

    /// Directory downloads are written to (current directory if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_download_filename() -> String {
    "converted-text.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            download_filename: default_download_filename(),
            download_dir: None,
        }
    }
}

impl Config {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Where a download named `filename` (or the default name) lands
    pub fn download_path(&self, filename: Option<&str>) -> PathBuf {
        let name = filename
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.download_filename);
        match &self.download_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_path_defaults() {
        let config = Config::default();
        assert_eq!(
            config.download_path(None),
            PathBuf::from("converted-text.txt")
        );
        assert_eq!(config.download_path(Some("  ")), PathBuf::from("converted-text.txt"));
        assert_eq!(config.download_path(Some("out.txt")), PathBuf::from("out.txt"));
    }

    #[test]
    fn test_download_path_with_dir() {
        let config = Config {
            download_dir: Some(PathBuf::from("/tmp/exports")),
            ..Config::default()
        };
        assert_eq!(
            config.download_path(Some("a.txt")),
            PathBuf::from("/tmp/exports/a.txt")
        );
    }
}
