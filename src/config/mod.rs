// Author: kelexine (https://github.com/kelexine)
// config/mod.rs — Global configuration loader

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::models::Thresholds;

/// Represents the structure of the global `config.toml`.
#[derive(Deserialize, Default, Debug, PartialEq, Eq)]
pub struct GlobalConfig {
    pub max_file_lines: Option<usize>,
    pub max_function_lines: Option<usize>,
    pub max_complexity: Option<usize>,
    pub max_files: Option<usize>,
    pub parallel: Option<bool>,
}

impl GlobalConfig {
    /// `<config_dir>/code-stats/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("code-stats");
            path.push("config.toml");
            path
        })
    }

    /// Attempt to load the global configuration, returning a default instance if it fails or missing.
    pub fn load() -> Self {
        Self::default_path()
            .map(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    debug!("loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Config values layered over the built-in defaults.
    pub fn thresholds(&self) -> Thresholds {
        let base = Thresholds::default();
        Thresholds {
            max_file_lines: self.max_file_lines.unwrap_or(base.max_file_lines),
            max_function_lines: self.max_function_lines.unwrap_or(base.max_function_lines),
            max_complexity: self.max_complexity.unwrap_or(base.max_complexity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_config_layers_over_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_complexity = 7\nparallel = false\n").unwrap();

        let config = GlobalConfig::load_from(&path);
        assert_eq!(config.parallel, Some(false));
        let t = config.thresholds();
        assert_eq!(t.max_complexity, 7);
        assert_eq!(t.max_file_lines, 300);
        assert_eq!(t.max_function_lines, 50);
    }

    #[test]
    fn test_malformed_or_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert_eq!(GlobalConfig::load_from(&path), GlobalConfig::default());

        std::fs::write(&path, "max_complexity = \"lots\"").unwrap();
        assert_eq!(GlobalConfig::load_from(&path), GlobalConfig::default());
    }
}
