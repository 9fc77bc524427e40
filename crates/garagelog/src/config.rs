//! # Configuration
//!
//! Garage configuration is managed by [`confique`], which handles layered
//! loading from environment variables, a TOML file, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `GARAGELOG_DATA_DIR`, `GARAGELOG_MOT_WARN_DAYS`,
//!    `GARAGELOG_RECENT_MODS`.
//! 2. **Config file**: the optional `garagelog.toml` passed to [`GarageConfig::load`].
//! 3. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | OS data dir (via `directories`) | Where the record files live |
//! | `mot_warn_days` | `30` | MOT countdown turns to "warn" within this many days |
//! | `recent_mods` | `5` | How many mods the garage summary lists |

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GarageError, Result};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GarageConfig {
    /// Directory holding the record files. Defaults to the OS data directory.
    #[config(env = "GARAGELOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Days before MOT expiry at which the countdown starts warning.
    #[config(env = "GARAGELOG_MOT_WARN_DAYS", default = 30)]
    pub mot_warn_days: u32,

    /// Number of most recent mods included in the garage summary.
    #[config(env = "GARAGELOG_RECENT_MODS", default = 5)]
    pub recent_mods: usize,
}

impl Default for GarageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            mot_warn_days: 30,
            recent_mods: 5,
        }
    }
}

impl GarageConfig {
    /// Load from the environment, then `file` (if given and present), then defaults.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder.load().map_err(GarageError::Config)
    }

    /// The configured data directory, or the OS default for this app.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("", "", "garagelog")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| GarageError::Store("No home directory to place garage data in".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GarageConfig::default();
        assert_eq!(config.mot_warn_days, 30);
        assert_eq!(config.recent_mods, 5);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = GarageConfig {
            data_dir: Some(PathBuf::from("/tmp/garage")),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_data_dir().unwrap(),
            PathBuf::from("/tmp/garage")
        );
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garagelog.toml");
        let written = GarageConfig {
            data_dir: Some(dir.path().join("data")),
            mot_warn_days: 14,
            recent_mods: 3,
        };
        std::fs::write(&path, toml::to_string(&written).unwrap()).unwrap();

        let loaded = GarageConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.mot_warn_days, 14);
        assert_eq!(loaded.recent_mods, 3);
        assert_eq!(loaded.data_dir, Some(dir.path().join("data")));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = GarageConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(loaded.mot_warn_days, 30);
        assert_eq!(loaded.recent_mods, 5);
    }
}
