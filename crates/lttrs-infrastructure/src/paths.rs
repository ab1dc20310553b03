//! Unified path management for eightlttrs files.
//!
//! Settings live in the platform config directory, everything the game
//! produces or reads in bulk (sessions, word lists, logs) in the data
//! directory.

use std::path::PathBuf;
use thiserror::Error;

const APP_DIR: &str = "eightlttrs";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Platform directory could not be determined.
    #[error("Cannot find the {0} directory")]
    DirNotFound(&'static str),
}

/// Unified path management for eightlttrs.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/eightlttrs/            # Config directory
/// └── config.toml                  # User settings
///
/// ~/.local/share/eightlttrs/       # Data directory
/// ├── sessions/                    # One TOML file per session
/// ├── dictionaries/                # <LOCALE>.txt word lists
/// └── logs/                        # lttrs.log.YYYY-MM-DD
/// ```
pub struct LttrsPaths;

impl LttrsPaths {
    /// Returns the eightlttrs configuration directory (e.g. `~/.config/eightlttrs/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DirNotFound("config"))
    }

    /// Returns the eightlttrs data directory (e.g. `~/.local/share/eightlttrs/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::DirNotFound("data"))
    }

    /// Returns the path to the settings file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the directory session files are stored in.
    pub fn sessions_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("sessions"))
    }

    /// Returns the directory word lists are read from.
    pub fn dictionaries_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("dictionaries"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = LttrsPaths::config_file().unwrap();
        assert!(config_file.ends_with("eightlttrs/config.toml"));
        assert!(config_file.starts_with(LttrsPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_data_subdirectories() {
        let data_dir = LttrsPaths::data_dir().unwrap();
        assert!(data_dir.ends_with(APP_DIR));

        for dir in [
            LttrsPaths::sessions_dir().unwrap(),
            LttrsPaths::dictionaries_dir().unwrap(),
            LttrsPaths::logs_dir().unwrap(),
        ] {
            assert!(dir.starts_with(&data_dir));
        }
    }
}
