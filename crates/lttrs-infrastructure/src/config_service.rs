//! Configuration service implementation.
//!
//! Loads [`GameConfig`] from `config.toml` (by default
//! `~/.config/eightlttrs/config.toml`) and caches it.

use crate::paths::LttrsPaths;
use crate::storage::AtomicTomlFile;
use lttrs_core::config::GameConfig;
use lttrs_core::{LttrsError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Configuration service that loads and caches the game settings.
///
/// A missing file is created with defaults on first access.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<GameConfig>>>,
}

impl ConfigService {
    /// Creates a service for the settings file at `path`.
    ///
    /// Nothing is read until the first [`get_config`](Self::get_config).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service for the settings file in the default config directory.
    pub fn default_location() -> Result<Self> {
        let path = LttrsPaths::config_file().map_err(|e| LttrsError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<GameConfig> {
        if let Some(cached) = self.read_cache().as_ref() {
            return Ok(cached.clone());
        }

        let loaded = self.load_config()?;
        *self.write_cache() = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.write_cache() = None;
    }

    /// Writes `config` to disk and replaces the cached value.
    pub fn save(&self, config: &GameConfig) -> Result<()> {
        self.file().save(config)?;
        *self.write_cache() = Some(config.clone());
        tracing::debug!(path = ?self.path, "Configuration saved");
        Ok(())
    }

    /// Applies `f` to the stored configuration under a file lock.
    pub fn update<F>(&self, f: F) -> Result<GameConfig>
    where
        F: FnOnce(&mut GameConfig),
    {
        let updated = self.file().update(GameConfig::default(), |config| {
            f(config);
            Ok(())
        })?;
        *self.write_cache() = Some(updated.clone());
        Ok(updated)
    }

    fn load_config(&self) -> Result<GameConfig> {
        let file = self.file();
        match file.load()? {
            Some(config) => Ok(config),
            None => {
                let config = GameConfig::default();
                file.save(&config)?;
                tracing::info!(path = ?self.path, "Created default configuration");
                Ok(config)
            }
        }
    }

    fn file(&self) -> AtomicTomlFile<GameConfig> {
        AtomicTomlFile::new(&self.path)
    }

    // A poisoned lock only means another thread panicked mid-assignment of an
    // Option, which leaves no torn state behind.
    fn read_cache(&self) -> RwLockReadGuard<'_, Option<GameConfig>> {
        self.config.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, Option<GameConfig>> {
        self.config
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
