//! Atomic TOML file operations.
//!
//! Session and settings files are written through [`AtomicTomlFile`] so a
//! crash in the middle of a write never leaves a half-written game behind.

use fs2::FileExt;
use lttrs_core::LttrsError;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during atomic TOML operations.
#[derive(Debug, Error)]
pub enum AtomicTomlError {
    /// File I/O error.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML deserialization error.
    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// File locking error.
    #[error("Failed to lock {path}: {message}")]
    Lock { path: PathBuf, message: String },
}

impl From<AtomicTomlError> for LttrsError {
    fn from(err: AtomicTomlError) -> Self {
        match err {
            AtomicTomlError::Io { .. } => LttrsError::io(err.to_string()),
            AtomicTomlError::Parse { .. } | AtomicTomlError::Serialize(_) => {
                LttrsError::serialization("TOML", err.to_string())
            }
            AtomicTomlError::Lock { .. } => LttrsError::data_access(err.to_string()),
        }
    }
}

/// A handle to a TOML file that is replaced atomically on every write.
///
/// Provides:
/// - **Atomicity**: tmp file + rename, readers see the old or the new file
/// - **Isolation**: `update` holds an exclusive lock across read-modify-write
/// - **Durability**: the tmp file is fsynced before the rename
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>, AtomicTomlError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| AtomicTomlError::Parse {
                path: self.path.clone(),
                source,
            })
    }

    /// Saves `data` atomically, creating the parent directory if needed.
    pub fn save(&self, data: &T) -> Result<(), AtomicTomlError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let toml_string = toml::to_string_pretty(data)?;

        // Same directory as the target so the rename stays on one filesystem
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path).map_err(|e| self.io_error(e))?;
        tmp_file
            .write_all(toml_string.as_bytes())
            .and_then(|_| tmp_file.sync_all())
            .map_err(|e| self.io_error(e))?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            self.io_error(e)
        })
    }

    /// Performs a read-modify-write under an exclusive lock.
    ///
    /// `default_value` is used when the file doesn't exist yet. Nothing is
    /// written if `f` fails.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<T, AtomicTomlError>
    where
        F: FnOnce(&mut T) -> Result<(), AtomicTomlError>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = self.load()?.unwrap_or(default_value);
        f(&mut data)?;
        self.save(&data)?;

        Ok(data)
    }

    /// Deletes the file. A missing file is not an error.
    pub fn remove(&self) -> Result<(), AtomicTomlError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn temp_path(&self) -> Result<PathBuf, AtomicTomlError> {
        let invalid = |message: &str| {
            self.io_error(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                message.to_string(),
            ))
        };

        let parent = self
            .path
            .parent()
            .ok_or_else(|| invalid("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| invalid("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }

    fn io_error(&self, source: std::io::Error) -> AtomicTomlError {
        AtomicTomlError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Exclusive lock on `<file>.lock`, released on drop.
struct FileLock {
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, AtomicTomlError> {
        let lock_path = path.with_extension("lock");
        let io_error = |source| AtomicTomlError::Io {
            path: lock_path.clone(),
            source,
        };

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(io_error)?;

        file.lock_exclusive().map_err(|e| AtomicTomlError::Lock {
            path: lock_path.clone(),
            message: e.to_string(),
        })?;

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        let _ = fs::remove_file(&self.lock_path);
    }
}
