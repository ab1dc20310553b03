//! Error types for the eightlttrs game.
//!
//! Two layers of errors exist:
//!
//! - [`WordError`]: why a single submitted answer was rejected. These are
//!   expected during play and are rendered to the player.
//! - [`LttrsError`]: everything else the engine can report, including a
//!   wrapped [`WordError`], lifecycle violations, dictionary availability and
//!   storage failures.

use crate::word::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a submitted answer was rejected.
///
/// The variants are listed in the order the checks run. Every rejected
/// submission maps to exactly one of them.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordError {
    /// The answer was empty after trimming.
    #[error("Please enter a word")]
    EmptyInput,

    /// The answer is shorter than the minimum word length.
    #[error("'{word}' is too short, words need at least {min_length} letters")]
    TooShort { word: String, min_length: usize },

    /// The answer was already found in this session.
    #[error("'{word}' was already used")]
    AlreadyUsed { word: String },

    /// The answer needs letters the baseword does not have (or not often enough).
    #[error("'{word}' cannot be built from the letters of '{baseword}'")]
    NotConstructible { word: String, baseword: String },

    /// The answer is not part of the locale's dictionary.
    #[error("'{word}' is not in the dictionary")]
    NotInDictionary { word: String },
}

impl WordError {
    /// The rejected word, if the input was not empty.
    pub fn word(&self) -> Option<&str> {
        match self {
            Self::EmptyInput => None,
            Self::TooShort { word, .. }
            | Self::AlreadyUsed { word }
            | Self::NotConstructible { word, .. }
            | Self::NotInDictionary { word } => Some(word),
        }
    }
}

/// A shared error type for the entire eightlttrs game.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum LttrsError {
    /// A submitted answer was rejected
    #[error(transparent)]
    Word(#[from] WordError),

    /// A word cannot be used as a baseword (wrong length or alphabet)
    #[error("Invalid baseword '{word}': {reason}")]
    InvalidBaseword { word: String, reason: String },

    /// The session was already ended
    #[error("Session '{session_id}' is already finished")]
    AlreadyFinished { session_id: String },

    /// The word list for a locale could not be loaded
    #[error("Dictionary for locale {locale} is unavailable: {reason}")]
    DictionaryUnavailable { locale: Locale, reason: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LttrsError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidBaseword error
    pub fn invalid_baseword(word: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseword {
            word: word.into(),
            reason: reason.into(),
        }
    }

    /// Creates an AlreadyFinished error
    pub fn already_finished(session_id: impl Into<String>) -> Self {
        Self::AlreadyFinished {
            session_id: session_id.into(),
        }
    }

    /// Creates a DictionaryUnavailable error
    pub fn dictionary_unavailable(locale: Locale, reason: impl Into<String>) -> Self {
        Self::DictionaryUnavailable {
            locale,
            reason: reason.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Serialization error
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Returns the submission error if this is a rejected answer.
    pub fn as_word_error(&self) -> Option<&WordError> {
        match self {
            Self::Word(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this is an InvalidBaseword error
    pub fn is_invalid_baseword(&self) -> bool {
        matches!(self, Self::InvalidBaseword { .. })
    }

    /// Check if this is an AlreadyFinished error
    pub fn is_already_finished(&self) -> bool {
        matches!(self, Self::AlreadyFinished { .. })
    }

    /// Check if this is a DictionaryUnavailable error
    pub fn is_dictionary_unavailable(&self) -> bool {
        matches!(self, Self::DictionaryUnavailable { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for LttrsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for LttrsError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err.to_string())
    }
}

impl From<toml::de::Error> for LttrsError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err.to_string())
    }
}

impl From<toml::ser::Error> for LttrsError {
    fn from(err: toml::ser::Error) -> Self {
        Self::serialization("TOML", err.to_string())
    }
}

/// Conversion from anyhow::Error (used at the storage boundary)
impl From<anyhow::Error> for LttrsError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(format!("{:#}", err))
    }
}

/// A type alias for `Result<T, LttrsError>`.
pub type Result<T> = std::result::Result<T, LttrsError>;
