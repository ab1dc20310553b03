//! Domain layer of eightlttrs.
//!
//! Contains the game rules (letter matching, scoring, baseword validation),
//! the per-locale dictionary, the session model and the repository
//! interfaces the other layers implement.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod highscore;
pub mod session;
pub mod word;

// Re-export common error type
pub use error::{LttrsError, Result, WordError};
