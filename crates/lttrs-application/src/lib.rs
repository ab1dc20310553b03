//! Application layer for eightlttrs.
//!
//! This crate provides the use cases that coordinate the domain rules in
//! `lttrs-core` with whatever storage and word source the caller injects.

pub mod baseword_picker;
pub mod dictionary_cache;
pub mod game_service;

pub use baseword_picker::BasewordPicker;
pub use dictionary_cache::DictionaryCache;
pub use game_service::{GameMode, GameService, ResetOutcome};
