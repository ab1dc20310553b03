//! Session domain module.
//!
//! This module contains the session model, its persisted record shape and
//! the repository interface.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`Session`, `Submission`, `WordProgress`)
//! - `record`: Storage-agnostic persisted shape (`SessionRecord`)
//! - `repository`: Repository trait for session persistence

mod model;
mod record;
mod repository;

// Re-export public API
pub use model::{Session, Submission, WordProgress};
pub use record::SessionRecord;
pub use repository::SessionRepository;
