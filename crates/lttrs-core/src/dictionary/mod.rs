//! Dictionary domain module.
//!
//! # Module Structure
//!
//! - `model`: per-locale word index (`Dictionary`)
//! - `source`: trait for loading raw word lists (`WordSource`, `WordList`)
//! - `enumerator`: possible-word enumeration for a baseword

mod enumerator;
mod model;
mod source;

// Re-export public API
pub use enumerator::enumerate_possible_words;
pub use model::Dictionary;
pub use source::{WordList, WordSource};
