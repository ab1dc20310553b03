//! Persisted shape of a session.

use crate::word::Locale;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The logical record every session store has to keep.
///
/// This is a plain data carrier; [`Session::from_record`](super::Session::from_record)
/// re-validates it before play continues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub baseword: String,
    pub locale: Locale,
    pub player_name: Option<String>,
    pub score: u32,
    pub max_possible_score: u32,
    pub max_possible_words: usize,
    pub used_words: Vec<String>,
    pub possible_words: Vec<String>,
    pub is_finished: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}
