//! Session domain model.
//!
//! This module contains the core Session entity that represents
//! one playthrough of a baseword.

use super::record::SessionRecord;
use crate::dictionary::{Dictionary, enumerate_possible_words};
use crate::error::{LttrsError, Result, WordError};
use crate::word::{
    Baseword, Locale, MIN_WORD_LENGTH, is_constructible, normalize, score_of, total_score,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

/// One game on a baseword.
///
/// A session contains:
/// - The baseword and, derived from it once, every possible word
/// - The words found so far, in the order they were submitted
/// - The running score and the maximum achievable score
/// - Completion data (player name, finish time) once the game was ended
///
/// Fields are only changed through [`Session::submit`] and [`Session::finish`],
/// so the following always hold:
/// - `used_words` has no duplicates and is a subset of `possible_words`
/// - `score` is the sum of [`score_of`] over `used_words`
/// - a finished session never changes again
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: String,
    baseword: Baseword,
    used_words: Vec<String>,
    possible_words: BTreeSet<String>,
    score: u32,
    max_possible_score: u32,
    player_name: Option<String>,
    is_finished: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

/// Result of an accepted answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The normalized word that was accepted
    pub word: String,
    /// Points the word earned
    pub points: u32,
    /// Session score after the word was added
    pub total_score: u32,
    /// Number of words found so far
    pub words_found: usize,
}

/// A possible word and whether it was found yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordProgress {
    pub word: String,
    pub found: bool,
}

impl Session {
    /// Creates a fresh session from an already enumerated word set.
    pub fn new(baseword: Baseword, possible_words: BTreeSet<String>) -> Self {
        let now = Utc::now();
        let max_possible_score = total_score(possible_words.iter().map(String::as_str));

        Self {
            id: Uuid::new_v4().to_string(),
            baseword,
            used_words: Vec::new(),
            possible_words,
            score: 0,
            max_possible_score,
            player_name: None,
            is_finished: false,
            created_at: now,
            updated_at: now,
            finished_at: None,
        }
    }

    /// Creates a fresh session, enumerating possible words from `dictionary`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBaseword` if the dictionary belongs to another locale.
    pub fn start(baseword: Baseword, dictionary: &Dictionary) -> Result<Self> {
        if baseword.locale() != dictionary.locale() {
            return Err(LttrsError::invalid_baseword(
                baseword.as_str(),
                format!(
                    "baseword is {} but the dictionary is {}",
                    baseword.locale(),
                    dictionary.locale()
                ),
            ));
        }

        let possible_words = enumerate_possible_words(&baseword, dictionary);
        Ok(Self::new(baseword, possible_words))
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn baseword(&self) -> &Baseword {
        &self.baseword
    }

    pub fn locale(&self) -> Locale {
        self.baseword.locale()
    }

    /// Found words, oldest first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn possible_words(&self) -> &BTreeSet<String> {
        &self.possible_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn max_possible_score(&self) -> u32 {
        self.max_possible_score
    }

    pub fn max_possible_words(&self) -> usize {
        self.possible_words.len()
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.is_finished
    }

    /// True while no word has been found.
    pub fn is_untouched(&self) -> bool {
        self.used_words.is_empty()
    }

    /// True once every possible word was found.
    pub fn is_complete(&self) -> bool {
        !self.possible_words.is_empty() && self.used_words.len() == self.possible_words.len()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// The string another player passes to start a game on the same baseword.
    pub fn share_code(&self) -> String {
        self.baseword.share_code()
    }

    /// Every possible word in sorted order, marked as found or not.
    pub fn word_progress(&self) -> Vec<WordProgress> {
        self.possible_words
            .iter()
            .map(|word| WordProgress {
                word: word.clone(),
                found: self.used_words.contains(word),
            })
            .collect()
    }

    // ============================================================================
    // State transitions
    // ============================================================================

    /// Validates an answer without touching the session.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// empty, too short, already used, not constructible, not in dictionary.
    /// On success the normalized word is returned.
    pub fn check_answer(
        &self,
        raw: &str,
        dictionary: &Dictionary,
    ) -> std::result::Result<String, WordError> {
        let word = normalize(raw);

        if word.is_empty() {
            return Err(WordError::EmptyInput);
        }

        if word.chars().count() < MIN_WORD_LENGTH {
            return Err(WordError::TooShort {
                word,
                min_length: MIN_WORD_LENGTH,
            });
        }

        if self.used_words.contains(&word) {
            return Err(WordError::AlreadyUsed { word });
        }

        if !is_constructible(&word, self.baseword.as_str()) {
            return Err(WordError::NotConstructible {
                word,
                baseword: self.baseword.display_form(),
            });
        }

        // possible_words came from the same dictionary; checking both keeps
        // used_words a subset even if the word list changed since creation.
        if !dictionary.contains(&word) || !self.possible_words.contains(&word) {
            return Err(WordError::NotInDictionary { word });
        }

        Ok(word)
    }

    /// Submits an answer.
    ///
    /// All validation happens before the single mutation, so a rejected
    /// answer leaves the session untouched.
    ///
    /// # Errors
    ///
    /// - `AlreadyFinished` if the session was ended
    /// - `Word(_)` with the first failed check (see [`Session::check_answer`])
    pub fn submit(&mut self, raw: &str, dictionary: &Dictionary) -> Result<Submission> {
        if self.is_finished {
            return Err(LttrsError::already_finished(&self.id));
        }

        let word = self.check_answer(raw, dictionary)?;
        let points = score_of(&word);

        self.used_words.push(word.clone());
        self.score += points;
        self.updated_at = Utc::now();

        Ok(Submission {
            word,
            points,
            total_score: self.score,
            words_found: self.used_words.len(),
        })
    }

    /// Ends the session under `player_name`.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyFinished` if the session was ended before; the session
    /// is not modified in that case.
    pub fn finish(&mut self, player_name: impl Into<String>) -> Result<()> {
        if self.is_finished {
            return Err(LttrsError::already_finished(&self.id));
        }

        let now = Utc::now();
        self.player_name = Some(player_name.into());
        self.is_finished = true;
        self.finished_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    // ============================================================================
    // Persistence mapping
    // ============================================================================

    /// Projects the session onto its persisted shape.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            id: self.id.clone(),
            baseword: self.baseword.as_str().to_string(),
            locale: self.locale(),
            player_name: self.player_name.clone(),
            score: self.score,
            max_possible_score: self.max_possible_score,
            max_possible_words: self.possible_words.len(),
            used_words: self.used_words.clone(),
            possible_words: self.possible_words.iter().cloned().collect(),
            is_finished: self.is_finished,
            created_at: self.created_at,
            updated_at: self.updated_at,
            finished_at: self.finished_at,
        }
    }

    /// Rebuilds a session from a persisted record, re-checking its invariants.
    ///
    /// # Errors
    ///
    /// - `InvalidBaseword` if the stored baseword is malformed
    /// - `DataAccess` if the stored words or scores contradict each other
    pub fn from_record(record: SessionRecord) -> Result<Self> {
        let baseword = Baseword::parse(&record.baseword, record.locale)?;
        let corrupt = |reason: String| {
            LttrsError::data_access(format!("Session '{}' is inconsistent: {}", record.id, reason))
        };

        let possible_words: BTreeSet<String> =
            record.possible_words.iter().map(|w| normalize(w)).collect();

        let mut used_words: Vec<String> = Vec::with_capacity(record.used_words.len());
        for word in record.used_words.iter().map(|w| normalize(w)) {
            if !possible_words.contains(&word) {
                return Err(corrupt(format!("'{}' is not a possible word", word)));
            }
            if used_words.contains(&word) {
                return Err(corrupt(format!("'{}' was used twice", word)));
            }
            used_words.push(word);
        }

        let score = total_score(used_words.iter().map(String::as_str));
        if score != record.score {
            return Err(corrupt(format!(
                "stored score {} does not match words worth {}",
                record.score, score
            )));
        }

        let max_possible_score = total_score(possible_words.iter().map(String::as_str));
        if max_possible_score != record.max_possible_score
            || possible_words.len() != record.max_possible_words
        {
            tracing::warn!(
                session_id = %record.id,
                "Stored maximums differ from possible words, using recomputed values"
            );
        }

        let finished_at = match (record.is_finished, record.finished_at) {
            (true, None) => Some(record.updated_at),
            (false, Some(_)) => return Err(corrupt("finish time on an unfinished session".into())),
            (_, finished_at) => finished_at,
        };

        Ok(Self {
            id: record.id,
            baseword,
            used_words,
            possible_words,
            score,
            max_possible_score,
            player_name: record.player_name,
            is_finished: record.is_finished,
            created_at: record.created_at,
            updated_at: record.updated_at,
            finished_at,
        })
    }
}
