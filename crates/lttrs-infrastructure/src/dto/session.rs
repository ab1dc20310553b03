//! Session file DTOs.

use chrono::{DateTime, Utc};
use lttrs_core::session::SessionRecord;
use lttrs_core::word::Locale;
use serde::{Deserialize, Serialize};

/// Schema version written into every session file.
pub const SESSION_SCHEMA_VERSION: &str = "1.0.0";

fn default_schema_version() -> String {
    SESSION_SCHEMA_VERSION.to_string()
}

/// On-disk layout of `sessions/<id>.toml`.
///
/// Kept separate from [`SessionRecord`] so the file format can evolve
/// without touching the domain crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionV1_0_0 {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    pub id: String,
    pub baseword: String,
    pub locale: Locale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    pub score: u32,
    pub max_possible_score: u32,
    pub max_possible_words: usize,
    #[serde(default)]
    pub used_words: Vec<String>,
    #[serde(default)]
    pub possible_words: Vec<String>,
    #[serde(default)]
    pub is_finished: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl From<SessionRecord> for SessionV1_0_0 {
    fn from(record: SessionRecord) -> Self {
        Self {
            schema_version: default_schema_version(),
            id: record.id,
            baseword: record.baseword,
            locale: record.locale,
            player_name: record.player_name,
            score: record.score,
            max_possible_score: record.max_possible_score,
            max_possible_words: record.max_possible_words,
            used_words: record.used_words,
            possible_words: record.possible_words,
            is_finished: record.is_finished,
            created_at: record.created_at,
            updated_at: record.updated_at,
            finished_at: record.finished_at,
        }
    }
}

impl From<SessionV1_0_0> for SessionRecord {
    fn from(dto: SessionV1_0_0) -> Self {
        Self {
            id: dto.id,
            baseword: dto.baseword,
            locale: dto.locale,
            player_name: dto.player_name,
            score: dto.score,
            max_possible_score: dto.max_possible_score,
            max_possible_words: dto.max_possible_words,
            used_words: dto.used_words,
            possible_words: dto.possible_words,
            is_finished: dto.is_finished,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            finished_at: dto.finished_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = r#"
id = "5b1c7d7e-0000-4000-8000-000000000001"
baseword = "sandsack"
locale = "DE"
score = 2
max_possible_score = 10
max_possible_words = 3
used_words = ["sand"]
possible_words = ["sack", "sand", "sandsack"]
created_at = "2024-03-01T10:00:00Z"
updated_at = "2024-03-01T10:05:00Z"
"#;

    #[test]
    fn test_reads_file_without_schema_version() {
        let dto: SessionV1_0_0 = toml::from_str(FILE).unwrap();
        assert_eq!(dto.schema_version, SESSION_SCHEMA_VERSION);
        assert!(!dto.is_finished);
        assert!(dto.player_name.is_none());

        let record = SessionRecord::from(dto);
        assert_eq!(record.locale, Locale::De);
        assert_eq!(record.used_words, vec!["sand".to_string()]);
    }

    #[test]
    fn test_written_file_carries_schema_version() {
        let dto: SessionV1_0_0 = toml::from_str(FILE).unwrap();
        let written =
            toml::to_string_pretty(&SessionV1_0_0::from(SessionRecord::from(dto))).unwrap();
        assert!(written.contains("schema_version = \"1.0.0\""));
        assert!(!written.contains("finished_at"));
    }
}
