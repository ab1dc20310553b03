//! Game configuration model.

use crate::word::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name stored on a finished session when the player left it blank.
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// User settings, persisted as `config.toml`.
///
/// Every field has a default so a partial or missing file still loads.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Locale new games are started in
    pub locale: Locale,
    /// Name used when ending a game without one
    pub default_player_name: String,
    /// Directory holding `<LOCALE>.txt` word lists, overrides the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary_dir: Option<PathBuf>,
    /// Directory holding session files, overrides the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions_dir: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_player_name: DEFAULT_PLAYER_NAME.to_string(),
            dictionary_dir: None,
            sessions_dir: None,
        }
    }
}
