//! Highscore projection of finished sessions.

use crate::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A finished session as shown in the highscore list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    /// 1-based position in the list
    pub rank: usize,
    pub session_id: String,
    pub player_name: String,
    /// Display form of the baseword that was played
    pub baseword: String,
    pub score: u32,
    pub max_possible_score: u32,
    pub words_found: usize,
    pub max_possible_words: usize,
    pub finished_at: DateTime<Utc>,
}

/// Highscore ordering: higher score first, then earlier completion, then id.
pub fn ranking_order(a: &Session, b: &Session) -> Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| completion_time(a).cmp(&completion_time(b)))
        .then_with(|| a.id().cmp(b.id()))
}

fn completion_time(session: &Session) -> DateTime<Utc> {
    session.finished_at().unwrap_or_else(|| session.updated_at())
}

/// Ranks finished sessions. Unfinished sessions are ignored.
pub fn rank_sessions(sessions: impl IntoIterator<Item = Session>) -> Vec<HighscoreEntry> {
    let mut finished: Vec<Session> = sessions.into_iter().filter(Session::is_finished).collect();
    finished.sort_by(ranking_order);

    finished
        .iter()
        .enumerate()
        .map(|(index, session)| HighscoreEntry {
            rank: index + 1,
            session_id: session.id().to_string(),
            player_name: session.player_name().unwrap_or_default().to_string(),
            baseword: session.baseword().display_form(),
            score: session.score(),
            max_possible_score: session.max_possible_score(),
            words_found: session.used_words().len(),
            max_possible_words: session.max_possible_words(),
            finished_at: completion_time(session),
        })
        .collect()
}
