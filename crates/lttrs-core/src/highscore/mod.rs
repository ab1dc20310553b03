//! Highscore ranking of finished sessions.

mod model;

pub use model::{HighscoreEntry, rank_sessions, ranking_order};
