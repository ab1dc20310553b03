//! Terminal rendering of game state.

use colored::Colorize;
use lttrs_core::WordError;
use lttrs_core::highscore::HighscoreEntry;
use lttrs_core::session::{Session, Submission, WordProgress};
use std::collections::BTreeMap;

pub fn print_banner() {
    println!("{}", "=== eightlttrs ===".bright_magenta().bold());
    println!(
        "{}",
        "Type words to submit them, ':help' for commands, ':quit' to leave.".bright_black()
    );
    println!();
}

pub fn print_help() {
    let commands = [
        (":words", "found words and what is left per length"),
        (":score", "current score"),
        (":share", "code to play this baseword with a friend"),
        (":end [name]", "finish this game and enter the highscores"),
        (":reset", "throw this game away and start a new one"),
        (":highscores", "best finished games"),
        (":locale [code]", "show or switch the language of new games"),
        (":quit", "leave (the game is saved)"),
    ];
    for (command, description) in commands {
        println!("  {:<16} {}", command.bright_cyan(), description);
    }
}

pub fn print_session(session: &Session) {
    println!(
        "{} {}  {}",
        "Baseword:".bright_black(),
        spaced(&session.baseword().share_code()).bright_yellow().bold(),
        format!("({})", session.locale()).bright_black()
    );
    print_score(session);
}

pub fn print_score(session: &Session) {
    println!(
        "{} {} / {}   {} {} / {}",
        "Score:".bright_black(),
        session.score().to_string().bright_green(),
        session.max_possible_score(),
        "Words:".bright_black(),
        session.used_words().len().to_string().bright_green(),
        session.max_possible_words()
    );
}

pub fn print_submission(submission: &Submission, session: &Session) {
    println!(
        "{} {} {}",
        "✓".bright_green(),
        submission.word.green().bold(),
        format!("+{}", submission.points).bright_green()
    );
    if session.is_complete() {
        println!("{}", "You found every word!".bright_magenta().bold());
    }
}

pub fn print_word_error(err: &WordError) {
    let line = format!("✗ {}", err);
    match err {
        WordError::AlreadyUsed { .. } | WordError::EmptyInput => println!("{}", line.yellow()),
        _ => println!("{}", line.red()),
    }
}

pub fn print_error(err: &impl std::fmt::Display) {
    eprintln!("{}", format!("Error: {}", err).red());
}

pub fn print_info(message: &str) {
    println!("{}", message.bright_black());
}

/// Found words grouped by length, plus how many are still missing.
pub fn print_found_words(session: &Session) {
    for (length, words) in group_by_length(&session.word_progress()) {
        let found: Vec<&str> = words
            .iter()
            .filter(|w| w.found)
            .map(|w| w.word.as_str())
            .collect();
        let missing = words.len() - found.len();

        let mut line = format!("  {} letters: {}", length, found.join(", "));
        if missing > 0 {
            line.push_str(&format!(
                "{}{} missing",
                if found.is_empty() { "" } else { "  " },
                missing
            ));
        }
        println!("{}", line);
    }
}

/// Every possible word, found ones highlighted.
pub fn print_solution(session: &Session) {
    for (length, words) in group_by_length(&session.word_progress()) {
        let rendered: Vec<String> = words
            .iter()
            .map(|w| {
                if w.found {
                    w.word.green().to_string()
                } else {
                    w.word.bright_black().to_string()
                }
            })
            .collect();
        println!("  {} letters: {}", length, rendered.join(", "));
    }
}

pub fn print_highscores(entries: &[HighscoreEntry]) {
    if entries.is_empty() {
        print_info("No finished games yet.");
        return;
    }

    println!(
        "{}",
        format!(
            "{:>4}  {:<16} {:<10} {:>7} {:>9}  {}",
            "#", "Player", "Baseword", "Score", "Words", "Finished"
        )
        .bold()
    );
    for entry in entries {
        println!(
            "{:>4}  {:<16} {:<10} {:>7} {:>9}  {}",
            entry.rank,
            truncate(&entry.player_name, 16),
            entry.baseword,
            format!("{}/{}", entry.score, entry.max_possible_score),
            format!("{}/{}", entry.words_found, entry.max_possible_words),
            entry.finished_at.format("%Y-%m-%d %H:%M")
        );
    }
}

fn group_by_length(progress: &[WordProgress]) -> BTreeMap<usize, Vec<&WordProgress>> {
    let mut groups: BTreeMap<usize, Vec<&WordProgress>> = BTreeMap::new();
    for entry in progress {
        groups.entry(entry.word.chars().count()).or_default().push(entry);
    }
    groups
}

fn spaced(word: &str) -> String {
    word.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max - 1).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced() {
        assert_eq!(spaced("SANDSACK"), "S A N D S A C K");
        assert_eq!(spaced("FUßBÄLLE"), "F U ß B Ä L L E");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Anna", 16), "Anna");
        assert_eq!(truncate("Jürgen-Friedrich", 8), "Jürgen-…");
    }

    #[test]
    fn test_group_by_length() {
        let progress = vec![
            WordProgress {
                word: "and".to_string(),
                found: true,
            },
            WordProgress {
                word: "sand".to_string(),
                found: false,
            },
            WordProgress {
                word: "das".to_string(),
                found: false,
            },
        ];

        let groups = group_by_length(&progress);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&3].len(), 2);
        assert_eq!(groups[&4][0].word, "sand");
    }
}
