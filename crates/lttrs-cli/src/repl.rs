//! Interactive game loop.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use crate::display;
use crate::setup::App;
use lttrs_application::{GameMode, ResetOutcome};
use lttrs_core::LttrsError;
use lttrs_core::session::Session;
use lttrs_core::word::Locale;

const COMMANDS: &[&str] = &[
    ":end",
    ":help",
    ":highscores",
    ":locale",
    ":quit",
    ":reset",
    ":score",
    ":share",
    ":words",
];

/// rustyline helper completing and hinting `:` commands.
#[derive(Clone)]
struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with(':') && !line.contains(' ') {
            let candidates = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with(':') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with(':') && !line.contains(' ') {
            COMMANDS
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Answer(String),
    Help,
    Words,
    Score,
    Share,
    End(Option<String>),
    Reset,
    Highscores,
    Locale(Option<String>),
    Quit,
    Unknown(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return match line {
                "quit" | "exit" => Input::Quit,
                _ => Input::Answer(line.to_string()),
            };
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim().to_string()).filter(|a| !a.is_empty())),
            None => (command, None),
        };

        match name {
            "h" | "help" => Input::Help,
            "w" | "words" => Input::Words,
            "score" => Input::Score,
            "share" => Input::Share,
            "end" => Input::End(argument),
            "reset" | "new" => Input::Reset,
            "highscores" | "hs" => Input::Highscores,
            "locale" => Input::Locale(argument),
            "q" | "quit" | "exit" => Input::Quit,
            _ => Input::Unknown(line.to_string()),
        }
    }
}

const FINISHED_HINT: &str = "This game is over. Type ':reset' for a new one.";

/// Whether the loop keeps going after an input.
enum Flow {
    Continue,
    Quit,
}

pub struct Repl<'a> {
    app: &'a App,
    editor: Editor<CliHelper, DefaultHistory>,
    session: Session,
}

impl<'a> Repl<'a> {
    pub fn new(app: &'a App, session: Session) -> Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(CliHelper));
        Ok(Self {
            app,
            editor,
            session,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        display::print_banner();
        display::print_session(&self.session);

        loop {
            let line = match self.editor.readline(">> ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C detected. Type ':quit' to exit.".yellow());
                    continue;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            };

            if line.trim().is_empty() {
                continue;
            }
            let _ = self.editor.add_history_entry(line.as_str());

            match self.handle(Input::parse(&line)).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => display::print_error(&err),
            }
        }

        println!("{}", "Your game is saved. Bye!".bright_green());
        Ok(())
    }

    async fn handle(&mut self, input: Input) -> Result<Flow, LttrsError> {
        let app = self.app;
        let service = &app.service;

        match input {
            Input::Answer(word) => match service.submit(&word, &mut self.session).await {
                Ok(submission) => display::print_submission(&submission, &self.session),
                Err(LttrsError::Word(err)) => display::print_word_error(&err),
                Err(err) if err.is_already_finished() => display::print_info(FINISHED_HINT),
                Err(err) => return Err(err),
            },
            Input::Help => display::print_help(),
            Input::Words => display::print_found_words(&self.session),
            Input::Score => display::print_score(&self.session),
            Input::Share => println!(
                "Share code: {}  (lttrs play --shared {})",
                self.session.share_code().bright_yellow().bold(),
                self.session.share_code()
            ),
            Input::End(name) => self.end(name).await?,
            Input::Reset => self.reset().await?,
            Input::Highscores => display::print_highscores(&service.highscores(Some(10)).await?),
            Input::Locale(None) => {
                let active = service.locale().await;
                println!("Locale: {} ({})", active, active.language_name());
            }
            Input::Locale(Some(code)) => self.switch_locale(&code).await?,
            Input::Quit => return Ok(Flow::Quit),
            Input::Unknown(line) => display::print_info(&format!(
                "Unknown command '{}', try ':help'",
                line
            )),
        }

        Ok(Flow::Continue)
    }

    async fn end(&mut self, name: Option<String>) -> Result<(), LttrsError> {
        if self.session.used_words().is_empty() {
            display::print_info("Find at least one word before ending the game.");
            return Ok(());
        }

        let name = match name {
            Some(name) => name,
            None => self.prompt("Your name for the highscores: ")?.unwrap_or_default(),
        };

        self.app
            .service
            .end_game(&name, &mut self.session)
            .await?;
        println!(
            "{} {} points with {} of {} words.",
            "Game over:".bright_magenta().bold(),
            self.session.score(),
            self.session.used_words().len(),
            self.session.max_possible_words()
        );
        display::print_solution(&self.session);

        match self.app.service.start_game(GameMode::Random).await {
            Ok(session) => {
                self.session = session;
                println!();
                display::print_session(&self.session);
            }
            Err(err) => {
                display::print_error(&err);
                display::print_info(FINISHED_HINT);
            }
        }
        Ok(())
    }

    async fn reset(&mut self) -> Result<(), LttrsError> {
        let mut outcome = self.app.service.reset_game(&self.session, false).await?;

        if outcome == ResetOutcome::ConfirmationRequired {
            let question = format!(
                "Throw away {} found words? (yes/no) ",
                self.session.used_words().len()
            );
            let confirmed = self.prompt(&question)?.is_some_and(|answer| {
                matches!(answer.to_lowercase().as_str(), "y" | "yes" | "j" | "ja")
            });
            if !confirmed {
                display::print_info("Keeping the current game.");
                return Ok(());
            }
            outcome = self.app.service.reset_game(&self.session, true).await?;
        }

        if let ResetOutcome::Restarted(session) = outcome {
            self.session = session;
            display::print_session(&self.session);
        }
        Ok(())
    }

    async fn switch_locale(&mut self, code: &str) -> Result<(), LttrsError> {
        let locale: Locale = code
            .parse()
            .map_err(|_| LttrsError::config(format!("Unknown locale '{}'", code)))?;

        self.app.service.set_locale(locale).await?;
        self.app.config.update(|config| config.locale = locale)?;
        println!(
            "New games are played in {} ({}).",
            locale,
            locale.language_name()
        );
        if self.session.locale() != locale && self.session.is_untouched() {
            if let ResetOutcome::Restarted(session) =
                self.app.service.reset_game(&self.session, false).await?
            {
                self.session = session;
                display::print_session(&self.session);
            }
        }
        Ok(())
    }

    /// Reads one answer line. `None` when the player aborted with CTRL-C/D.
    fn prompt(&mut self, question: &str) -> Result<Option<String>, LttrsError> {
        match self.editor.readline(question) {
            Ok(answer) => Ok(Some(answer.trim().to_string())),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(LttrsError::io(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_input_is_an_answer() {
        assert_eq!(Input::parse("  Sand "), Input::Answer("Sand".to_string()));
        assert_eq!(Input::parse("quit"), Input::Quit);
    }

    #[test]
    fn test_commands_with_arguments() {
        assert_eq!(Input::parse(":end"), Input::End(None));
        assert_eq!(
            Input::parse(":end  Anna Lena "),
            Input::End(Some("Anna Lena".to_string()))
        );
        assert_eq!(Input::parse(":locale en"), Input::Locale(Some("en".to_string())));
        assert_eq!(Input::parse(":new"), Input::Reset);
        assert_eq!(Input::parse(":w"), Input::Words);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(Input::parse(":dance"), Input::Unknown(":dance".to_string()));
    }

    #[test]
    fn test_commands_are_sorted_for_completion() {
        let mut sorted = COMMANDS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, COMMANDS);
    }
}
