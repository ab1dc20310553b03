use anyhow::Result;
use clap::{Parser, Subcommand};
use lttrs_application::GameMode;
use lttrs_core::word::Locale;

mod commands;
mod display;
mod logging;
mod repl;
mod setup;

#[derive(Parser)]
#[command(name = "lttrs", version)]
#[command(
    about = "eightlttrs - find every word hidden in an eight letter baseword",
    long_about = None
)]
struct Cli {
    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play, continuing the last unfinished game (default)
    Play {
        /// Start a new random game
        #[arg(long, conflicts_with = "shared")]
        new: bool,
        /// Play a baseword someone shared with you
        #[arg(long, value_name = "WORD")]
        shared: Option<String>,
        /// Language of the game (DE, EN)
        #[arg(short, long)]
        locale: Option<Locale>,
    },
    /// Show the best finished games
    Highscores {
        /// Number of entries
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
    /// List every possible word of a game
    Words {
        /// Session id, defaults to the last unfinished game
        session: Option<String>,
    },
    /// List locales and whether their word list is installed
    Locales,
    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current settings
    Show,
    /// Change settings
    Set {
        /// Locale of new games
        #[arg(long)]
        locale: Option<Locale>,
        /// Name used when a game is ended without one
        #[arg(long)]
        player_name: Option<String>,
    },
}

impl Commands {
    fn default_play() -> Self {
        Commands::Play {
            new: false,
            shared: None,
            locale: None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.verbose)?;

    let app = setup::App::load()?;

    match cli.command.unwrap_or_else(Commands::default_play) {
        Commands::Play {
            new,
            shared,
            locale,
        } => {
            let mode = match (shared, new) {
                (Some(word), _) => GameMode::Shared(word),
                (None, true) => GameMode::Random,
                (None, false) => GameMode::ContinueLastSession,
            };
            commands::play(&app, mode, locale).await?
        }
        Commands::Highscores { limit } => commands::highscores(&app, limit).await?,
        Commands::Words { session } => commands::words(&app, session).await?,
        Commands::Locales => commands::locales(&app).await?,
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => commands::show_config(&app)?,
            ConfigAction::Set {
                locale,
                player_name,
            } => commands::set_config(&app, locale, player_name)?,
        },
    }

    Ok(())
}
