use anyhow::{Context, Result};
use colored::Colorize;
use lttrs_application::GameMode;
use lttrs_core::word::Locale;

use crate::display;
use crate::repl::Repl;
use crate::setup::App;

pub async fn play(app: &App, mode: GameMode, locale: Option<Locale>) -> Result<()> {
    if let Some(locale) = locale {
        app.service
            .set_locale(locale)
            .await
            .map_err(|e| app.explain(e))?;
    }

    let session = app
        .service
        .start_game(mode)
        .await
        .map_err(|e| app.explain(e))?;

    Repl::new(app, session)?.run().await
}

pub async fn highscores(app: &App, limit: usize) -> Result<()> {
    let entries = app.service.highscores(Some(limit)).await?;
    display::print_highscores(&entries);
    Ok(())
}

/// Shows every possible word of a game. Defaults to the last unfinished one.
pub async fn words(app: &App, session_id: Option<String>) -> Result<()> {
    let session = match session_id {
        Some(id) => app.service.find_session(&id).await?,
        None => app
            .service
            .last_unfinished()
            .await?
            .context("No unfinished game found, start one with 'lttrs play'")?,
    };

    display::print_session(&session);
    display::print_solution(&session);
    Ok(())
}

pub async fn locales(app: &App) -> Result<()> {
    let active = app.service.locale().await;
    let available = app.service.available_locales().await?;

    for locale in Locale::all() {
        let marker = if locale == active { "*" } else { " " };
        let status = if available.contains(&locale) {
            "installed".green()
        } else {
            format!("missing {:?}", app.words.word_list_path(locale)).bright_black()
        };
        println!(
            "{} {}  {:<8} {}",
            marker,
            locale,
            locale.language_name(),
            status
        );
    }
    Ok(())
}

pub fn show_config(app: &App) -> Result<()> {
    let settings = app.config.get_config()?;
    println!("{} {:?}", "Settings file:".bright_black(), app.config.path());
    println!("locale              = {}", settings.locale);
    println!("default_player_name = {}", settings.default_player_name);
    println!("dictionary_dir      = {:?}", app.words.dir());
    if let Some(dir) = &settings.sessions_dir {
        println!("sessions_dir        = {:?}", dir);
    }
    Ok(())
}

pub fn set_config(app: &App, locale: Option<Locale>, player_name: Option<String>) -> Result<()> {
    if locale.is_none() && player_name.is_none() {
        anyhow::bail!("Nothing to change, pass --locale or --player-name");
    }

    app.config.update(|settings| {
        if let Some(locale) = locale {
            settings.locale = locale;
        }
        if let Some(name) = player_name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) {
            settings.default_player_name = name;
        }
    })?;
    show_config(app)
}
