use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use weather_core::{Config, lookup};

use crate::{
    render,
    state::{Action, ViewState},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key (and optionally the country scope).
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Marin, CA".
        city: String,

        /// Print the snapshot as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up cities interactively until an empty line is entered.
    Search,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(&city, json).await,
            Command::Search => search().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let country = Text::new("Country scope for city lookups:")
        .with_default(&cfg.country)
        .prompt()
        .context("Failed to read country")?;

    cfg.set_api_key(api_key.trim().to_string());
    cfg.country = country.trim().to_uppercase();
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str, json: bool) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let client = cfg.client()?;

    let snapshot = lookup(&client, city, &cfg.country).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", render::snapshot(&snapshot));
    }
    Ok(())
}

async fn search() -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let client = cfg.client()?;
    let mut state = ViewState::default();

    loop {
        let text = Text::new("City:")
            .with_placeholder("Enter city (ex. Marin, CA)")
            .prompt()
            .context("Failed to read city")?;
        if text.trim().is_empty() {
            break;
        }

        state = state.apply(Action::SearchTextChanged(text)).apply(Action::LookupStarted);
        println!("{}", render::view(&state));

        let action = match lookup(&client, &state.search_text, &cfg.country).await {
            Ok(snapshot) => Action::LookupSucceeded(snapshot),
            Err(err) => {
                tracing::warn!("lookup for {:?} failed: {err}", state.search_text);
                Action::LookupFailed(err)
            }
        };
        state = state.apply(action);
        println!("{}\n", render::view(&state));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_json_flag() {
        let cli = Cli::try_parse_from(["weather", "show", "Marin, CA", "--json"]).unwrap();
        match cli.command {
            Command::Show { city, json } => {
                assert_eq!(city, "Marin, CA");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_city() {
        assert!(Cli::try_parse_from(["weather", "show"]).is_err());
    }
}
