use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use forecast_core::{Config, ForecastStore, HttpFeed};

use crate::menu;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Malaysian weather forecast browser")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Persist a feed URL override in the config file.
    Configure {
        /// Feed URL, e.g. "https://api.data.gov.my/weather/forecast/".
        url: String,
    },

    /// Load the feed and start the interactive query menu (the default).
    Run {
        /// One-off feed URL; takes precedence over the configured one.
        #[arg(long)]
        url: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure { url }) => {
                let mut config = Config::load()?;
                config.set_feed_url(url);
                config.save()?;

                println!("feed URL saved to {}", Config::config_file_path()?.display());
                Ok(())
            }
            Some(Command::Run { url }) => run_menu(url).await,
            None => run_menu(None).await,
        }
    }
}

async fn run_menu(url_override: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let url = url_override.as_deref().unwrap_or_else(|| config.feed_url());

    let feed = HttpFeed::new(url)?;
    let mut store = ForecastStore::new();

    // One-shot load; a failure here aborts startup rather than running
    // the menu over a partial store.
    let loaded = store
        .load(&feed)
        .await
        .with_context(|| format!("failed to load the forecast feed from {url}"))?;
    tracing::info!(records = loaded, url, "forecast feed loaded");

    let today = Local::now().date_naive();
    menu::Menu::new(store, today).run()
}
