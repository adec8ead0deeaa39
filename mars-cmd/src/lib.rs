//! Command implementations for the Mars CLI.
//!
//! Provides subcommands printing the atmosphere composition and the InSight
//! weather feed, as text or JSON.

use clap::Subcommand;
use mars_atmo::composition::{ViewMode, DEFAULT_THRESHOLD};
use std::path::PathBuf;

pub mod atmosphere;
pub mod text;
pub mod weather;

#[derive(Subcommand)]
pub enum Command {
    /// Print the atmosphere composition chart data and an optional gas detail panel
    Atmosphere {
        /// composition, earth-comparison or seasonal-variation
        #[arg(short = 'v', long, default_value_t = ViewMode::Composition)]
        view: ViewMode,

        /// Hide gases at or below this percentage
        #[arg(short = 't', long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Name of the gas to show details for (e.g. "Argon")
        #[arg(short = 's', long)]
        select: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch the InSight weather feed once and print the current sol and series
    Weather {
        /// NASA API key (defaults to the shared DEMO_KEY)
        #[arg(short = 'k', long)]
        api_key: Option<String>,

        /// Override the feed endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Read a saved feed payload instead of requesting one
        #[arg(short = 'i', long)]
        input: Option<PathBuf>,

        /// Step back this many sols from the most recent one
        #[arg(short = 'b', long, default_value_t = 0)]
        back: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Atmosphere {
            view,
            threshold,
            select,
            json,
        } => atmosphere::run_atmosphere(view, threshold, select.as_deref(), json),
        Command::Weather {
            api_key,
            endpoint,
            input,
            back,
            json,
        } => {
            let source = weather::FeedSource::new(api_key, endpoint, input);
            weather::run_weather(source, back, json).await
        }
    }
}
