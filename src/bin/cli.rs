//! quakefeed CLI
//!
//! Local entry point for fetching and inspecting the earthquake feed.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use quakefeed::{
    config::FeedConfig,
    error::Result,
    pipeline::FeedPipeline,
    sections::SectionIndex,
};

/// quakefeed - USGS ShakeMap feed client
#[derive(Parser, Debug)]
#[command(name = "quakefeed", version, about = "USGS ShakeMap feed client")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, default_value = "quakefeed.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the feed and print each record
    Fetch {
        /// Only keep records newer than this many days
        #[arg(long)]
        days: Option<i64>,

        /// Print records as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fetch the feed and print it grouped by day
    Sections {
        /// Only keep records newer than this many days
        #[arg(long)]
        days: Option<i64>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = FeedConfig::load_or_default(&cli.config);

    match cli.command {
        Command::Fetch { days, json } => {
            let pipeline = FeedPipeline::new(config.clone())?;
            let days = days.or(config.default_max_age_days);
            let quakes = pipeline.fetch(days).await?;

            log::info!("Fetched {} record(s)", quakes.len());
            if json {
                println!("{}", serde_json::to_string_pretty(&quakes)?);
            } else {
                for quake in &quakes {
                    println!(
                        "{}  {}  (lat {} lon {})  {}",
                        quake.date_string, quake.title, quake.latitude, quake.longitude, quake.link
                    );
                }
            }
        }

        Command::Sections { days } => {
            let pipeline = FeedPipeline::new(config.clone())?;
            let days = days.or(config.default_max_age_days);
            let quakes = pipeline.fetch(days).await?;

            let index = SectionIndex::new(&quakes);
            for section in 0..index.section_count() {
                if let Some(label) = index.section_label(section) {
                    println!("== {label} ==");
                }
                for row in 0..index.rows_in_section(section) {
                    if let Some(quake) = index.quake_at(row, section) {
                        println!("  {}", quake.title);
                    }
                }
            }
        }

        Command::Validate => {
            config.validate()?;
            log::info!("Config OK: feed_url = {}", config.feed_url);
        }
    }

    Ok(())
}
