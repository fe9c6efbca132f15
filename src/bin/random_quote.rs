// Random Quote Utility
// Pools every quote from the CSV files under a directory and prints one picked at random

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use quarry::discovery::DiscoveryConfig;
use quarry::sampler::format_quote_text;
use quarry::{random_quote, Locale};

#[derive(Parser, Debug)]
#[command(name = "random-quote")]
#[command(about = "Print a random quote from the quote files under a directory")]
#[command(version)]
struct Args {
    /// Root directory searched recursively for *.csv files
    root_dir: PathBuf,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,

    /// Language of the field labels in plain-text output
    #[arg(long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Follow symbolic links while searching for quote files
    #[arg(long)]
    follow_links: bool,

    /// Abort on the first unreadable directory entry instead of skipping it
    #[arg(long)]
    fail_fast: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: stdout carries the quote itself, so logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if !args.root_dir.is_dir() {
        anyhow::bail!("Root path is not a directory: {}", args.root_dir.display());
    }

    let config = DiscoveryConfig {
        fail_fast: args.fail_fast,
        follow_links: args.follow_links,
    };
    let mut rng = rand::rng();
    let quote = random_quote(&args.root_dir, &config, &mut rng).await?;

    if args.json {
        let json =
            serde_json::to_string_pretty(&quote).context("Failed to serialize quote as JSON")?;
        println!("{json}");
    } else {
        print!("{}", format_quote_text(&quote, args.locale));
    }

    Ok(())
}
