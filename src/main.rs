use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use quarry::llm::gemini::{API_KEY_ENV, DEFAULT_MODEL};
use quarry::processor::{DEFAULT_BLOCK_SIZE, DEFAULT_CALL_DELAY};
use quarry::reader::ReaderConfig;
use quarry::storage::output_path_for;
use quarry::{BlockProcessor, GeminiClient, Locale, ProcessorConfig};

#[derive(Parser, Debug)]
#[command(name = "quarry")]
#[command(about = "Extract verified quotations with context from a text file using Gemini")]
#[command(version)]
struct Args {
    /// Text file to extract quotes from
    input: PathBuf,

    /// Author attributed to every extracted quote
    author: String,

    /// Gemini API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true, value_parser = parse_api_key)]
    api_key: String,

    /// Gemini model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Output file path (default: input path with a .csv extension)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Characters accumulated before a block is sent to the model
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,

    /// Pause after each model call, in milliseconds
    #[arg(long, default_value_t = DEFAULT_CALL_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Language of the prompt and output header
    #[arg(long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Write run statistics as JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

/// Reject blank keys up front; every request would fail with them
fn parse_api_key(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err(format!("{API_KEY_ENV} must not be empty"));
    }
    Ok(value.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    // A missing .env is fine; the key may come from the real environment
    dotenvy::dotenv().ok();
    let args = Args::parse();

    info!(
        input = %args.input.display(),
        author = %args.author,
        model = %args.model,
        "Starting quarry"
    );

    if !args.input.is_file() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let output = args.output.clone().unwrap_or_else(|| output_path_for(&args.input));
    let config = ProcessorConfig {
        block_size: args.block_size,
        call_delay: Duration::from_millis(args.delay_ms),
        locale: args.locale,
        show_progress: !args.no_progress,
        reader: ReaderConfig::default(),
    };

    let client =
        GeminiClient::new(args.api_key, args.model).context("Failed to create Gemini client")?;
    let processor = BlockProcessor::new(client, args.author, config);

    let stats = processor
        .process_file(&args.input, &output)
        .await
        .with_context(|| format!("Failed to process {}", args.input.display()))?;

    if let Some(stats_path) = args.stats_out {
        let json = serde_json::to_string_pretty(&stats)?;
        tokio::fs::write(&stats_path, json)
            .await
            .with_context(|| format!("Failed to write stats to {}", stats_path.display()))?;
    }

    println!("Saved {} quotes to {}", stats.quotes_saved, output.display());
    Ok(())
}
