//! Random selection of one quote from every quote file under a directory.
//!
//! The random source is always passed in, so callers decide how it is seeded.

use rand::seq::IndexedRandom;
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::discovery::{find_csv_files, DiscoveryConfig};
use crate::locale::Locale;
use crate::quote::Quote;
use crate::storage::read_quotes;

/// Errors that end a sampling run
#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("No CSV files found in {}", .0.display())]
    NoCsvFiles(PathBuf),

    #[error("No quotes found in CSV files under {}", .0.display())]
    NoQuotes(PathBuf),

    #[error("File discovery failed: {0:#}")]
    Discovery(anyhow::Error),
}

/// Read every file and pool the quotes. Files that fail to read are logged and skipped.
pub async fn collect_quote_pool(files: &[PathBuf]) -> Vec<Quote> {
    let mut pool = Vec::new();

    for file in files {
        match read_quotes(file).await {
            Ok(quotes) => {
                info!("Loaded {} quotes from {}", quotes.len(), file.display());
                pool.extend(quotes);
            }
            Err(e) => {
                warn!("Failed to read {}, skipping: {:#}", file.display(), e);
            }
        }
    }

    pool
}

/// Pick one quote uniformly at random; `None` only for an empty pool
pub fn choose_quote<'a, R: Rng + ?Sized>(pool: &'a [Quote], rng: &mut R) -> Option<&'a Quote> {
    pool.choose(rng)
}

/// Discover quote files under `root_dir`, pool their quotes and pick one
pub async fn random_quote<R: Rng + ?Sized>(
    root_dir: &Path,
    config: &DiscoveryConfig,
    rng: &mut R,
) -> Result<Quote, SamplerError> {
    let files = find_csv_files(root_dir, config.clone())
        .await
        .map_err(SamplerError::Discovery)?;
    if files.is_empty() {
        return Err(SamplerError::NoCsvFiles(root_dir.to_path_buf()));
    }

    let pool = collect_quote_pool(&files).await;
    info!("Pooled {} quotes from {} files", pool.len(), files.len());

    choose_quote(&pool, rng)
        .cloned()
        .ok_or_else(|| SamplerError::NoQuotes(root_dir.to_path_buf()))
}

/// Plain-text rendering: one labelled line per field
pub fn format_quote_text(quote: &Quote, locale: Locale) -> String {
    locale
        .display_labels()
        .iter()
        .zip(quote.fields())
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}
