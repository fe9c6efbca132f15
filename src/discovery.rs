use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Extension of quote files, compared case-insensitively
pub const QUOTE_FILE_EXTENSION: &str = "csv";

/// Configuration for file discovery behavior
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on the first traversal error or log and continue
    pub fail_fast: bool,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

/// Whether `path` names a file with the given extension
fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.to_lowercase()
                .ends_with(&format!(".{}", extension.to_lowercase()))
        })
}

/// Walk `root_dir` recursively and return every matching file, sorted by path.
/// Unreadable entries are skipped with a warning unless `fail_fast` is set.
pub fn find_files_blocking(root_dir: &Path, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root_dir).follow_links(config.follow_links) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                if config.fail_fast {
                    return Err(anyhow::anyhow!(
                        "Directory traversal failed under {}: {}",
                        root_dir.display(),
                        e
                    ));
                }
                warn!("Directory traversal error (continuing): {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), QUOTE_FILE_EXTENSION) {
            debug!("Found matching file: {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Discover quote files under `root_dir` without blocking the async runtime
pub async fn find_csv_files(
    root_dir: impl AsRef<Path>,
    config: DiscoveryConfig,
) -> Result<Vec<PathBuf>> {
    let root_path = root_dir.as_ref().to_path_buf();
    info!("Starting file discovery in: {}", root_path.display());
    let traversal_start = std::time::Instant::now();

    // WHY: walkdir is synchronous; keep it off the async worker threads
    let files =
        tokio::task::spawn_blocking(move || find_files_blocking(&root_path, &config)).await??;

    info!(
        "Discovery completed in {}ms, found {} files",
        traversal_start.elapsed().as_millis(),
        files.len()
    );
    Ok(files)
}
