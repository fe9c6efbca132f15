use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tracing::debug;

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
        }
    }
}

/// Statistics for file reading operations
#[derive(Debug, Clone, Default)]
pub struct ReadStats {
    pub lines_read: u64,
    pub bytes_read: u64,
    /// Size of the file when it was opened
    pub total_bytes: u64,
}

/// Async file reader that streams file contents line-by-line
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Open a file for line-by-line reading.
    /// Fails when the file cannot be opened; there is nothing to process without it.
    pub async fn open<P: AsRef<Path>>(&self, file_path: P) -> Result<LineStream> {
        let path = file_path.as_ref().to_path_buf();
        debug!("Opening {} for line reading", path.display());

        let file = File::open(&path)
            .await
            .with_context(|| format!("Failed to open file {}", path.display()))?;
        let total_bytes = file
            .metadata()
            .await
            .with_context(|| format!("Failed to stat file {}", path.display()))?
            .len();

        // WHY: BufReader with custom buffer size reduces syscalls and improves throughput
        let reader = BufReader::with_capacity(self.config.buffer_size, file);

        Ok(LineStream {
            path,
            lines: reader.lines(),
            stats: ReadStats {
                total_bytes,
                ..Default::default()
            },
        })
    }
}

/// Lines of one open file, without their terminators (`\n` or `\r\n`)
pub struct LineStream {
    path: PathBuf,
    lines: Lines<BufReader<File>>,
    stats: ReadStats,
}

impl LineStream {
    /// Next line, or `None` at end of file. Invalid UTF-8 is an error.
    pub async fn next_line(&mut self) -> Result<Option<String>> {
        let line = self.lines.next_line().await.with_context(|| {
            format!(
                "UTF-8 decoding error in {} at line {}",
                self.path.display(),
                self.stats.lines_read + 1
            )
        })?;

        if let Some(ref line) = line {
            self.stats.lines_read += 1;
            self.stats.bytes_read += line.len() as u64 + 1; // +1 for newline
        }
        Ok(line)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }
}
