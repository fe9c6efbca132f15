// WHY: drives one text file from raw lines to persisted quotes, strictly sequentially
// Blocks go to the model one at a time; the fixed delay after each call stalls the whole pipeline

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::extraction::QuoteExtractor;
use crate::llm::CompletionModel;
use crate::locale::Locale;
use crate::quote::Quote;
use crate::reader::{AsyncFileReader, ReaderConfig};
use crate::sentence_splitter::SentenceSplitter;
use crate::storage::QuoteWriter;
use crate::verifier::verify_and_extract;

/// Block size threshold in characters; a block is dispatched once it grows past this
pub const DEFAULT_BLOCK_SIZE: usize = 3000;

/// Pause after every model call
pub const DEFAULT_CALL_DELAY: Duration = Duration::from_secs(1);

/// Configuration for block processing behavior
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    /// Dispatch threshold in characters
    pub block_size: usize,
    /// Fixed delay after each model call
    pub call_delay: Duration,
    /// Language of the prompt and output header
    pub locale: Locale,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
    pub reader: ReaderConfig,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            call_delay: DEFAULT_CALL_DELAY,
            locale: Locale::default(),
            show_progress: false,
            reader: ReaderConfig::default(),
        }
    }
}

/// Append-only sentence sequence for one file run.
/// Grows with every line read and is never reset between blocks.
#[derive(Debug, Default)]
pub struct SentenceLog {
    sentences: Vec<String>,
}

impl SentenceLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split one line and append its sentences; returns how many were added
    pub fn append_line(&mut self, splitter: &SentenceSplitter, line: &str) -> usize {
        let sentences = splitter.split(line);
        let added = sentences.len();
        self.sentences.extend(sentences);
        added
    }

    pub fn as_slice(&self) -> &[String] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Per-run processing statistics
#[derive(Serialize, Debug, Clone, Default)]
pub struct RunStats {
    pub lines_read: u64,
    pub bytes_read: u64,
    pub sentences: u64,
    pub blocks_dispatched: u64,
    /// Blocks whose model call failed
    pub blocks_failed: u64,
    /// Candidate quotes returned by the model
    pub candidates: u64,
    /// Candidates verified and written
    pub quotes_saved: u64,
    pub processing_time_ms: u64,
}

/// Text waiting to be dispatched, with its length in characters
#[derive(Debug, Default)]
struct PendingBlock {
    text: String,
    chars: usize,
}

impl PendingBlock {
    fn push_line(&mut self, line: &str) {
        self.text.push_str(line);
        self.text.push('\n');
        self.chars += line.chars().count() + 1;
    }

    fn clear(&mut self) {
        self.text.clear();
        self.chars = 0;
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Extracts, verifies and stores quotes for one author's text files
pub struct BlockProcessor<M> {
    extractor: QuoteExtractor<M>,
    splitter: SentenceSplitter,
    author: String,
    config: ProcessorConfig,
}

impl<M: CompletionModel> BlockProcessor<M> {
    pub fn new(model: M, author: impl Into<String>, config: ProcessorConfig) -> Self {
        Self {
            extractor: QuoteExtractor::new(model, config.locale),
            splitter: SentenceSplitter::with_default_rules(),
            author: author.into(),
            config,
        }
    }

    pub fn extractor(&self) -> &QuoteExtractor<M> {
        &self.extractor
    }

    /// Process `input` and write verified quotes to `output`.
    ///
    /// Failing to read the input or write the output aborts the run. Model
    /// failures only cost the affected block its quotes.
    pub async fn process_file(&self, input: &Path, output: &Path) -> Result<RunStats> {
        let start_time = Instant::now();
        let reader = AsyncFileReader::new(self.config.reader.clone());
        let mut lines = reader.open(input).await?;
        let mut writer = QuoteWriter::create(output, self.config.locale).await?;

        info!(
            "Processing {} with model {} for author {}",
            lines.path().display(),
            self.extractor.model().model_name(),
            self.author
        );

        let progress = self.progress_bar(lines.stats().total_bytes)?;
        let mut stats = RunStats::default();
        let mut sentences = SentenceLog::new();
        let mut block = PendingBlock::default();

        while let Some(line) = lines.next_line().await? {
            // WHY: sentences never span lines; each line is split on its own
            sentences.append_line(&self.splitter, &line);
            block.push_line(&line);
            progress.inc(line.len() as u64 + 1);

            if block.chars > self.config.block_size {
                self.dispatch_block(&block.text, &sentences, &mut writer, &mut stats).await?;
                block.clear();
            }
        }

        if !block.is_empty() {
            self.dispatch_block(&block.text, &sentences, &mut writer, &mut stats).await?;
        }
        progress.finish_and_clear();

        stats.lines_read = lines.stats().lines_read;
        stats.bytes_read = lines.stats().bytes_read;
        stats.sentences = sentences.len() as u64;
        stats.quotes_saved = writer.records_written();
        stats.processing_time_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "Saved {} quotes to {} ({} blocks, {} failed, {} candidates, {} sentences) in {}ms",
            stats.quotes_saved,
            writer.path().display(),
            stats.blocks_dispatched,
            stats.blocks_failed,
            stats.candidates,
            stats.sentences,
            stats.processing_time_ms
        );

        Ok(stats)
    }

    /// Send one block to the model, verify the candidates against every
    /// sentence read so far and append the survivors to the output
    async fn dispatch_block(
        &self,
        block: &str,
        sentences: &SentenceLog,
        writer: &mut QuoteWriter,
        stats: &mut RunStats,
    ) -> Result<()> {
        info!("Processing block ({} characters)", block.chars().count());
        stats.blocks_dispatched += 1;

        let candidates = match self.extractor.extract(block).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!("Model call failed, skipping block: {}", e);
                stats.blocks_failed += 1;
                Vec::new()
            }
        };
        stats.candidates += candidates.len() as u64;

        let verified = self.verify_candidates(&candidates, sentences);
        if !verified.is_empty() {
            writer.append(&verified).await?;
            info!("Saved {} quotes ({} so far)", verified.len(), writer.records_written());
        }

        tokio::time::sleep(self.config.call_delay).await;
        Ok(())
    }

    /// Keep only candidates found verbatim in a sentence
    pub fn verify_candidates(&self, candidates: &[String], sentences: &SentenceLog) -> Vec<Quote> {
        candidates
            .iter()
            .filter_map(|candidate| {
                verify_and_extract(sentences.as_slice(), candidate, &self.author)
            })
            .collect()
    }

    fn progress_bar(&self, total_bytes: u64) -> Result<ProgressBar> {
        if !self.config.show_progress {
            return Ok(ProgressBar::hidden());
        }
        let progress = ProgressBar::new(total_bytes);
        progress.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} {msg}",
                )?
                .progress_chars("█▓░"),
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        Ok(progress)
    }
}
