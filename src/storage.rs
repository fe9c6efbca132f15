// WHY: quote files are semicolon-delimited with a UTF-8 BOM so spreadsheet tools open them directly
// Every record must stay on one physical line, so fields are sanitized before writing

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, warn};

use crate::discovery::QUOTE_FILE_EXTENSION;
use crate::locale::Locale;
use crate::quote::Quote;

/// UTF-8 byte-order mark written at the start of every quote file
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Field delimiter of quote files
pub const DELIMITER: u8 = b';';

/// Number of columns in a quote record
pub const FIELD_COUNT: usize = 4;

/// Generate output file path from the input text path by swapping the extension
pub fn output_path_for(input_path: &Path) -> PathBuf {
    input_path.with_extension(QUOTE_FILE_EXTENSION)
}

/// Replace characters that would break the one-record-per-line layout:
/// `;` becomes `,` and any line break becomes a single space
pub fn sanitize_field(field: &str) -> String {
    field
        .replace(';', ",")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn encode_records<'a, I>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = [&'a str; FIELD_COUNT]>,
{
    let mut writer = csv_writer();
    for record in records {
        let sanitized = record.map(sanitize_field);
        writer.write_record(&sanitized)?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to encode quote records: {}", e.error()))
}

/// Append-only writer for one quote file, kept open for the whole run
pub struct QuoteWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    records_written: u64,
}

impl QuoteWriter {
    /// Create (or truncate) the file and write the BOM and header row
    pub async fn create<P: AsRef<Path>>(path: P, locale: Locale) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .await
            .with_context(|| format!("Failed to create output file {}", path.display()))?;

        let mut quote_writer = Self {
            path,
            writer: BufWriter::new(file),
            records_written: 0,
        };

        let mut preamble = UTF8_BOM.to_vec();
        preamble.extend(encode_records([locale.csv_header()])?);
        quote_writer.write_and_flush(&preamble).await?;

        debug!("Initialized quote file {}", quote_writer.path.display());
        Ok(quote_writer)
    }

    /// Append a batch of quotes and flush it to disk
    pub async fn append(&mut self, quotes: &[Quote]) -> Result<()> {
        if quotes.is_empty() {
            return Ok(());
        }
        let bytes = encode_records(quotes.iter().map(Quote::fields))?;
        self.write_and_flush(&bytes).await?;
        self.records_written += quotes.len() as u64;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of quote rows written so far (header excluded)
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    async fn write_and_flush(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .await
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        self.writer
            .flush()
            .await
            .with_context(|| format!("Failed to flush {}", self.path.display()))?;
        Ok(())
    }
}

/// Parse one physical line of a quote file into its fields
fn parse_line(line: &[u8]) -> Result<csv::StringRecord, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(line);
    let mut record = csv::StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record)
}

/// Parse the contents of a quote file.
///
/// Records never span lines, so each physical line is parsed on its own and a
/// broken line costs only itself. The header row is skipped. Rows with fewer
/// than four fields and rows that fail to parse are skipped with a warning;
/// `source` is only used in logs.
pub fn parse_quotes(data: &[u8], source: &Path) -> Vec<Quote> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut quotes = Vec::new();
    for (i, line) in data.split(|&b| b == b'\n').enumerate().skip(1) {
        // Row numbers are 1-based and count the header
        let row = i + 1;
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        let record = match parse_line(line) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping malformed row {} in {}: {}", row, source.display(), e);
                continue;
            }
        };

        if record.len() < FIELD_COUNT {
            warn!(
                "Row {} in {} has {} fields, expected {}; skipping",
                row,
                source.display(),
                record.len(),
                FIELD_COUNT
            );
            continue;
        }

        quotes.push(Quote {
            text: record[0].to_string(),
            author: record[1].to_string(),
            context_before: record[2].to_string(),
            context_after: record[3].to_string(),
        });
    }

    quotes
}

/// Read and parse a quote file
pub async fn read_quotes<P: AsRef<Path>>(path: P) -> Result<Vec<Quote>> {
    let path = path.as_ref();
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to open file {}", path.display()))?;
    Ok(parse_quotes(&data, path))
}
