// WHY: turns a raw text block into candidate quote strings
// Candidates stay unverified until they are checked against the sentences

use tracing::{debug, warn};

use crate::llm::{CompletionModel, LlmError};
use crate::locale::Locale;

/// Asks a completion model for notable quotes in a block of text
#[derive(Debug)]
pub struct QuoteExtractor<M> {
    model: M,
    locale: Locale,
}

impl<M: CompletionModel> QuoteExtractor<M> {
    pub fn new(model: M, locale: Locale) -> Self {
        Self { model, locale }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Full prompt sent for `block`
    pub fn build_prompt(&self, block: &str) -> String {
        format!(
            "{}\n\n{}\n{}",
            self.locale.extraction_instructions(),
            self.locale.text_label(),
            block
        )
    }

    /// Request candidate quotes for `block`.
    ///
    /// Model failures are returned to the caller. A response that is not a
    /// JSON array of strings is logged and yields no candidates.
    pub async fn extract(&self, block: &str) -> Result<Vec<String>, LlmError> {
        let prompt = self.build_prompt(block);
        let response = self.model.generate(&prompt).await?;

        match parse_candidates(&response) {
            Ok(candidates) => {
                debug!(count = candidates.len(), "Parsed candidate quotes");
                Ok(candidates)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    response = %response,
                    "Model response is not a JSON array of strings, skipping block"
                );
                Ok(Vec::new())
            }
        }
    }
}

/// Remove a leading ```` ```json ```` (or bare ```` ``` ````) fence and a trailing
/// ```` ``` ```` fence
pub fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

/// Parse a model response into candidate quotes, dropping blank entries
pub fn parse_candidates(response: &str) -> Result<Vec<String>, serde_json::Error> {
    let candidates: Vec<String> = serde_json::from_str(strip_code_fence(response))?;
    Ok(candidates
        .into_iter()
        .filter(|candidate| !candidate.trim().is_empty())
        .collect())
}
