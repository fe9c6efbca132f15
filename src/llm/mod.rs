//! Text-generation seam used by the quote extractor.
//!
//! The pipeline only needs "prompt in, text out"; everything provider
//! specific lives behind [`CompletionModel`].

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;

pub use gemini::GeminiClient;

/// Errors that can occur when calling a text-generation provider
#[derive(Error, Debug)]
pub enum LlmError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status returned by the provider
    #[error("API responded with error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the provider
        message: String,
    },

    /// Response body could not be decoded
    #[error("Failed to parse API response: {0}")]
    Parse(String),

    /// Provider answered without any text
    #[error("API response contained no text: {reason}")]
    EmptyResponse {
        /// Finish or block reason reported by the provider, if any
        reason: String,
    },
}

/// A model that turns a prompt into generated text
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Generate a completion for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;

    /// Model identifier, for logging
    fn model_name(&self) -> &str;
}
