pub mod discovery;
pub mod extraction;
pub mod llm;
pub mod locale;
pub mod processor;
pub mod quote;
pub mod reader;
pub mod sampler;
pub mod sentence_splitter;
pub mod storage;
pub mod verifier;

// Re-export main types for convenient access
pub use quote::Quote;
pub use locale::Locale;
pub use sentence_splitter::{split_sentences, SentenceSplitter};
pub use verifier::verify_and_extract;

// Re-export pipeline entry points
pub use processor::{BlockProcessor, ProcessorConfig, RunStats, SentenceLog};
pub use llm::{CompletionModel, GeminiClient, LlmError};
pub use sampler::{choose_quote, random_quote, SamplerError};
