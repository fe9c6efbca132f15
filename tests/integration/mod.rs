// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use quarry::{CompletionModel, LlmError};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Test fixture helper for creating temporary directories with input and quote files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a file with given content, creating parent directories as needed
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Read a file back as a string
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> String {
        fs::read_to_string(path).expect("Failed to read file")
    }
}

/// One scripted model reply
pub enum Reply {
    Text(String),
    Fail(u16, String),
}

impl Reply {
    pub fn json(quotes: &[&str]) -> Self {
        Reply::Text(serde_json::to_string(quotes).expect("Failed to encode quotes"))
    }

    pub fn fenced(quotes: &[&str]) -> Self {
        let json = serde_json::to_string(quotes).expect("Failed to encode quotes");
        Reply::Text(format!("```json\n{json}\n```"))
    }
}

/// Completion model that replays canned replies in order and records every prompt.
/// Once the script is exhausted it answers with an empty JSON array.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(status, message)) => Err(LlmError::Api { status, message }),
            None => Ok("[]".to_string()),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}
