//! Test doubles shared by the review action and route tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::AppError;
use crate::extraction::{ExtractError, PageReader};
use crate::llm_client::LlmError;
use crate::review::dispatcher::{GenerationBackend, PromptBundle};

/// Records every bundle it receives and answers with a fixed reply.
#[derive(Clone, Default)]
pub struct RecordingBackend {
    pub calls: Arc<Mutex<Vec<PromptBundle>>>,
    pub reply: String,
}

impl RecordingBackend {
    pub fn replying(reply: &str) -> Self {
        Self {
            calls: Arc::default(),
            reply: reply.to_string(),
        }
    }

    pub fn calls(&self) -> Vec<PromptBundle> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for RecordingBackend {
    fn model(&self) -> &str {
        "recording"
    }

    async fn generate(&self, bundle: &PromptBundle) -> Result<String, AppError> {
        self.calls.lock().unwrap().push(bundle.clone());
        Ok(self.reply.clone())
    }
}

/// Always fails the way an unreachable endpoint would.
pub struct FailingBackend;

#[async_trait]
impl GenerationBackend for FailingBackend {
    fn model(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _bundle: &PromptBundle) -> Result<String, AppError> {
        Err(AppError::Llm(LlmError::Api {
            status: 503,
            message: "The model is overloaded.".to_string(),
        }))
    }
}

/// Treats the uploaded bytes as UTF-8 text split on form feeds, one page per chunk.
pub struct PlainTextPages;

impl PageReader for PlainTextPages {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| ExtractError::Malformed(e.to_string()))?;
        Ok(text.split('\u{c}').map(String::from).collect())
    }
}

/// Simulates a parser that blows up on hostile input.
pub struct PanickingPages;

impl PageReader for PanickingPages {
    fn read_pages(&self, _bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        panic!("unexpected end of xref table");
    }
}
