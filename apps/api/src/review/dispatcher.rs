//! Prompt dispatcher — forwards a prompt bundle to the generation endpoint.
//!
//! `AppState` holds an `Arc<dyn GenerationBackend>`; production wires in the
//! Gemini client, tests swap in recording or failing backends.

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppError;
use crate::llm_client::{GeminiClient, MODEL};

/// The three strings sent together as the model's input context.
/// Nothing is trimmed, truncated or validated on the way through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptBundle {
    pub instruction: String,
    pub resume_text: String,
    pub job_description: String,
}

impl PromptBundle {
    /// Parts in the order the endpoint receives them.
    pub fn parts(&self) -> [&str; 3] {
        [
            self.instruction.as_str(),
            self.resume_text.as_str(),
            self.job_description.as_str(),
        ]
    }
}

#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Identifier of the model that produces the text, reported back to clients.
    fn model(&self) -> &str;

    /// Returns the generated text verbatim, or the failure that prevented it.
    async fn generate(&self, bundle: &PromptBundle) -> Result<String, AppError>;
}

#[async_trait]
impl GenerationBackend for GeminiClient {
    fn model(&self) -> &str {
        MODEL
    }

    async fn generate(&self, bundle: &PromptBundle) -> Result<String, AppError> {
        Ok(self.call_text(&bundle.parts()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_keep_instruction_resume_jd_order() {
        let bundle = PromptBundle {
            instruction: "i".to_string(),
            resume_text: "r".to_string(),
            job_description: "j".to_string(),
        };
        assert_eq!(bundle.parts(), ["i", "r", "j"]);
    }

    #[test]
    fn test_gemini_backend_reports_fixed_model() {
        let client = GeminiClient::new("k".to_string(), "http://localhost".to_string());
        assert_eq!(GenerationBackend::model(&client), "gemini-1.5-flash");
    }
}
