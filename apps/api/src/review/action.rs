//! One user action: extract the résumé, bundle it with the variant's
//! instruction and the job description, and ask the model.
//!
//! Flow: upload → extract_text (blocking pool) → PromptBundle → backend.generate
//! Everything here is request-scoped; nothing is cached between actions.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract_text, PageReader, UploadedDocument};
use crate::review::dispatcher::{GenerationBackend, PromptBundle};
use crate::review::variant::PromptVariant;

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResult {
    pub variant: PromptVariant,
    pub heading: &'static str,
    pub model: String,
    pub result: String,
}

pub async fn run_review(
    variant: PromptVariant,
    upload: Option<UploadedDocument>,
    job_description: String,
    reader: Arc<dyn PageReader>,
    backend: &dyn GenerationBackend,
) -> Result<ReviewResult, AppError> {
    let upload_bytes = upload.as_ref().map(UploadedDocument::byte_len);

    // pdf-extract is CPU bound and may panic on hostile input.
    let resume_text =
        tokio::task::spawn_blocking(move || extract_text(upload.as_ref(), reader.as_ref()))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    AppError::Extraction("PDF parser aborted on this document".to_string())
                } else {
                    AppError::Internal(anyhow::Error::new(e).context("extraction task failed"))
                }
            })??;

    info!(
        variant = %variant,
        upload_bytes = upload_bytes.unwrap_or_default(),
        resume_chars = resume_text.chars().count(),
        "Dispatching review"
    );

    let bundle = PromptBundle {
        instruction: variant.instruction().to_string(),
        resume_text,
        job_description,
    };

    let result = backend.generate(&bundle).await?;

    Ok(ReviewResult {
        variant,
        heading: variant.heading(),
        model: backend.model().to_string(),
        result,
    })
}
