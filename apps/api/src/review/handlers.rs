//! Axum route handlers for the Review API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::UploadedDocument;
use crate::review::action::{run_review, ReviewResult};
use crate::review::variant::PromptVariant;
use crate::state::AppState;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";
/// Multipart field carrying the job description text.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

#[derive(Debug, Serialize)]
pub struct VariantInfo {
    pub variant: PromptVariant,
    pub label: &'static str,
    pub heading: &'static str,
}

/// The request-scoped form state of a single action.
#[derive(Debug, Default)]
struct ReviewForm {
    job_description: String,
    resume: Option<UploadedDocument>,
}

/// GET /api/v1/variants
pub async fn handle_list_variants() -> Json<Vec<VariantInfo>> {
    Json(
        PromptVariant::ALL
            .into_iter()
            .map(|variant| VariantInfo {
                variant,
                label: variant.label(),
                heading: variant.heading(),
            })
            .collect(),
    )
}

/// POST /api/v1/review/:variant
///
/// multipart/form-data with `job_description` and `resume` (PDF).
pub async fn handle_review(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    multipart: Multipart,
) -> Result<Json<ReviewResult>, AppError> {
    let variant: PromptVariant = variant.parse().map_err(AppError::NotFound)?;
    let form = read_form(multipart).await?;

    let result = run_review(
        variant,
        form.resume,
        form.job_description,
        state.page_reader.clone(),
        state.generator.as_ref(),
    )
    .await?;

    Ok(Json(result))
}

async fn read_form(mut multipart: Multipart) -> Result<ReviewForm, AppError> {
    let mut form = ReviewForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed multipart body"))?
    {
        let name = field.name().map(String::from);
        match name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => {
                form.job_description = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, "Unreadable job description"))?;
            }
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "Unreadable resume upload"))?;

                // Browsers send an empty, unnamed part when no file was chosen.
                let unnamed = file_name.as_deref().map_or(true, str::is_empty);
                if unnamed && bytes.is_empty() {
                    continue;
                }

                let upload = UploadedDocument {
                    file_name,
                    content_type,
                    bytes,
                };
                if !upload.is_pdf() {
                    return Err(AppError::Validation(
                        "Only PDF files are accepted".to_string(),
                    ));
                }
                form.resume = Some(upload);
            }
            other => debug!("Ignoring unexpected form field {:?}", other),
        }
    }

    Ok(form)
}

fn multipart_error(err: MultipartError, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}
