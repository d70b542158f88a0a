//! Résumé text extraction.
//!
//! An upload lives only for the request that carried it: it is read once,
//! turned into a flat string, and dropped.

pub mod pdf;

use bytes::Bytes;
use thiserror::Error;

pub use pdf::PdfPageReader;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no file uploaded")]
    MissingInput,

    #[error("{0}")]
    Malformed(String),
}

/// One uploaded PDF, held in memory for the duration of a single action.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedDocument {
    /// True when either the file name or the declared content type says PDF.
    pub fn is_pdf(&self) -> bool {
        let by_name = self
            .file_name
            .as_deref()
            .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false);
        let by_type = self
            .content_type
            .as_deref()
            .map(|t| t.eq_ignore_ascii_case("application/pdf"))
            .unwrap_or(false);
        by_name || by_type
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Splits a document into per-page plain text, in page order.
///
/// Carried in `AppState` as `Arc<dyn PageReader>` so tests can stand in
/// for the PDF parser.
pub trait PageReader: Send + Sync {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError>;
}

/// Returns the text of every page concatenated in page order.
///
/// No separator is inserted between pages. A missing upload is an error,
/// never an empty string.
pub fn extract_text(
    upload: Option<&UploadedDocument>,
    reader: &dyn PageReader,
) -> Result<String, ExtractError> {
    let upload = upload.ok_or(ExtractError::MissingInput)?;
    let pages = reader.read_pages(&upload.bytes)?;
    Ok(pages.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedPages(Vec<&'static str>);

    impl PageReader for FixedPages {
        fn read_pages(&self, _bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
            Ok(self.0.iter().map(|p| p.to_string()).collect())
        }
    }

    struct Broken;

    impl PageReader for Broken {
        fn read_pages(&self, _bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
            Err(ExtractError::Malformed("invalid file header".to_string()))
        }
    }

    fn upload(name: Option<&str>, content_type: Option<&str>) -> UploadedDocument {
        UploadedDocument {
            file_name: name.map(String::from),
            content_type: content_type.map(String::from),
            bytes: Bytes::from_static(b"%PDF-1.5"),
        }
    }

    #[test]
    fn test_missing_upload_is_an_error_not_empty_text() {
        let result = extract_text(None, &FixedPages(vec!["ignored"]));
        assert!(matches!(result, Err(ExtractError::MissingInput)));
    }

    #[test]
    fn test_pages_are_concatenated_in_order_without_separator() {
        let reader = FixedPages(vec!["Page one. ", "Page two.", "\nPage three"]);
        let doc = upload(Some("cv.pdf"), None);
        let text = extract_text(Some(&doc), &reader).unwrap();
        assert_eq!(text, "Page one. Page two.\nPage three");
    }

    #[test]
    fn test_zero_pages_yield_empty_text() {
        let doc = upload(Some("cv.pdf"), None);
        assert_eq!(extract_text(Some(&doc), &FixedPages(vec![])).unwrap(), "");
    }

    #[test]
    fn test_reader_failure_propagates() {
        let doc = upload(Some("cv.pdf"), None);
        let result = extract_text(Some(&doc), &Broken);
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }

    #[test]
    fn test_is_pdf_by_extension_or_content_type() {
        assert!(upload(Some("Resume.PDF"), None).is_pdf());
        assert!(upload(Some("resume"), Some("application/pdf")).is_pdf());
        assert!(!upload(Some("resume.docx"), Some("application/msword")).is_pdf());
        assert!(!upload(None, None).is_pdf());
    }
}
