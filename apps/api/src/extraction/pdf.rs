use tracing::debug;

use crate::extraction::{ExtractError, PageReader};

/// `pdf-extract` backed reader. One string per page, in document order.
pub struct PdfPageReader;

impl PageReader for PdfPageReader {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::Malformed(e.to_string()))?;
        debug!("Extracted {} page(s) from {} bytes", pages.len(), bytes.len());
        Ok(pages)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page_text_is_extracted() {
        let bytes = test_pdf::build(&["Python Developer with 5 years experience"]);
        let pages = PdfPageReader.read_pages(&bytes).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(
            pages[0].contains("Python Developer with 5 years experience"),
            "got {:?}",
            pages[0]
        );
    }

    #[test]
    fn test_pages_come_back_in_document_order() {
        let bytes = test_pdf::build(&["First page body", "Second page body"]);
        let pages = PdfPageReader.read_pages(&bytes).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("First page body"));
        assert!(pages[1].contains("Second page body"));
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = PdfPageReader.read_pages(b"this is not a pdf");
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }
}
