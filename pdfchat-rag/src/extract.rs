//! Page-by-page PDF text extraction.
//!
//! Uploaded files are extracted with the [`pdf-extract`](https://docs.rs/pdf-extract)
//! crate and concatenated into one string per ingestion batch. A file that
//! cannot be parsed aborts the whole batch with
//! [`RagError::DocumentUnreadable`] — unreadable input is never silently
//! skipped. Pages that contain no text contribute nothing.

use std::path::Path;

use tracing::debug;

use crate::error::{RagError, Result};

/// An uploaded PDF file: its display name and raw bytes.
#[derive(Debug, Clone)]
pub struct UploadedPdf {
    /// File name used in error messages and logs.
    pub name: String,
    /// The raw PDF bytes.
    pub bytes: Vec<u8>,
}

impl UploadedPdf {
    /// Create an uploaded file from a name and raw bytes.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }

    /// Read an uploaded file from a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::DocumentUnreadable`] if the file cannot be read.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let bytes = std::fs::read(path).map_err(|e| RagError::DocumentUnreadable {
            name: name.clone(),
            message: format!("failed to read file: {e}"),
        })?;
        Ok(Self { name, bytes })
    }
}

/// Extract the text of every page of every file, concatenated in order.
///
/// Returns one string per batch: page texts are appended as extracted, with
/// no page-boundary markers. An empty batch yields an empty string.
///
/// # Errors
///
/// Returns [`RagError::DocumentUnreadable`] for the first file whose parse
/// or text extraction fails, aborting the batch.
pub fn extract_text(pdfs: &[UploadedPdf]) -> Result<String> {
    let mut text = String::new();

    for pdf in pdfs {
        let pages = pdf_extract::extract_text_from_mem_by_pages(&pdf.bytes).map_err(|e| {
            RagError::DocumentUnreadable { name: pdf.name.clone(), message: e.to_string() }
        })?;

        debug!(file = %pdf.name, page_count = pages.len(), "extracted pdf");

        for page_text in pages {
            if !page_text.is_empty() {
                text.push_str(&page_text);
            }
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_yields_empty_string() {
        let text = extract_text(&[]).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn garbage_bytes_abort_the_batch() {
        let pdfs = vec![UploadedPdf::new("broken.pdf", b"not a pdf at all".to_vec())];
        let err = extract_text(&pdfs).unwrap_err();
        match err {
            RagError::DocumentUnreadable { name, .. } => assert_eq!(name, "broken.pdf"),
            other => panic!("expected DocumentUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_unreadable() {
        let err = UploadedPdf::read("/nonexistent/missing.pdf").unwrap_err();
        assert!(matches!(err, RagError::DocumentUnreadable { .. }));
    }
}
