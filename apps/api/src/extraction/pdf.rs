//! PDF text extraction.
//!
//! `pdf-extract` is synchronous and can panic on hostile input, so parsing runs on a
//! blocking worker. The upload buffer is moved into the worker and dropped there,
//! whether extraction succeeds or not.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

const PDF_SIGNATURE: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("uploaded file is empty")]
    Empty,

    #[error("uploaded file is not a PDF")]
    NotPdf,

    #[error("malformed PDF: {0}")]
    Malformed(String),

    #[error("PDF has no extractable text layer")]
    NoText,

    #[error("PDF parser aborted: {0}")]
    Aborted(String),
}

/// Extracts the text layer of an in-memory PDF.
pub async fn extract_text(bytes: Bytes) -> Result<String, ExtractionError> {
    check_signature(&bytes)?;
    let size = bytes.len();

    let text = tokio::task::spawn_blocking(move || {
        let result = pdf_extract::extract_text_from_mem(&bytes);
        drop(bytes);
        result
    })
    .await
    .map_err(|e| ExtractionError::Aborted(e.to_string()))?
    .map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }

    debug!("Extracted {} chars from {} byte PDF", text.len(), size);
    Ok(text)
}

fn check_signature(bytes: &[u8]) -> Result<(), ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::Empty);
    }
    // Some producers emit a few junk bytes before the header; readers tolerate up to 1 KiB.
    let head = &bytes[..bytes.len().min(1024)];
    if !head.windows(PDF_SIGNATURE.len()).any(|w| w == PDF_SIGNATURE) {
        return Err(ExtractionError::NotPdf);
    }
    Ok(())
}
