//! Résumé upload decoding: plain UTF-8 text or PDF.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("resume file is empty")]
    Empty,

    #[error("resume file is not valid UTF-8 text")]
    NotUtf8,

    /// The extractor's own message is logged, not returned.
    #[error("could not read text from PDF resume")]
    Pdf,
}

/// Returns the résumé's text. PDFs are recognised by content type or magic
/// bytes; everything else must be UTF-8.
pub async fn decode_resume(content_type: Option<&str>, data: Bytes) -> Result<String, ResumeError> {
    let text = if is_pdf(content_type, &data) {
        debug!("Extracting text from {} byte PDF resume", data.len());
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| e.to_string())
        .and_then(|extracted| extracted)
        .map_err(|detail| {
            warn!("PDF resume extraction failed: {detail}");
            ResumeError::Pdf
        })?
    } else {
        String::from_utf8(data.to_vec()).map_err(|_| ResumeError::NotUtf8)?
    };

    if text.trim().is_empty() {
        return Err(ResumeError::Empty);
    }
    Ok(text)
}

fn is_pdf(content_type: Option<&str>, data: &[u8]) -> bool {
    content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        || data.starts_with(PDF_MAGIC)
}
