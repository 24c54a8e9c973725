//! Document Text Extractor: turns an uploaded CV blob into plain text.
//!
//! Extraction is best-effort: a corrupt PDF or DOCX yields an empty string,
//! never an error. The upload handler decides what an empty result means.

mod docx;
mod pdf;

use tracing::warn;

/// Declared kind of an uploaded document, derived from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Plain,
}

impl DocumentKind {
    /// Maps `.pdf`, `.docx` and `.txt` (any case) to a kind; anything else is `None`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, extension) = filename.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            "txt" => Some(DocumentKind::Plain),
            _ => None,
        }
    }
}

/// Extracts text synchronously. PDF decoding is CPU bound, so request
/// handlers go through `extract_text` instead.
pub fn extract(content: &[u8], kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Pdf => pdf::extract_pdf(content),
        DocumentKind::Docx => docx::extract_docx(content),
        DocumentKind::Plain => String::from_utf8_lossy(content).into_owned(),
    }
}

/// Runs `extract` on the blocking pool. A failed blocking task is reported
/// as an empty extraction.
pub async fn extract_text(content: bytes::Bytes, kind: DocumentKind) -> String {
    match tokio::task::spawn_blocking(move || extract(&content, kind)).await {
        Ok(text) => text,
        Err(e) => {
            warn!("{kind:?} extraction aborted: {e}");
            String::new()
        }
    }
}
