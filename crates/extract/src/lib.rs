//! Document text extraction.
//!
//! Turns an uploaded document (PDF, Word, or plain text) into a single
//! string that the agent injects as context. Unsupported types are not an
//! error: they resolve to [`UNSUPPORTED_SENTINEL`] so the pipeline keeps
//! going with unhelpful but well-formed context.

pub mod docx;
pub mod media;
pub mod pdf;
pub mod text;

pub use media::MediaType;
pub use pdf::{LopdfPages, PageSource};

use std::path::Path;

use docchat_core::error::ExtractionError;
use tracing::debug;

/// Text returned in place of content for unsupported media types.
pub const UNSUPPORTED_SENTINEL: &str = "Unsupported file type.";

/// An uploaded document: raw bytes plus the declared media type.
#[derive(Debug, Clone)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub media_type: MediaType,
}

impl Document {
    pub fn new(bytes: impl Into<Vec<u8>>, media_type: MediaType) -> Self {
        Self {
            bytes: bytes.into(),
            media_type,
        }
    }

    /// Extract this document's text.
    pub fn extract(&self) -> Result<String, ExtractionError> {
        extract_text(&self.bytes, &self.media_type)
    }
}

/// Extract the text content of a document.
pub fn extract_text(bytes: &[u8], media_type: &MediaType) -> Result<String, ExtractionError> {
    let text = match media_type {
        MediaType::Pdf => pdf::extract(bytes)?,
        MediaType::Word => docx::extract(bytes)?,
        MediaType::PlainText => text::extract(bytes)?,
        MediaType::Unsupported(declared) => {
            debug!(media_type = %declared, "Unsupported media type, using sentinel text");
            return Ok(UNSUPPORTED_SENTINEL.to_string());
        }
    };

    debug!(media_type = %media_type, chars = text.len(), "Extracted document text");
    Ok(text)
}

/// Read a file from disk and extract it, resolving the media type from the
/// file extension.
pub fn extract_file(path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    extract_text(&bytes, &MediaType::from_path(path))
}
