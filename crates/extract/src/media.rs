//! Declared media types of uploaded documents.

use std::path::Path;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_TEXT: &str = "text/plain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    /// Office Open XML word-processing document (`.docx`)
    Word,
    PlainText,
    /// Anything else; carries the declared tag for logging
    Unsupported(String),
}

impl MediaType {
    /// Resolve a MIME type. Parameters such as `; charset=utf-8` are ignored.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            MIME_PDF => MediaType::Pdf,
            MIME_DOCX => MediaType::Word,
            MIME_TEXT => MediaType::PlainText,
            _ => MediaType::Unsupported(mime.to_string()),
        }
    }

    /// Resolve from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "pdf" => MediaType::Pdf,
            "docx" => MediaType::Word,
            "txt" => MediaType::PlainText,
            _ => MediaType::Unsupported(format!(".{ext}")),
        }
    }

    pub fn mime(&self) -> &str {
        match self {
            MediaType::Pdf => MIME_PDF,
            MediaType::Word => MIME_DOCX,
            MediaType::PlainText => MIME_TEXT,
            MediaType::Unsupported(declared) => declared,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime())
    }
}
