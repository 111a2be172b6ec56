//! Per-user chat session state.
//!
//! The session owns the conversation history and the text of the currently
//! loaded document. It is held by the caller and lent to one turn at a time,
//! so history appends never interleave.

use serde::{Deserialize, Serialize};

use crate::message::Message;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Ordered, append-only turn history
    pub history: Vec<Message>,

    /// Text extracted from the last uploaded document, or empty
    pub document_text: String,
}

impl Session {
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            document_text: String::new(),
        }
    }

    /// Replace the document context with newly extracted text.
    pub fn load_document(&mut self, text: impl Into<String>) {
        self.document_text = text.into();
    }

    /// Append a message to the history.
    pub fn push(&mut self, message: Message) {
        self.history.push(message);
    }

    /// The document text to inject as context, empty if none was loaded.
    pub fn document_context(&self) -> &str {
        &self.document_text
    }

    /// Start over: drop the history and the document.
    pub fn reset(&mut self) {
        self.history.clear();
        self.document_text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.document_text.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
