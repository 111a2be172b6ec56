//! Prompt assembly for a single turn.
//!
//! The model reads the request top to bottom, so the order is fixed:
//!
//! 1. **Persona** system message
//! 2. **Document context** system message, only when there is context
//! 3. **User** question
//!
//! Earlier turns are not folded in; a caller that wants them must submit
//! them itself.

use docchat_core::message::Message;
use docchat_core::provider::ProviderRequest;

/// The system instruction that opens every request.
pub const PERSONA_PROMPT: &str =
    "You are an assistant. Use the context provided to answer questions.";

/// Build the ordered messages for one turn.
pub fn assemble_messages(prompt: &str, context: &str) -> Vec<Message> {
    let mut messages = vec![Message::system(PERSONA_PROMPT), Message::user(prompt)];

    if !context.is_empty() {
        messages.insert(1, Message::system(context));
    }

    messages
}

/// Builds complete provider requests with fixed decoding settings.
#[derive(Debug, Clone, Copy)]
pub struct PromptAssembler {
    max_tokens: u32,
    temperature: f32,
}

impl PromptAssembler {
    pub fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }

    /// Assemble a request for `model`. `context` must already be trimmed.
    pub fn build(&self, prompt: &str, context: &str, model: &str) -> ProviderRequest {
        ProviderRequest {
            model: model.to_string(),
            messages: assemble_messages(prompt, context),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}
