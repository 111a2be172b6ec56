//! The document-grounded chat pipeline.
//!
//! Each turn runs one linear sequence:
//!
//! 1. **Trim** the document text to the context budget (most recent words win)
//! 2. **Assemble** persona → document context → user question
//! 3. **Call** the model with fixed decoding settings
//! 4. **Validate** the reply; an empty answer becomes a fallback sentence,
//!    a failed call is returned to the caller
//!
//! Nothing here holds state between turns; the caller owns the
//! [`docchat_core::Session`].

pub mod context;
pub mod generator;
pub mod turn;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use context::{
    DEFAULT_BUFFER_TOKENS, PERSONA_PROMPT, PromptAssembler, assemble_messages, count_tokens,
    trim_context,
};
pub use generator::{
    FALLBACK_RESPONSE, Generation, MAX_CONTEXT_TOKENS, MAX_OUTPUT_TOKENS, ResponseGenerator,
    TEMPERATURE,
};
pub use turn::ChatAgent;
