//! Per-turn context handling.
//!
//! | Step | Module | Rule |
//! |------|--------|------|
//! | Budget | `token` | Keep the last `max - buffer` whitespace words |
//! | Order | `assembler` | Persona, then document context, then question |

pub mod assembler;
pub mod token;

pub use assembler::{PERSONA_PROMPT, PromptAssembler, assemble_messages};
pub use token::{DEFAULT_BUFFER_TOKENS, count_tokens, trim_context};
