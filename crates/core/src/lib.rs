//! # DocChat Core
//!
//! Domain types, traits, and error definitions for the DocChat document
//! assistant. This crate has **zero framework dependencies**: it defines the
//! model that the extractor, provider, and agent crates implement against.
//!
//! The model capability is a trait here ([`Provider`]); the HTTP
//! implementation lives in `docchat-providers`, and tests substitute
//! scripted stubs.

pub mod error;
pub mod message;
pub mod provider;
pub mod session;

// Re-export key types at crate root for ergonomics
pub use error::{ExtractionError, ProviderError};
pub use message::{Message, Role};
pub use provider::{Choice, ChoiceMessage, Provider, ProviderRequest, ProviderResponse, Usage};
pub use session::Session;
