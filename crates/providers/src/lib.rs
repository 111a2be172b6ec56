//! Language-model provider implementations for DocChat.
//!
//! All providers implement the `docchat_core::Provider` trait.
//! [`build_from_config`] turns the validated settings into a provider once at
//! startup.

pub mod openai_compat;

pub use openai_compat::{Endpoint, OpenAiCompatProvider};

use std::sync::Arc;

use docchat_config::ProviderSettings;
use docchat_core::Provider;
use docchat_core::error::ProviderError;

/// Build the configured provider.
pub fn build_from_config(
    settings: &ProviderSettings,
) -> Result<Arc<dyn Provider>, ProviderError> {
    let provider = OpenAiCompatProvider::from_settings(settings)?;
    tracing::debug!(provider = %docchat_core::Provider::name(&provider), "Provider configured");
    Ok(Arc::new(provider))
}
