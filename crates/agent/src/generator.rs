//! Response generation: trim, assemble, call, validate.
//!
//! Outcomes are split three ways:
//!
//! - a usable answer → [`Generation::Answer`]
//! - the model replied with nothing usable → [`Generation::EmptyCompletion`]
//! - the call itself failed → `Err(ProviderError)`
//!
//! Only the second is recovered locally (as [`FALLBACK_RESPONSE`]). Failures
//! are logged and returned; there is no retry.

use std::sync::Arc;

use docchat_core::error::ProviderError;
use docchat_core::provider::{Provider, ProviderResponse};
use tracing::{debug, error, info};

use crate::context::{DEFAULT_BUFFER_TOKENS, PromptAssembler, count_tokens, trim_context};

/// Context budget in whitespace tokens.
pub const MAX_CONTEXT_TOKENS: usize = 8192;

/// Cap on generated tokens per answer.
pub const MAX_OUTPUT_TOKENS: u32 = 150;

/// Sampling temperature for every turn.
pub const TEMPERATURE: f32 = 0.9;

/// Returned in place of an empty model answer.
pub const FALLBACK_RESPONSE: &str = "I'm sorry, I couldn't generate a response.";

/// The outcome of a successful model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Non-empty answer, surrounding whitespace stripped
    Answer(String),
    /// The model answered but had nothing to say
    EmptyCompletion,
}

impl Generation {
    /// Validate a provider response.
    pub fn from_response(response: &ProviderResponse) -> Self {
        match response.first_content().map(str::trim) {
            Some(text) if !text.is_empty() => Generation::Answer(text.to_string()),
            _ => Generation::EmptyCompletion,
        }
    }

    /// The text to show the user.
    pub fn into_text(self) -> String {
        match self {
            Generation::Answer(text) => text,
            Generation::EmptyCompletion => FALLBACK_RESPONSE.to_string(),
        }
    }
}

/// Stateless per-turn generator over a model provider.
pub struct ResponseGenerator {
    provider: Arc<dyn Provider>,
    assembler: PromptAssembler,
}

impl ResponseGenerator {
    pub fn new(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            assembler: PromptAssembler::new(MAX_OUTPUT_TOKENS, TEMPERATURE),
        }
    }

    /// Run one turn and classify the outcome.
    pub async fn generate(
        &self,
        prompt: &str,
        context: &str,
        model: &str,
    ) -> Result<Generation, ProviderError> {
        info!(model = %model, provider = %self.provider.name(), "Using deployment");

        let context = trim_context(context, MAX_CONTEXT_TOKENS, DEFAULT_BUFFER_TOKENS);
        let request = self.assembler.build(prompt, &context, model);
        debug!(
            context_tokens = count_tokens(&context),
            messages = request.messages.len(),
            "Prompt assembled"
        );

        let response = match self.provider.complete(request).await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Error generating response");
                return Err(e);
            }
        };

        debug!(
            model = %response.model,
            choices = response.choices.len(),
            "Response received"
        );

        let generation = Generation::from_response(&response);
        if generation == Generation::EmptyCompletion {
            error!(
                choices = response.choices.len(),
                "Invalid response structure, using fallback"
            );
        }
        Ok(generation)
    }

    /// Run one turn and return the text to show, substituting the fallback
    /// for an empty answer.
    pub async fn generate_response(
        &self,
        prompt: &str,
        context: &str,
        model: &str,
    ) -> Result<String, ProviderError> {
        Ok(self.generate(prompt, context, model).await?.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PERSONA_PROMPT;
    use crate::test_helpers::{FailingProvider, ScriptedProvider, empty_response, text_response};
    use docchat_core::message::Role;
    use docchat_core::provider::{Choice, ChoiceMessage};

    #[tokio::test]
    async fn answer_is_stripped() {
        let provider = Arc::new(ScriptedProvider::new(vec![text_response("  The total is 42.\n")]));
        let generator = ResponseGenerator::new(provider.clone());

        let text = generator
            .generate_response("What is the total?", "Total: 42", "gpt-35-turbo")
            .await
            .unwrap();
        assert_eq!(text, "The total is 42.");
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn request_uses_fixed_settings() {
        let provider = Arc::new(ScriptedProvider::new(vec![text_response("ok")]));
        let generator = ResponseGenerator::new(provider.clone());
        generator.generate("q", "ctx", "gpt-4o").await.unwrap();

        let request = provider.last_request().unwrap();
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.max_tokens, 150);
        assert!((request.temperature - 0.9).abs() < f32::EPSILON);
        let roles: Vec<Role> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::System, Role::User]);
        assert_eq!(request.messages[0].content, PERSONA_PROMPT);
    }

    #[tokio::test]
    async fn empty_context_sends_two_messages() {
        let provider = Arc::new(ScriptedProvider::new(vec![text_response("ok")]));
        let generator = ResponseGenerator::new(provider.clone());
        generator.generate("q", "", "m").await.unwrap();
        assert_eq!(provider.last_request().unwrap().messages.len(), 2);
    }

    #[tokio::test]
    async fn empty_choices_fall_back() {
        let provider = Arc::new(ScriptedProvider::new(vec![empty_response()]));
        let generator = ResponseGenerator::new(provider);

        let outcome = generator.generate("q", "ctx", "m").await.unwrap();
        assert_eq!(outcome, Generation::EmptyCompletion);
        assert_eq!(outcome.into_text(), "I'm sorry, I couldn't generate a response.");
    }

    #[tokio::test]
    async fn empty_choices_return_fallback_text() {
        let provider = Arc::new(ScriptedProvider::new(vec![empty_response()]));
        let generator = ResponseGenerator::new(provider);
        let text = generator.generate_response("q", "", "m").await.unwrap();
        assert_eq!(text, FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn null_and_blank_content_fall_back() {
        let null_content = ProviderResponse {
            choices: vec![Choice {
                message: Some(ChoiceMessage { content: None }),
                finish_reason: Some("content_filter".into()),
            }],
            ..Default::default()
        };
        let provider = Arc::new(ScriptedProvider::new(vec![
            null_content,
            text_response("   \n"),
        ]));
        let generator = ResponseGenerator::new(provider);

        for _ in 0..2 {
            let text = generator.generate_response("q", "", "m").await.unwrap();
            assert_eq!(text, FALLBACK_RESPONSE);
        }
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let provider = Arc::new(FailingProvider::new(ProviderError::Network(
            "connection refused".into(),
        )));
        let generator = ResponseGenerator::new(provider.clone());

        let result = generator.generate_response("q", "ctx", "m").await;
        assert!(matches!(result, Err(ProviderError::Network(_))));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn auth_failure_is_not_retried() {
        let provider = Arc::new(FailingProvider::new(ProviderError::AuthenticationFailed(
            "bad key".into(),
        )));
        let generator = ResponseGenerator::new(provider.clone());

        assert!(generator.generate("q", "", "m").await.is_err());
        assert_eq!(provider.calls(), 1);
    }
}
