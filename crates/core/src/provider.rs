//! Provider trait — the abstraction over the language-model capability.
//!
//! A Provider accepts a model identifier, an ordered message list, an
//! output-length cap and a temperature, and returns the model's choices or
//! fails. It does not judge whether the returned content is usable; that is
//! the response generator's job.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::message::Message;

/// A single completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// The model (or Azure deployment) to use
    pub model: String,

    /// The ordered conversation messages
    pub messages: Vec<Message>,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

/// The structured reply from a provider.
///
/// `choices` may be empty and a choice may carry no content; both are
/// legitimate shapes that callers must handle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// Candidate completions, in provider order
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Which model actually responded
    #[serde(default)]
    pub model: String,

    /// Token usage statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl ProviderResponse {
    /// Content of the first choice, if the provider sent any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

/// One candidate completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl Choice {
    /// A choice carrying the given text.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            message: Some(ChoiceMessage {
                content: Some(content.into()),
            }),
            finish_reason: Some("stop".into()),
        }
    }
}

/// The message body of a choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The model capability.
///
/// Implemented by the HTTP provider in `docchat-providers` and by stubs in
/// tests. The generator only ever calls `complete()`.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "azure", "openai").
    fn name(&self) -> &str;

    /// Send a request and get the complete structured response.
    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_content_of_empty_response_is_none() {
        assert!(ProviderResponse::default().first_content().is_none());
    }

    #[test]
    fn first_content_skips_missing_message() {
        let resp = ProviderResponse {
            choices: vec![Choice::default(), Choice::text("later")],
            ..Default::default()
        };
        assert!(resp.first_content().is_none());
    }

    #[test]
    fn response_deserializes_openai_shape() {
        let json = r#"{
            "model": "gpt-35-turbo",
            "choices": [{"message": {"role": "assistant", "content": "Hi"}, "finish_reason": "stop"}],
            "usage": {"prompt_tokens": 3, "completion_tokens": 1, "total_tokens": 4}
        }"#;
        let resp: ProviderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_content(), Some("Hi"));
        assert_eq!(resp.usage.unwrap().total_tokens, 4);
    }

    #[test]
    fn response_tolerates_null_content() {
        let json = r#"{"choices": [{"message": {"content": null}}]}"#;
        let resp: ProviderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.choices.len(), 1);
        assert!(resp.first_content().is_none());
    }
}
