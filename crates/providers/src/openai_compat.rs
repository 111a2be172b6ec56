//! OpenAI-compatible provider implementation.
//!
//! Speaks the `/chat/completions` dialect in two flavours:
//! - Azure OpenAI: deployment-scoped URL, `api-version` query, `api-key` header
//! - Plain OpenAI-compatible endpoints (OpenAI, Ollama, vLLM): bearer auth
//!
//! The response is returned as-is in structure; an empty choice list or a
//! null content is not an error at this layer.

use std::time::Duration;

use async_trait::async_trait;
use docchat_config::{ProviderKind, ProviderSettings};
use docchat_core::error::ProviderError;
use docchat_core::message::Message;
use docchat_core::provider::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Where and how requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Azure { endpoint: String, api_version: String },
    OpenAi { base_url: String },
}

/// An OpenAI-compatible LLM provider.
pub struct OpenAiCompatProvider {
    name: String,
    endpoint: Endpoint,
    api_key: String,
    client: reqwest::Client,
}

impl OpenAiCompatProvider {
    /// Create a new provider with an explicit request timeout.
    pub fn new(
        name: impl Into<String>,
        endpoint: Endpoint,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {e}")))?;

        let endpoint = match endpoint {
            Endpoint::Azure {
                endpoint,
                api_version,
            } => Endpoint::Azure {
                endpoint: endpoint.trim_end_matches('/').to_string(),
                api_version,
            },
            Endpoint::OpenAi { base_url } => Endpoint::OpenAi {
                base_url: base_url.trim_end_matches('/').to_string(),
            },
        };

        Ok(Self {
            name: name.into(),
            endpoint,
            api_key: api_key.into(),
            client,
        })
    }

    /// Build from configuration. Azure requires both a key and an endpoint;
    /// OpenAI defaults to the public API when no endpoint is set.
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        let timeout = Duration::from_secs(settings.timeout_secs);
        match settings.kind {
            ProviderKind::Azure => {
                let api_key = settings.api_key.clone().ok_or_else(|| {
                    ProviderError::NotConfigured("AZURE_OPENAI_API_KEY is not set".into())
                })?;
                let endpoint = settings.endpoint.clone().ok_or_else(|| {
                    ProviderError::NotConfigured("AZURE_OPENAI_ENDPOINT is not set".into())
                })?;
                Self::new(
                    "azure",
                    Endpoint::Azure {
                        endpoint,
                        api_version: settings.api_version.clone(),
                    },
                    api_key,
                    timeout,
                )
            }
            ProviderKind::OpenAi => {
                let base_url = settings
                    .endpoint
                    .clone()
                    .unwrap_or_else(|| "https://api.openai.com/v1".into());
                Self::new(
                    "openai",
                    Endpoint::OpenAi { base_url },
                    settings.api_key.clone().unwrap_or_default(),
                    timeout,
                )
            }
        }
    }

    /// The completions URL for a given model or deployment.
    fn completions_url(&self, model: &str) -> String {
        match &self.endpoint {
            Endpoint::Azure {
                endpoint,
                api_version,
            } => format!(
                "{endpoint}/openai/deployments/{model}/chat/completions?api-version={api_version}"
            ),
            Endpoint::OpenAi { base_url } => format!("{base_url}/chat/completions"),
        }
    }

    /// Convert our Message types to the API format.
    fn to_api_messages(messages: &[Message]) -> Vec<ApiMessage> {
        messages
            .iter()
            .map(|m| ApiMessage {
                role: m.role.as_str().into(),
                content: Some(m.content.clone()),
            })
            .collect()
    }
}

/// Map a non-success HTTP status to a provider error.
fn status_error(status: u16, body: String, model: &str) -> ProviderError {
    match status {
        429 => ProviderError::RateLimited {
            retry_after_secs: 5,
        },
        401 | 403 => ProviderError::AuthenticationFailed(
            "Invalid API key or insufficient permissions".into(),
        ),
        404 => ProviderError::ModelNotFound(model.to_string()),
        _ => ProviderError::ApiError {
            status_code: status,
            message: body,
        },
    }
}

fn transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout(e.to_string())
    } else {
        ProviderError::Network(e.to_string())
    }
}

impl From<ApiResponse> for ProviderResponse {
    fn from(api: ApiResponse) -> Self {
        ProviderResponse {
            choices: api
                .choices
                .into_iter()
                .map(|c| Choice {
                    message: c.message.map(|m| ChoiceMessage { content: m.content }),
                    finish_reason: c.finish_reason,
                })
                .collect(),
            model: api.model.unwrap_or_default(),
            usage: api.usage.map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
        }
    }
}

#[async_trait]
impl docchat_core::Provider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let url = self.completions_url(&request.model);

        let body = serde_json::json!({
            "model": request.model,
            "messages": Self::to_api_messages(&request.messages),
            "max_tokens": request.max_tokens,
            "temperature": request.temperature,
        });

        debug!(
            provider = %self.name,
            model = %request.model,
            messages = request.messages.len(),
            "Sending completion request"
        );

        let mut http = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body);

        http = match self.endpoint {
            Endpoint::Azure { .. } => http.header("api-key", &self.api_key),
            Endpoint::OpenAi { .. } if !self.api_key.is_empty() => {
                http.header("Authorization", format!("Bearer {}", self.api_key))
            }
            Endpoint::OpenAi { .. } => http,
        };

        let response = http.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();

        if !response.status().is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status, body = %error_body, "Provider returned error");
            return Err(status_error(status, error_body, &request.model));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        Ok(api_response.into())
    }
}

// --- OpenAI API types (internal) ---

#[derive(Debug, Serialize, Deserialize)]
struct ApiMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ApiChoice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    #[serde(default)]
    message: Option<ApiMessage>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}
