//! One chat turn against a session.
//!
//! The user's message is recorded before the model is called. If the call
//! fails the history keeps that message and gains no assistant reply, so the
//! caller can show the error and carry on.

use docchat_core::error::ProviderError;
use docchat_core::message::Message;
use docchat_core::session::Session;
use tracing::debug;

use crate::generator::ResponseGenerator;

/// Prompts answered with the greeting instead of a model call.
const GREETINGS: [&str; 2] = ["hi", "hello"];

/// Runs turns for a fixed model.
pub struct ChatAgent {
    generator: ResponseGenerator,
    model: String,
    greeting: Option<String>,
}

impl ChatAgent {
    pub fn new(generator: ResponseGenerator, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            greeting: None,
        }
    }

    /// Answer bare "hi"/"hello" with `greeting` without calling the model.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Process one user prompt and return the assistant's reply.
    pub async fn respond(
        &self,
        session: &mut Session,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        session.push(Message::user(prompt));

        let reply = match self.greeting_for(prompt) {
            Some(greeting) => {
                debug!("Greeting shortcut, skipping model call");
                greeting.to_string()
            }
            None => {
                self.generator
                    .generate_response(prompt, session.document_context(), &self.model)
                    .await?
            }
        };

        session.push(Message::assistant(&reply));
        Ok(reply)
    }

    fn greeting_for(&self, prompt: &str) -> Option<&str> {
        let greeting = self.greeting.as_deref()?;
        let lowered = prompt.to_lowercase();
        GREETINGS.contains(&lowered.as_str()).then_some(greeting)
    }
}
