//! Text-completion service client.
//!
//! Prompts are sent one at a time, in batch order, with fixed sampling
//! parameters. The batch path never fails: a per-prompt error is logged
//! (status and body when the service answered, transport message otherwise)
//! and recorded as [`CompletionSlot::Failed`], so every prompt keeps exactly
//! one response slot and positional field mapping downstream stays intact.

use crate::{Config, Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

/// Placeholder written when the service answers without any text.
pub const MISSING_TEXT_PLACEHOLDER: &str = "Text is undefined";

/// Sampling parameters sent with every completion request.
///
/// Defaults match the production values: `max_tokens` is held under the page
/// database's 2000-character rich-text limit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionParams {
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
    /// Nucleus sampling cutoff.
    pub top_p: f32,
    /// Frequency penalty.
    pub frequency_penalty: f32,
    /// Presence penalty.
    pub presence_penalty: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            model: "text-davinci-003".to_string(),
            temperature: 0.7,
            max_tokens: 356,
            top_p: 1.0,
            frequency_penalty: 1.0,
            presence_penalty: 0.0,
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    #[serde(flatten)]
    params: &'a CompletionParams,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    text: Option<String>,
}

/// One response slot, positionally aligned with its prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionSlot {
    /// The service produced text for this prompt.
    Text(String),
    /// The call failed; the slot is kept so later slots do not shift.
    Failed,
}

impl CompletionSlot {
    /// The completed text, if the call succeeded.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Failed => None,
        }
    }
}

/// Client for the external text-completion endpoint.
pub struct CompletionClient {
    client: Client,
    endpoint: String,
    api_key: String,
    params: CompletionParams,
}

impl CompletionClient {
    /// Creates a client from the resolved configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("pagegen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            endpoint: config.completion_endpoint.clone(),
            api_key: config.completion_api_key.clone(),
            params: CompletionParams::default(),
        })
    }

    /// Replace the sampling parameters.
    #[must_use]
    pub fn with_params(mut self, params: CompletionParams) -> Self {
        self.params = params;
        self
    }

    /// Send one prompt and return the first choice's text.
    ///
    /// Leading whitespace is trimmed. A successful response without text
    /// yields [`MISSING_TEXT_PLACEHOLDER`].
    ///
    /// # Errors
    ///
    /// [`Error::Completion`] on a non-success status, [`Error::Network`] on
    /// transport failure.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/completions", self.endpoint);
        let body = CompletionRequest {
            params: &self.params,
            prompt,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Completion {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.text)
            .map_or_else(
                || MISSING_TEXT_PLACEHOLDER.to_string(),
                |text| text.trim_start().to_string(),
            );

        debug!(bytes = text.len(), "Collected completion");
        Ok(text)
    }

    /// Send a batch of prompts sequentially, one slot per prompt.
    ///
    /// Failures are logged and swallowed; the returned batch always has the
    /// same length as `prompts`. No retries.
    pub async fn complete_batch(&self, prompts: &[String]) -> Vec<CompletionSlot> {
        let mut slots = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            match self.complete(prompt).await {
                Ok(text) => slots.push(CompletionSlot::Text(text)),
                Err(Error::Completion { status, body }) => {
                    error!(status, %body, "Completion call failed");
                    slots.push(CompletionSlot::Failed);
                },
                Err(e) => {
                    error!(error = %e, "Completion call failed");
                    slots.push(CompletionSlot::Failed);
                },
            }
        }
        slots
    }
}
