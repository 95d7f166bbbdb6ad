//! Hosted language model advice.
//!
//! `Advisor` is the seam between the conversation and the model provider.
//! `GroqAdvisor` talks to Groq's OpenAI-compatible chat completions API with a
//! single system instruction plus the user's symptom text. No retries, no
//! streaming and no validation of the returned text.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::advisor_errors::AdvisorError;
use crate::config::AdvisorConfig;

/// Fixed instruction sent ahead of the user's symptoms
pub const SYSTEM_PROMPT: &str = "You are a rural healthcare assistant.
Based on the user's symptoms, give:
1. Possible Condition
2. Home Remedies
3. When to See Doctor
Keep it short, clear, and under 6 lines.
Only return the advice, no reasoning.";

/// Produces free-text advice for a symptom description
#[async_trait]
pub trait Advisor: Send + Sync {
    async fn advise(&self, symptoms: &str) -> Result<String, AdvisorError>;
}

/// Groq chat completions client
pub struct GroqAdvisor {
    config: AdvisorConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl GroqAdvisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Build the request body for the API
    fn build_request_body(&self, symptoms: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": symptoms },
            ],
        })
    }

    /// Extract the first choice's text from a response body
    fn parse_response(body: &str) -> Result<String, AdvisorError> {
        let completion: ChatCompletion =
            serde_json::from_str(body).map_err(|e| AdvisorError::Parse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AdvisorError::EmptyResponse)
    }
}

#[async_trait]
impl Advisor for GroqAdvisor {
    async fn advise(&self, symptoms: &str) -> Result<String, AdvisorError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(AdvisorError::MissingApiKey)?;

        let body = self.build_request_body(symptoms);
        debug!(model = %self.config.model, chars = symptoms.len(), "Sending advice request");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Advice request rejected by provider");
            return Err(AdvisorError::Http {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let advice = Self::parse_response(&body_text)?;
        info!(chars = advice.len(), "Advice received from model");
        Ok(advice)
    }
}
