//! Chat completions client used by the image caption proxy

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

/// Image the caption endpoint asks about
pub const IMAGE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/d/dd/Gfp-wisconsin-madison-the-nature-boardwalk.jpg/2560px-Gfp-wisconsin-madison-the-nature-boardwalk.jpg";

const PROMPT: &str = "What's in this image?";

/// Trait for completions backends, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionsApi: Send + Sync {
    /// Ask the model to describe the showcase image
    async fn describe_image(&self) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
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

/// OpenAI-compatible chat completions client
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    fn request_body(&self) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": PROMPT },
                    { "type": "image_url", "image_url": { "url": IMAGE_URL } }
                ]
            }]
        })
    }
}

/// Pull the first choice's text out of a completions response
fn first_content(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| anyhow!("No content in OpenAI response"))
}

#[async_trait]
impl CompletionsApi for OpenAiClient {
    async fn describe_image(&self) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            bail!("OPENAI_API_KEY is not set");
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(%url, model = %self.model, "Requesting completion");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&self.request_body())
            .send()
            .await
            .context("Completions request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "OpenAI API Error: {body}");
            bail!("Completions API returned {status}");
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("Malformed completions response")?;
        first_content(parsed)
    }
}
