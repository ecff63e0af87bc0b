//! Chat Completion Client
//!
//! Minimal client for OpenAI-compatible `/chat/completions` endpoints.
//! Both OpenAI and DashScope (compatible mode) speak this shape.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::NewsError;

/// Client bound to one endpoint, one key, and one model.
pub struct ChatClient {
    base_url: String,
    api_key: String,
    model: String,
    http: Client,
}

impl ChatClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            http: Client::new(),
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn model(&self) -> &str {
        &self.model
    }

    /// Request a single completion for a system + user prompt pair.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, NewsError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
            "temperature": 1.0,
            "max_tokens": 80,
            "stream": false,
        });

        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = %self.model, url = %url, "Sending chat completion request");

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NewsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = resp.json().await?;
        extract_content(parsed)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

/// Pull the first choice's text out of a completion response.
pub(crate) fn extract_content(resp: ChatResponse) -> Result<String, NewsError> {
    resp.choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(NewsError::EmptyCompletion)
}
