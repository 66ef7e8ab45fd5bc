//! Blocking HTTP backend for the OpenAI Responses API.

use super::backend::{BackendError, Completion, CompletionCall, TextGenerator};
use crate::credentials::ApiKey;
use crate::error::{OutlinerError, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Transport settings for the HTTP backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    /// `None` keeps the HTTP client's own default.
    pub timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client bound to one API key.
pub struct OpenAiClient {
    http: Client,
    endpoint: String,
    api_key: ApiKey,
}

impl OpenAiClient {
    pub fn new(settings: &ClientSettings, api_key: ApiKey) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("prd-outliner/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(|e| {
            OutlinerError::GenerationError(format!("failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            endpoint: responses_endpoint(&settings.base_url),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TextGenerator for OpenAiClient {
    fn generate(&self, call: &CompletionCall) -> std::result::Result<Completion, BackendError> {
        tracing::debug!(endpoint = %self.endpoint, "sending generation request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(call)
            .send()
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            BackendError::Transport(format!("failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_completion(&body)
    }
}

fn responses_endpoint(base_url: &str) -> String {
    format!("{}/responses", base_url.trim_end_matches('/'))
}

/// Parse a successful response body.
pub fn parse_completion(body: &str) -> std::result::Result<Completion, BackendError> {
    let raw: Value =
        serde_json::from_str(body).map_err(|e| BackendError::Malformed(e.to_string()))?;
    if !raw.is_object() {
        return Err(BackendError::Malformed(format!(
            "expected a JSON object, got: {}",
            raw
        )));
    }

    let text = extract_output_text(&raw);
    Ok(Completion { text, raw })
}

/// Pull the plain-text output from a response.
///
/// Prefers a top-level `output_text`; otherwise concatenates every
/// `output_text` part of every `message` item in `output`.
fn extract_output_text(raw: &Value) -> Option<String> {
    if let Some(text) = raw.get("output_text").and_then(Value::as_str) {
        return Some(text.to_string());
    }

    let parts: Vec<&str> = raw
        .get("output")?
        .as_array()?
        .iter()
        .filter(|item| item.get("type").and_then(Value::as_str) == Some("message"))
        .filter_map(|item| item.get("content").and_then(Value::as_array))
        .flatten()
        .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

/// Best human-readable message from an error response body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| match body.trim() {
            "" => "empty response body".to_string(),
            other => other.to_string(),
        })
}
