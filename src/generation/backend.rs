//! Text-generation backend seam.
//!
//! `TextGenerator` is the only boundary the requester talks to. The HTTP
//! client implements it for the real service; tests substitute stubs.

use crate::outline::ModelId;
use serde::Serialize;
use thiserror::Error;

/// Speaker of a message in the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One message of the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Everything needed for one generation call.
///
/// Serializes directly as the service request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionCall {
    pub model: ModelId,
    pub temperature: f64,
    #[serde(rename = "input")]
    pub messages: Vec<Message>,
}

/// What came back from the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Extracted plain-text output, if the response carried any.
    pub text: Option<String>,
    /// The full response body.
    pub raw: serde_json::Value,
}

impl Completion {
    /// Non-blank extracted text, if any.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// Failures a backend may report.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced an HTTP response (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be interpreted.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A service that turns an exchange into generated text.
pub trait TextGenerator {
    /// Issue exactly one call. Implementations must not retry.
    fn generate(&self, call: &CompletionCall) -> Result<Completion, BackendError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn generate(&self, call: &CompletionCall) -> Result<Completion, BackendError> {
        (**self).generate(call)
    }
}
