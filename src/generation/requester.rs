//! One-shot outline request against a `TextGenerator`.

use super::backend::{CompletionCall, Message, TextGenerator};
use crate::error::{OutlinerError, Result};
use crate::outline::{GeneratedOutline, GenerationParameters};

/// System-level instruction sent ahead of every prompt.
pub const SYSTEM_INSTRUCTION: &str =
    "You write crisp, actionable PRD outlines that are easy to copy into docs.";

/// How to treat a successful response that carries no usable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyCompletion {
    /// Return the serialized raw response as the outline.
    #[default]
    RawFallback,
    /// Fail with a `GenerationError`.
    Reject,
}

/// Issues a single generation call and unwraps the result.
pub struct OutlineRequester<G> {
    backend: G,
    on_empty: EmptyCompletion,
}

impl<G: TextGenerator> OutlineRequester<G> {
    pub fn new(backend: G) -> Self {
        Self {
            backend,
            on_empty: EmptyCompletion::default(),
        }
    }

    pub fn with_empty_completion(mut self, on_empty: EmptyCompletion) -> Self {
        self.on_empty = on_empty;
        self
    }

    /// Request an outline for an assembled prompt.
    ///
    /// Makes exactly one backend call. Every backend failure comes back as
    /// `OutlinerError::GenerationError` carrying the underlying message.
    pub fn request_outline(
        &self,
        prompt: &str,
        params: &GenerationParameters,
    ) -> Result<GeneratedOutline> {
        let call = CompletionCall {
            model: params.model,
            temperature: params.temperature,
            messages: vec![Message::system(SYSTEM_INSTRUCTION), Message::user(prompt)],
        };

        tracing::info!(
            model = %params.model,
            temperature = params.temperature,
            prompt_chars = prompt.chars().count(),
            "requesting outline"
        );

        let completion = self.backend.generate(&call).map_err(|e| {
            tracing::warn!(error = %e, "generation call failed");
            OutlinerError::GenerationError(e.to_string())
        })?;

        if let Some(text) = completion.usable_text() {
            tracing::info!(chars = text.chars().count(), "outline generated");
            return Ok(GeneratedOutline::new(text));
        }

        match self.on_empty {
            EmptyCompletion::RawFallback => {
                tracing::warn!("response carried no output text; returning raw response");
                Ok(GeneratedOutline::new(completion.raw.to_string()))
            }
            EmptyCompletion::Reject => Err(OutlinerError::GenerationError(format!(
                "response contained no output text: {}",
                completion.raw
            ))),
        }
    }
}
