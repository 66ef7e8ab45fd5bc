//! The generate action: validate, build the prompt, request the outline.
//!
//! Both preconditions (credential present, problem and goal filled in) are
//! checked before the backend is constructed, so a failed precondition never
//! reaches the network.

use crate::credentials::{self, ApiKey};
use crate::error::Result;
use crate::generation::{EmptyCompletion, OutlineRequester, TextGenerator};
use crate::outline::{GeneratedOutline, GenerationParameters, OutlineForm, OutlineRequest};
use crate::prompt::PromptBuilder;

/// Result of a successful generate action.
#[derive(Debug, Clone)]
pub struct Generation {
    /// The exact prompt that was sent (for the debug view).
    pub prompt: String,
    pub outline: GeneratedOutline,
}

/// Settings that stay fixed across generate actions.
#[derive(Debug, Clone, Default)]
pub struct Outliner {
    pub builder: PromptBuilder,
    pub params: GenerationParameters,
    pub on_empty: EmptyCompletion,
}

impl Outliner {
    /// Assemble the prompt for a form without contacting the service.
    pub fn preview(&self, form: &OutlineForm) -> Result<String> {
        let request = OutlineRequest::try_from(form)?;
        self.builder.build(&request)
    }

    /// Run one generate action.
    ///
    /// `connect` builds the backend from the resolved credential; it is only
    /// invoked once every precondition has passed.
    pub fn generate<G, F>(
        &self,
        form: &OutlineForm,
        credential: Option<ApiKey>,
        connect: F,
    ) -> Result<Generation>
    where
        G: TextGenerator,
        F: FnOnce(ApiKey) -> Result<G>,
    {
        let api_key = credentials::require(credential)?;
        let request = OutlineRequest::try_from(form)?;
        let prompt = self.builder.build(&request)?;

        tracing::debug!(
            sections = ?request.section_labels(),
            prompt_chars = prompt.chars().count(),
            "prompt assembled"
        );

        let backend = connect(api_key)?;
        let outline = OutlineRequester::new(backend)
            .with_empty_completion(self.on_empty)
            .request_outline(&prompt, &self.params)?;

        Ok(Generation { prompt, outline })
    }
}
