//! Per-invocation request and result types.
//!
//! Nothing here outlives a single generation: an `OutlineRequest` is built
//! from the current form state when generation is triggered, and the
//! resulting `GeneratedOutline` replaces any previous one.

use super::catalog::{ModelId, Section};
use crate::error::{OutlinerError, Result};

/// Lowest accepted sampling temperature.
pub const MIN_TEMPERATURE: f64 = 0.0;

/// Highest accepted sampling temperature.
pub const MAX_TEMPERATURE: f64 = 1.0;

/// Temperature used when none is configured.
pub const DEFAULT_TEMPERATURE: f64 = 0.3;

/// Granularity of accepted temperatures.
pub const TEMPERATURE_STEP: f64 = 0.1;

/// Raw form state as entered by the user, before validation.
#[derive(Debug, Clone, Default)]
pub struct OutlineForm {
    pub problem: String,
    pub goal: String,
    pub sections: Vec<Section>,
}

/// A validated request: problem and goal are guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRequest {
    problem: String,
    goal: String,
    sections: Vec<Section>,
}

impl OutlineRequest {
    /// Validate form input.
    ///
    /// Returns `ValidationError` if problem or goal is empty or whitespace only.
    /// The original (untrimmed) text is kept; trimming happens at prompt assembly.
    pub fn new(
        problem: impl Into<String>,
        goal: impl Into<String>,
        sections: Vec<Section>,
    ) -> Result<Self> {
        let problem = problem.into();
        let goal = goal.into();

        let mut missing = Vec::new();
        if problem.trim().is_empty() {
            missing.push("problem");
        }
        if goal.trim().is_empty() {
            missing.push("goal");
        }
        if !missing.is_empty() {
            return Err(OutlinerError::ValidationError(format!(
                "please fill in both problem and goal before generating (missing: {})",
                missing.join(", ")
            )));
        }

        Ok(Self {
            problem,
            goal,
            sections,
        })
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section labels in selection order.
    pub fn section_labels(&self) -> Vec<&'static str> {
        self.sections.iter().map(Section::label).collect()
    }
}

impl TryFrom<&OutlineForm> for OutlineRequest {
    type Error = OutlinerError;

    fn try_from(form: &OutlineForm) -> Result<Self> {
        OutlineRequest::new(form.problem.clone(), form.goal.clone(), form.sections.clone())
    }
}

/// Model selection passed to the text-generation service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParameters {
    pub model: ModelId,
    pub temperature: f64,
}

impl GenerationParameters {
    /// Build parameters, rejecting temperatures outside `[0.0, 1.0]`.
    pub fn new(model: ModelId, temperature: f64) -> Result<Self> {
        validate_temperature(temperature)?;
        Ok(Self { model, temperature })
    }
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Check that a temperature lies in `[0.0, 1.0]` on a 0.1 step.
pub fn validate_temperature(temperature: f64) -> Result<()> {
    if !temperature.is_finite() || !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        return Err(OutlinerError::UserError(format!(
            "temperature must be between {:.1} and {:.1} (got {})",
            MIN_TEMPERATURE, MAX_TEMPERATURE, temperature
        )));
    }

    let steps = temperature / TEMPERATURE_STEP;
    if (steps - steps.round()).abs() > 1e-9 {
        return Err(OutlinerError::UserError(format!(
            "temperature must be a multiple of {:.1} (got {})",
            TEMPERATURE_STEP, temperature
        )));
    }
    Ok(())
}

/// The Markdown document returned by a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutline {
    markdown: String,
}

impl GeneratedOutline {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn into_markdown(self) -> String {
        self.markdown
    }
}
