//! Outline prompt assembly.

use super::inputs::{PromptInputs, TEMPLATE_VARIABLES};
use super::template::{render_template, validate_template};
use crate::error::{OutlinerError, Result};
use crate::outline::OutlineRequest;

/// Authoring constraints listed under `## Requirements`, in order.
pub const REQUIREMENTS: [&str; 7] = [
    "Be specific and concrete; avoid fluff.",
    "Keep each section short (bullets welcome).",
    "Write in **Markdown** with clear headers (`##`).",
    "For **Success Metrics**, include **quantitative** examples.",
    "For **User Stories**, include 3-6 well-formed stories (\"As a ... I want ... so that ...\").",
    "For **Scope (In/Out)**, list crisp in/out bullets.",
    "If something is unknown, add it under **Open Questions**.",
];

const PERSONA: &str = "You are an experienced Product Manager. \
Draft a concise, practical **PRD outline** from the inputs below.";

const CLOSING: &str = "Return only the Markdown for the PRD outline. No prefaces or explanations.";

/// Build the outline prompt.
///
/// Problem and goal are trimmed; an empty section list is rendered as a
/// single `Context` bullet. Deterministic and side-effect free.
///
/// ```
/// use prd_outliner::prompt::build_prompt;
///
/// let prompt = build_prompt("  Checkout is slow. ", "Halve checkout time.", &["Success Metrics"]);
/// assert!(prompt.contains("- **Problem**: Checkout is slow.\n"));
/// assert!(prompt.contains("- Success Metrics"));
/// ```
pub fn build_prompt<S: AsRef<str>>(problem: &str, goal: &str, sections: &[S]) -> String {
    render_builtin(&PromptInputs::new(problem, goal, sections))
}

fn render_builtin(inputs: &PromptInputs) -> String {
    let requirements = REQUIREMENTS
        .iter()
        .map(|r| format!("- {}", r))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{PERSONA}\n\
         \n\
         ## Inputs\n\
         - **Problem**: {problem}\n\
         - **Goal**: {goal}\n\
         - **Sections to include**:\n\
         {sections}\n\
         \n\
         ## Requirements\n\
         {requirements}\n\
         \n\
         {CLOSING}",
        problem = inputs.problem,
        goal = inputs.goal,
        sections = inputs.section_bullets(),
    )
}

/// Chooses between the built-in prompt and a user-supplied template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PromptBuilder {
    #[default]
    Builtin,
    /// Template using `{problem}`, `{goal}`, and `{sections}`.
    Custom(String),
}

impl PromptBuilder {
    /// Create a builder from an optional custom template, checking its syntax up front.
    pub fn from_template(template: Option<&str>) -> Result<Self> {
        match template {
            None => Ok(Self::Builtin),
            Some(t) => {
                validate_template(t, &TEMPLATE_VARIABLES)
                    .map_err(|e| OutlinerError::PromptAssemblyError(e.to_string()))?;
                Ok(Self::Custom(t.to_string()))
            }
        }
    }

    /// Assemble the prompt for a validated request.
    pub fn build(&self, request: &OutlineRequest) -> Result<String> {
        let inputs = PromptInputs::from_request(request);
        match self {
            PromptBuilder::Builtin => Ok(render_builtin(&inputs)),
            PromptBuilder::Custom(template) => {
                render_template(template, &inputs.to_template_vars())
                    .map_err(|e| OutlinerError::PromptAssemblyError(e.to_string()))
            }
        }
    }
}
