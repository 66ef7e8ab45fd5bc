//! Normalized prompt inputs.
//!
//! Both the built-in prompt and custom templates read from `PromptInputs`,
//! so trimming and the empty-section fallback are applied in one place.

use crate::outline::OutlineRequest;
use std::collections::HashMap;

/// Section listed when the caller selected none.
pub const FALLBACK_SECTION: &str = "Context";

/// Variable names available to custom prompt templates.
pub const TEMPLATE_VARIABLES: [&str; 3] = ["problem", "goal", "sections"];

/// Trimmed problem and goal plus the section names to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptInputs {
    pub problem: String,
    pub goal: String,
    pub sections: Vec<String>,
}

impl PromptInputs {
    /// Normalize raw inputs.
    ///
    /// Section order and duplicates are preserved; an empty list becomes
    /// a single `Context` entry.
    pub fn new<S: AsRef<str>>(problem: &str, goal: &str, sections: &[S]) -> Self {
        let sections = if sections.is_empty() {
            vec![FALLBACK_SECTION.to_string()]
        } else {
            sections.iter().map(|s| s.as_ref().to_string()).collect()
        };

        Self {
            problem: problem.trim().to_string(),
            goal: goal.trim().to_string(),
            sections,
        }
    }

    pub fn from_request(request: &OutlineRequest) -> Self {
        Self::new(request.problem(), request.goal(), &request.section_labels())
    }

    /// Sections rendered as a Markdown bullet list, one `- name` per line.
    pub fn section_bullets(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("- {}", s))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Convert to variables for `render_template`.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let mut vars = HashMap::new();
        vars.insert("problem".to_string(), self.problem.clone());
        vars.insert("goal".to_string(), self.goal.clone());
        vars.insert("sections".to_string(), self.section_bullets());
        vars
    }
}
