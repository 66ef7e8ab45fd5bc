//! Prompt assembly for outline generation.
//!
//! This module provides:
//!
//! - **Builder**: the built-in PRD outline prompt and the custom-template switch
//! - **Inputs**: trimming and section-list normalization shared by both paths
//! - **Template**: `{variable}` substitution for custom templates
//!
//! # Custom Templates
//!
//! A custom template may reference `{problem}`, `{goal}`, and `{sections}`:
//!
//! ```text
//! Draft a PRD for: {problem}
//!
//! Target outcome: {goal}
//!
//! Cover these sections:
//! {sections}
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod builder;
mod inputs;
mod template;

pub use builder::{PromptBuilder, REQUIREMENTS, build_prompt};
pub use inputs::{FALLBACK_SECTION, PromptInputs, TEMPLATE_VARIABLES};
pub use template::{TemplateError, render_template, validate_template};
