//! Fixed catalogs offered by the outline form: document sections and models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named subdivision of the outline that the user can opt into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "Context")]
    Context,
    #[serde(rename = "Users & JTBD")]
    UsersAndJtbd,
    #[serde(rename = "User Stories")]
    UserStories,
    #[serde(rename = "Success Metrics")]
    SuccessMetrics,
    #[serde(rename = "Scope (In/Out)")]
    Scope,
    #[serde(rename = "Risks & Assumptions")]
    RisksAndAssumptions,
    #[serde(rename = "Open Questions")]
    OpenQuestions,
    #[serde(rename = "Launch Plan")]
    LaunchPlan,
    #[serde(rename = "Requirements")]
    Requirements,
}

impl Section {
    /// Every section in catalog order.
    pub const ALL: [Section; 9] = [
        Section::Context,
        Section::UsersAndJtbd,
        Section::UserStories,
        Section::SuccessMetrics,
        Section::Scope,
        Section::RisksAndAssumptions,
        Section::OpenQuestions,
        Section::LaunchPlan,
        Section::Requirements,
    ];

    /// Sections selected when the user does not choose any explicitly.
    pub const DEFAULT_SELECTION: [Section; 6] = [
        Section::Context,
        Section::UsersAndJtbd,
        Section::UserStories,
        Section::SuccessMetrics,
        Section::Scope,
        Section::RisksAndAssumptions,
    ];

    /// Display label, exactly as it appears in the prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Context => "Context",
            Section::UsersAndJtbd => "Users & JTBD",
            Section::UserStories => "User Stories",
            Section::SuccessMetrics => "Success Metrics",
            Section::Scope => "Scope (In/Out)",
            Section::RisksAndAssumptions => "Risks & Assumptions",
            Section::OpenQuestions => "Open Questions",
            Section::LaunchPlan => "Launch Plan",
            Section::Requirements => "Requirements",
        }
    }

    /// Short, shell-friendly alias accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Context => "context",
            Section::UsersAndJtbd => "users-jtbd",
            Section::UserStories => "user-stories",
            Section::SuccessMetrics => "success-metrics",
            Section::Scope => "scope",
            Section::RisksAndAssumptions => "risks-assumptions",
            Section::OpenQuestions => "open-questions",
            Section::LaunchPlan => "launch-plan",
            Section::Requirements => "requirements",
        }
    }

    /// Whether this section is part of the default selection.
    pub fn is_default(&self) -> bool {
        Self::DEFAULT_SELECTION.contains(self)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Section {
    type Err = String;

    /// Accepts either the label (case-insensitive) or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Section::ALL
            .iter()
            .copied()
            .find(|section| {
                section.label().eq_ignore_ascii_case(needle) || section.slug() == needle
            })
            .ok_or_else(|| {
                format!(
                    "unknown section '{}'. Valid sections: {}",
                    needle,
                    Section::ALL
                        .iter()
                        .map(|s| s.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// Text-generation model offered by the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ModelId {
    /// Faster and cheaper.
    #[default]
    #[serde(rename = "gpt-4o-mini")]
    #[value(name = "gpt-4o-mini")]
    Gpt4oMini,
    /// Stronger.
    #[serde(rename = "gpt-4o")]
    #[value(name = "gpt-4o")]
    Gpt4o,
}

impl ModelId {
    pub const ALL: [ModelId; 2] = [ModelId::Gpt4oMini, ModelId::Gpt4o];

    /// Identifier sent to the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gpt4oMini => "gpt-4o-mini",
            ModelId::Gpt4o => "gpt-4o",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelId::Gpt4oMini => "faster and cheaper",
            ModelId::Gpt4o => "stronger",
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
