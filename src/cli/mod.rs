//! CLI argument parsing for prd-outliner.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::outline::{ModelId, OutlineForm, Section};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// prd-outliner: draft a PRD outline from a problem statement and a goal.
///
/// The outline is written by a hosted text-generation model and printed as
/// Markdown on stdout.
#[derive(Parser, Debug)]
#[command(name = "prd-outliner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config file to use instead of ./prd-outliner.yaml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for prd-outliner.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a PRD outline.
    ///
    /// Requires an API key from the secrets file or OPENAI_API_KEY.
    /// Issues exactly one request to the text-generation service.
    Generate(GenerateArgs),

    /// Print the prompt that `generate` would send.
    ///
    /// Needs no API key and makes no network call.
    Prompt(FormArgs),

    /// List the sections that can be included in an outline.
    Sections,

    /// List the supported models.
    Models,

    /// Print the effective configuration as YAML.
    Config,
}

/// The outline form: problem, goal, and section selection.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// What problem are we solving?
    #[arg(long, default_value = "")]
    pub problem: String,

    /// What does success look like?
    #[arg(long, default_value = "")]
    pub goal: String,

    /// Section to include, by label or slug (repeatable or comma-separated).
    ///
    /// Defaults to the configured selection.
    #[arg(long = "section", value_delimiter = ',', value_name = "SECTION")]
    pub sections: Vec<Section>,

    /// Include no explicit sections (the prompt falls back to Context).
    #[arg(long, conflicts_with = "sections")]
    pub no_sections: bool,
}

impl FormArgs {
    /// Section selection after applying `--no-sections` and the configured default.
    pub fn resolve_sections(&self, configured: &[Section]) -> Vec<Section> {
        if self.no_sections {
            Vec::new()
        } else if self.sections.is_empty() {
            configured.to_vec()
        } else {
            self.sections.clone()
        }
    }

    pub fn to_form(&self, configured: &[Section]) -> OutlineForm {
        OutlineForm {
            problem: self.problem.clone(),
            goal: self.goal.clone(),
            sections: self.resolve_sections(configured),
        }
    }
}

/// Arguments for the `generate` command.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Model to use.
    #[arg(long, value_enum)]
    pub model: Option<ModelId>,

    /// Sampling temperature from 0.0 to 1.0 in steps of 0.1 (lower is more deterministic).
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Also write the outline to this file (a directory gets prd_outline.md).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the prompt that was sent to stderr.
    #[arg(long)]
    pub show_prompt: bool,

    /// TOML secrets file holding OPENAI_API_KEY (checked before the environment).
    #[arg(long, value_name = "PATH")]
    pub secrets: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
