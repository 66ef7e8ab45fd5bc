//! Config struct definition and default implementation.

use super::types::*;
use crate::outline::{ModelId, Section};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Configuration for prd-outliner.
///
/// This struct represents the contents of `prd-outliner.yaml`. Every field is
/// optional; command-line flags override whatever is set here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Form defaults
    // =========================================================================
    /// Model used when `--model` is not given.
    #[serde(default)]
    pub model: ModelId,

    /// Sampling temperature used when `--temperature` is not given.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Sections selected when no `--section` is given.
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,

    // =========================================================================
    // Service settings
    // =========================================================================
    /// Base URL of the text-generation API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout. Unset keeps the HTTP client's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<u64>,

    /// TOML file holding `OPENAI_API_KEY`, checked before the environment.
    ///
    /// A relative path is taken relative to the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets_file: Option<String>,

    /// Fail instead of returning the raw response when the service sends no text.
    #[serde(default)]
    pub strict_completion: bool,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// File name for the Markdown export when `--output` names a directory.
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Custom prompt template replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,

    /// Directory of the file this config was loaded from.
    #[serde(skip)]
    pub source_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelId::default(),
            temperature: default_temperature(),
            sections: default_sections(),
            api_base_url: default_api_base_url(),
            request_timeout_seconds: None,
            secrets_file: None,
            strict_completion: false,
            output_file_name: default_output_file_name(),
            prompt_template: None,
            extra: BTreeMap::new(),
            source_dir: None,
        }
    }
}
