//! Configuration constants and default value functions.

use crate::outline::{DEFAULT_TEMPERATURE, Section};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "prd-outliner.yaml";

/// File name used for the Markdown export.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "prd_outline.md";

// Default value functions for serde
pub(crate) fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}
pub(crate) fn default_sections() -> Vec<Section> {
    Section::DEFAULT_SELECTION.to_vec()
}
pub(crate) fn default_api_base_url() -> String {
    crate::generation::openai::DEFAULT_BASE_URL.to_string()
}
pub(crate) fn default_output_file_name() -> String {
    DEFAULT_OUTPUT_FILE_NAME.to_string()
}
