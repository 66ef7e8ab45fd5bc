//! Configuration model for prd-outliner.
//!
//! This module defines the Config struct that represents `prd-outliner.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are kept aside),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE_NAME};
