//! Config loading, validation, and conversion into runtime settings.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{OutlinerError, Result};
use crate::generation::{ClientSettings, EmptyCompletion};
use crate::outline::validate_temperature;
use crate::prompt::PromptBuilder;
use std::path::{Path, PathBuf};
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are kept in `extra` and otherwise ignored.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            OutlinerError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        config.source_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Locate and load the config.
    ///
    /// An explicit path must exist. Otherwise `prd-outliner.yaml` in the
    /// working directory is used if present, falling back to defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            tracing::debug!(path = %default_path.display(), "loading config");
            return Self::load(default_path);
        }

        tracing::debug!("no config file found; using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                OutlinerError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            OutlinerError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `temperature` must lie in `[0.0, 1.0]`
    /// - `api_base_url` must be an http(s) URL
    /// - `request_timeout_seconds`, if set, must be positive
    /// - `output_file_name` must be a bare `.md` file name
    /// - `prompt_template`, if set, must be a well-formed template
    pub fn validate(&self) -> Result<()> {
        validate_temperature(self.temperature).map_err(|e| {
            OutlinerError::UserError(format!("config validation failed: {}", e))
        })?;

        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(OutlinerError::UserError(format!(
                "config validation failed: api_base_url must start with http:// or https:// (found '{}')",
                self.api_base_url
            )));
        }

        if self.request_timeout_seconds == Some(0) {
            return Err(OutlinerError::UserError(
                "config validation failed: request_timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        let name = &self.output_file_name;
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(OutlinerError::UserError(format!(
                "config validation failed: output_file_name must be a file name without directories (found '{}')",
                name
            )));
        }
        if !name.ends_with(".md") {
            return Err(OutlinerError::UserError(format!(
                "config validation failed: output_file_name must end with .md (found '{}')",
                name
            )));
        }

        self.prompt_builder().map_err(|e| {
            OutlinerError::UserError(format!("config validation failed: prompt_template: {}", e))
        })?;

        Ok(())
    }

    /// Transport settings for the HTTP backend.
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_base_url.clone(),
            timeout: self.request_timeout_seconds.map(Duration::from_secs),
        }
    }

    /// Configured secrets file, resolved against the config file's directory.
    pub fn secrets_path(&self) -> Option<PathBuf> {
        let file = Path::new(self.secrets_file.as_deref()?);
        Some(match &self.source_dir {
            Some(dir) => dir.join(file),
            None => file.to_path_buf(),
        })
    }

    /// Prompt builder for the configured template, or the built-in one.
    pub fn prompt_builder(&self) -> Result<PromptBuilder> {
        PromptBuilder::from_template(self.prompt_template.as_deref())
    }

    pub fn empty_completion(&self) -> EmptyCompletion {
        if self.strict_completion {
            EmptyCompletion::Reject
        } else {
            EmptyCompletion::RawFallback
        }
    }
}
