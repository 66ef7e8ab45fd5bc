//! API credential resolution.
//!
//! The key is resolved once at startup and handed to the HTTP backend at
//! construction; it is never written back into the process environment.
//!
//! Resolution order:
//! 1. A TOML secrets file (if one is configured) containing `OPENAI_API_KEY = "..."`
//! 2. The `OPENAI_API_KEY` environment variable
//!
//! Empty values count as absent.

use crate::error::{OutlinerError, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Name of the credential, both as a secrets-file key and environment variable.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Secret key for the text-generation service. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, returning `None` for blank input.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(rename = "OPENAI_API_KEY")]
    openai_api_key: Option<String>,
}

/// Read the key from a TOML secrets file.
///
/// The file is always named explicitly, so a missing, unreadable, or
/// malformed file is a `UserError`. A file without the key yields `Ok(None)`.
pub fn read_secrets_file(path: &Path) -> Result<Option<ApiKey>> {
    if !path.is_file() {
        return Err(OutlinerError::UserError(format!(
            "secrets file '{}' not found",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        OutlinerError::UserError(format!(
            "failed to read secrets file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let secrets: SecretsFile = toml::from_str(&content).map_err(|e| {
        OutlinerError::UserError(format!(
            "failed to parse secrets file '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(secrets.openai_api_key.and_then(ApiKey::new))
}

/// Resolve the key from an optional secrets file, falling back to `env_value`.
pub fn resolve_from(secrets_file: Option<&Path>, env_value: Option<String>) -> Result<Option<ApiKey>> {
    if let Some(path) = secrets_file
        && let Some(key) = read_secrets_file(path)?
    {
        tracing::debug!(path = %path.display(), "using API key from secrets file");
        return Ok(Some(key));
    }

    let key = env_value.and_then(ApiKey::new);
    if key.is_some() {
        tracing::debug!("using API key from {}", API_KEY_VAR);
    }
    Ok(key)
}

/// Resolve the key from an optional secrets file and the process environment.
pub fn resolve_api_key(secrets_file: Option<&Path>) -> Result<Option<ApiKey>> {
    resolve_from(secrets_file, std::env::var(API_KEY_VAR).ok())
}

/// Turn an unresolved credential into the blocking validation error shown to users.
pub fn require(key: Option<ApiKey>) -> Result<ApiKey> {
    key.ok_or_else(|| {
        OutlinerError::ValidationError(format!(
            "missing API key. Set {} in the environment or add it to a secrets file \
             (--secrets <path> or `secrets_file` in the config).",
            API_KEY_VAR
        ))
    })
}
