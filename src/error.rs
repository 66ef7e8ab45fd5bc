//! Error types for prd-outliner.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for outliner operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum OutlinerError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A precondition for generation was not met (empty input, missing credential).
    ///
    /// Always raised before any network call is attempted.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The text-generation call failed, whether in transport or on the service side.
    #[error("Generation failed: {0}")]
    GenerationError(String),

    /// A custom prompt template could not be rendered.
    #[error("Prompt assembly failed: {0}")]
    PromptAssemblyError(String),
}

impl OutlinerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            OutlinerError::UserError(_) => exit_codes::USER_ERROR,
            OutlinerError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            OutlinerError::GenerationError(_) => exit_codes::GENERATION_FAILURE,
            OutlinerError::PromptAssemblyError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for outliner operations.
pub type Result<T> = std::result::Result<T, OutlinerError>;
