//! Exit code constants for the prd-outliner CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, malformed template, export failure)
//! - 2: Validation failure (missing problem/goal or credential)
//! - 3: Generation failure (the text-generation call failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable config, or an export that could not be written.
pub const USER_ERROR: i32 = 1;

/// Validation failure: empty problem/goal or no resolvable credential.
pub const VALIDATION_FAILURE: i32 = 2;

/// Generation failure: transport, authentication, or response errors from the service.
pub const GENERATION_FAILURE: i32 = 3;
