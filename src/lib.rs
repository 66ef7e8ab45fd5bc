//! prd-outliner: turn a problem statement and a goal into a PRD outline.
//!
//! The library holds the two core pieces and the plumbing around them:
//!
//! - [`prompt`]: deterministic prompt assembly
//! - [`generation`]: the single call to the text-generation service
//! - [`session`]: the generate action tying validation, prompt, and call together
//!
//! The `prd-outliner` binary is a thin CLI over [`commands`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod exit_codes;
pub mod export;
pub mod generation;
pub mod logging;
pub mod outline;
pub mod prompt;
pub mod session;

#[cfg(test)]
mod test_support;
