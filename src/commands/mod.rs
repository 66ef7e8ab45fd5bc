//! Command implementations for prd-outliner.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command starts from the discovered config.

mod catalog;
mod config_cmd;
mod generate;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => generate::cmd_generate(&config, args),
        Command::Prompt(args) => generate::cmd_prompt(&config, args),
        Command::Sections => catalog::cmd_sections(&config),
        Command::Models => catalog::cmd_models(&config),
        Command::Config => config_cmd::cmd_config(&config),
    }
}
