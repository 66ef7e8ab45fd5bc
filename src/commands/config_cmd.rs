//! Implementation of the `prd-outliner config` command.

use crate::config::Config;
use crate::error::Result;

/// Print the effective configuration (file values merged over defaults).
pub fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}
