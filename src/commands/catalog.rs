//! Implementation of the `prd-outliner sections` and `prd-outliner models` commands.

use crate::config::Config;
use crate::error::Result;
use crate::outline::{ModelId, Section};

/// Execute the `prd-outliner sections` command.
pub fn cmd_sections(config: &Config) -> Result<()> {
    print!("{}", render_sections(&config.sections));
    Ok(())
}

/// Execute the `prd-outliner models` command.
pub fn cmd_models(config: &Config) -> Result<()> {
    print!("{}", render_models(config.model));
    Ok(())
}

/// Catalog table with `[x]` marking the sections selected by default.
fn render_sections(selected: &[Section]) -> String {
    let mut out = String::from("Sections:\n");
    for section in Section::ALL {
        let marker = if selected.contains(&section) { "x" } else { " " };
        out.push_str(&format!(
            "  [{}] {:22} {}\n",
            marker,
            section.label(),
            section.slug()
        ));
    }
    out
}

fn render_models(default: ModelId) -> String {
    let mut out = String::from("Models:\n");
    for model in ModelId::ALL {
        let marker = if model == default { "*" } else { " " };
        out.push_str(&format!(
            "  {} {:12} {}\n",
            marker,
            model.as_str(),
            model.description()
        ));
    }
    out
}
