//! Markdown export of a generated outline.
//!
//! The export holds exactly the generated text; nothing is prepended or
//! appended.

mod atomic;

pub use atomic::atomic_write;

use crate::error::Result;
use crate::outline::GeneratedOutline;
use std::path::{Path, PathBuf};

/// MIME type of the exported document.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// A downloadable Markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownExport {
    file_name: String,
    body: String,
}

impl MarkdownExport {
    pub fn new(outline: &GeneratedOutline, file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            body: outline.markdown().to_string(),
        }
    }

    pub fn mime(&self) -> &'static str {
        MARKDOWN_MIME
    }

    /// Where `write_to(target)` will put the file.
    ///
    /// - an existing directory, or a path ending in a separator, gets `file_name` inside it
    /// - a path without an extension gets `.md`
    /// - anything else is used as given
    pub fn resolve_path(&self, target: &Path) -> PathBuf {
        let raw = target.as_os_str().to_string_lossy();
        if target.is_dir() || raw.ends_with('/') || raw.ends_with('\\') {
            return target.join(&self.file_name);
        }
        if target.extension().is_none() {
            return target.with_extension("md");
        }
        target.to_path_buf()
    }

    /// Write the export and return the final path.
    pub fn write_to(&self, target: &Path) -> Result<PathBuf> {
        let path = self.resolve_path(target);
        atomic_write(&path, self.body.as_bytes())?;
        tracing::info!(
            path = %path.display(),
            mime = self.mime(),
            bytes = self.body.len(),
            "outline exported"
        );
        Ok(path)
    }
}
