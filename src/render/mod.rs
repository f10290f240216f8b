//! Rendering module for converting an index to its output formats.
//!
//! Every format is a pure function of [`IndexDocument`]; none of them keep
//! state of their own.

mod html;
mod json;
mod org;

pub use html::to_html;
pub use json::to_json;
pub use org::to_org;

use std::fmt;

use crate::error::Result;
use crate::model::IndexDocument;

/// Index output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexFormat {
    /// Minimal HTML page
    Html,
    /// Org-mode outline
    Org,
    /// JSON manifest grouped by section
    Json,
}

impl IndexFormat {
    /// File name written when no explicit path is configured.
    pub fn default_file_name(self) -> &'static str {
        match self {
            IndexFormat::Html => "index.html",
            IndexFormat::Org => "index.org",
            IndexFormat::Json => "index.json",
        }
    }
}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexFormat::Html => "html",
            IndexFormat::Org => "org",
            IndexFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Render an index in the given format.
pub fn render(index: &IndexDocument, format: IndexFormat) -> Result<String> {
    match format {
        IndexFormat::Html => Ok(to_html(index)),
        IndexFormat::Org => Ok(to_org(index)),
        IndexFormat::Json => to_json(index),
    }
}
