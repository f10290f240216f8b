//! Per-file inspection: metadata lookup and first-page preview.
//!
//! Failures here never abort a scan. They are logged with the offending path
//! and turned into an absent or empty result.

use std::path::Path;

use crate::model::DocumentMetadata;
use crate::parser::PdfBackend;

/// Maximum number of first-page lines considered for a preview.
pub const PREVIEW_LINE_LIMIT: usize = 20;

/// Raw line treated as blank by the preview algorithm.
const BLANK_LINE: &str = " \n";

/// Build a preview from the raw text of a page.
///
/// Takes at most [`PREVIEW_LINE_LIMIT`] lines, stops at the first pair of
/// consecutive `" \n"` lines (the first of the pair is kept), and strips every
/// newline from the result.
pub fn preview_from_text(text: &str) -> String {
    let mut preview = String::new();
    let mut previous_blank = false;

    for line in text.split_inclusive('\n').take(PREVIEW_LINE_LIMIT) {
        let blank = line == BLANK_LINE;
        if blank && previous_blank {
            break;
        }
        preview.push_str(line);
        previous_blank = blank;
    }

    preview.replace('\n', "")
}

/// Reads metadata and previews through a [`PdfBackend`].
#[derive(Debug, Clone, Default)]
pub struct PdfInspector<B> {
    backend: B,
}

impl<B: PdfBackend> PdfInspector<B> {
    /// Create an inspector over a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Document metadata, or `None` if the file could not be read.
    pub fn inspect_metadata(&self, path: &Path) -> Option<DocumentMetadata> {
        match self.backend.document_info(path) {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                log::warn!("Can not get information from file: {}: {}", path.display(), e);
                None
            }
        }
    }

    /// First-page preview, or an empty string if the page could not be read.
    pub fn extract_preview(&self, path: &Path) -> String {
        match self.backend.page_text(path, 0) {
            Ok(text) => preview_from_text(&text),
            Err(e) => {
                log::warn!("Can not get lines from file: {}: {}", path.display(), e);
                String::new()
            }
        }
    }
}
