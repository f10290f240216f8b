//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the two PDF operations the indexer
//! needs, isolating the concrete PDF library (lopdf) from the preview and
//! index logic.

use std::path::Path;

use crate::error::Result;
use crate::model::DocumentMetadata;

/// Abstract interface for PDF document access.
///
/// Each call opens, reads and closes the file at `path`; implementations
/// never hold a document open between calls.
pub trait PdfBackend {
    /// Read the document information dictionary and the page count.
    fn document_info(&self, path: &Path) -> Result<DocumentMetadata>;

    /// Extract the raw text of one page (0-indexed).
    fn page_text(&self, path: &Path, page_index: u32) -> Result<String>;
}

impl<B: PdfBackend + ?Sized> PdfBackend for &B {
    fn document_info(&self, path: &Path) -> Result<DocumentMetadata> {
        (**self).document_info(path)
    }

    fn page_text(&self, path: &Path, page_index: u32) -> Result<String> {
        (**self).page_text(path, page_index)
    }
}

impl<B: PdfBackend + ?Sized> PdfBackend for Box<B> {
    fn document_info(&self, path: &Path) -> Result<DocumentMetadata> {
        (**self).document_info(path)
    }

    fn page_text(&self, path: &Path, page_index: u32) -> Result<String> {
        (**self).page_text(path, page_index)
    }
}
