//! # pdfindex
//!
//! Build static indexes of PDF collections.
//!
//! The library scans directories of PDF files, reads each document's
//! metadata and a short first-page preview, and renders an index page in
//! HTML, Org-mode and JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfindex::{build_index, IndexOptions, LopdfBackend};
//! use pdfindex::visitor::SilentVisitor;
//!
//! fn main() -> pdfindex::Result<()> {
//!     let options = IndexOptions::new()
//!         .with_title("DVCON")
//!         .with_directory("_2019");
//!
//!     let summary = build_index(LopdfBackend::new(), &options, &mut SilentVisitor)?;
//!     println!("{} documents indexed", summary.linked);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two synchronized formats**: HTML and Org-mode rendered from one entry list
//! - **Bounded previews**: first 20 lines of page one, cut at a double blank line
//! - **Lenient scanning**: unreadable PDFs are logged and skipped
//! - **Atomic output**: index files are replaced by rename, never half-written
//! - **Pluggable parsing**: the PDF library sits behind [`PdfBackend`]

pub mod builder;
pub mod detect;
pub mod error;
pub mod inspect;
pub mod model;
pub mod options;
pub mod output;
pub mod parser;
pub mod render;
pub mod visitor;
pub mod walk;

// Re-export commonly used types
pub use builder::{build_index, IndexBuilder, RunSummary};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf};
pub use error::{Error, Result};
pub use inspect::{preview_from_text, PdfInspector, PREVIEW_LINE_LIMIT};
pub use model::{DocumentMetadata, IndexDocument, IndexEntry, IndexLink, IndexSection};
pub use options::IndexOptions;
pub use output::write_output;
pub use parser::{LopdfBackend, PdfBackend};
pub use render::{render, IndexFormat};
pub use walk::list_files;

use std::path::Path;

/// Read the metadata of a single PDF file.
///
/// # Example
///
/// ```no_run
/// let metadata = pdfindex::read_metadata("_2019/a.pdf").unwrap();
/// println!("{:?} ({} pages)", metadata.title, metadata.page_count);
/// ```
pub fn read_metadata<P: AsRef<Path>>(path: P) -> Result<DocumentMetadata> {
    LopdfBackend::new().document_info(path.as_ref())
}

/// Compute the first-page preview of a single PDF file.
///
/// # Example
///
/// ```no_run
/// let preview = pdfindex::read_preview("_2019/a.pdf").unwrap();
/// println!("{}", preview);
/// ```
pub fn read_preview<P: AsRef<Path>>(path: P) -> Result<String> {
    let text = LopdfBackend::new().page_text(path.as_ref(), 0)?;
    Ok(preview_from_text(&text))
}
