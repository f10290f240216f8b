//! Visitor pattern for observing an index build.
//!
//! The library never prints. Callers that want per-file console lines or a
//! progress display implement [`ScanVisitor`] and pass it to the builder.
//!
//! # Example
//!
//! ```
//! use pdfindex::visitor::{FileReport, ScanVisitor};
//!
//! struct PrintVisitor;
//!
//! impl ScanVisitor for PrintVisitor {
//!     fn visit_file(&mut self, report: &FileReport) {
//!         println!("file({}): {}", report.path.display(), report.preview);
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::render::IndexFormat;

/// What happened to one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path of the source file
    pub path: PathBuf,

    /// Link text added to the index, `None` if the file was skipped
    pub link_text: Option<String>,

    /// First-page preview (empty if it could not be extracted)
    pub preview: String,
}

impl FileReport {
    /// Check if the file contributed a link to the index.
    pub fn is_linked(&self) -> bool {
        self.link_text.is_some()
    }
}

/// Trait for observing build progress.
///
/// All methods do nothing by default.
pub trait ScanVisitor {
    /// Called after a directory was listed, before its files are inspected.
    fn visit_directory(&mut self, dir: &Path, file_count: usize) {
        let _ = (dir, file_count);
    }

    /// Called once per scanned file, after inspection.
    fn visit_file(&mut self, report: &FileReport) {
        let _ = report;
    }

    /// Called after an output file was written.
    fn visit_output(&mut self, format: IndexFormat, path: &Path) {
        let _ = (format, path);
    }
}

/// Visitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentVisitor;

impl ScanVisitor for SilentVisitor {}

/// Visitor that records every event, mostly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingVisitor {
    /// Directories with their file counts
    pub directories: Vec<(PathBuf, usize)>,

    /// File reports in scan order
    pub files: Vec<FileReport>,

    /// Written outputs in write order
    pub outputs: Vec<(IndexFormat, PathBuf)>,
}

impl ScanVisitor for RecordingVisitor {
    fn visit_directory(&mut self, dir: &Path, file_count: usize) {
        self.directories.push((dir.to_path_buf(), file_count));
    }

    fn visit_file(&mut self, report: &FileReport) {
        self.files.push(report.clone());
    }

    fn visit_output(&mut self, format: IndexFormat, path: &Path) {
        self.outputs.push((format, path.to_path_buf()));
    }
}
