//! Index build orchestration.
//!
//! The builder runs strictly in sequence: list a directory, inspect each of
//! its files, append to the index, and only after every directory has been
//! scanned render and write the outputs.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::inspect::PdfInspector;
use crate::model::IndexDocument;
use crate::options::IndexOptions;
use crate::output::write_output;
use crate::parser::PdfBackend;
use crate::render::{render, IndexFormat};
use crate::visitor::{FileReport, ScanVisitor};
use crate::walk::list_files;

/// Totals for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Directories scanned
    pub directories: usize,

    /// Files found across all directories
    pub files: usize,

    /// Links added to the index
    pub linked: usize,

    /// Files without a link (metadata could not be read)
    pub skipped: usize,

    /// Output files written, in order
    pub outputs: Vec<PathBuf>,
}

/// Accumulates an [`IndexDocument`] from scanned directories.
pub struct IndexBuilder<B> {
    inspector: PdfInspector<B>,
    index: IndexDocument,
}

impl<B: PdfBackend> IndexBuilder<B> {
    /// Create a builder with an empty index.
    pub fn new(backend: B, title: impl Into<String>) -> Self {
        Self {
            inspector: PdfInspector::new(backend),
            index: IndexDocument::new(title),
        }
    }

    /// The index accumulated so far.
    pub fn index(&self) -> &IndexDocument {
        &self.index
    }

    /// Consume the builder and return the index.
    pub fn into_index(self) -> IndexDocument {
        self.index
    }

    /// Scan all directories, then render and write every output.
    pub fn run(
        &mut self,
        directories: &[PathBuf],
        outputs: &[(IndexFormat, PathBuf)],
        visitor: &mut dyn ScanVisitor,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for dir in directories {
            for report in self.scan_directory(dir, visitor)? {
                summary.files += 1;
                if report.is_linked() {
                    summary.linked += 1;
                } else {
                    summary.skipped += 1;
                }
            }
            summary.directories += 1;
        }

        summary.outputs = self.write_outputs(outputs, visitor)?;
        Ok(summary)
    }

    /// Add one section for `dir` and a link per readable file in it.
    pub fn scan_directory(
        &mut self,
        dir: &Path,
        visitor: &mut dyn ScanVisitor,
    ) -> Result<Vec<FileReport>> {
        let files = list_files(dir)?;
        visitor.visit_directory(dir, files.len());
        self.index.add_heading(dir.display().to_string());

        let reports = files
            .iter()
            .map(|path| {
                let report = self.add_file(path);
                visitor.visit_file(&report);
                report
            })
            .collect();
        Ok(reports)
    }

    /// Inspect one file and link it from the current section.
    ///
    /// Files whose metadata cannot be read are skipped. A readable file
    /// without a title is linked under its file name.
    pub fn add_file(&mut self, path: &Path) -> FileReport {
        let link_text = self.inspector.inspect_metadata(path).map(|metadata| {
            let text = metadata.title.unwrap_or_else(|| file_name(path));
            self.index.add_link(path.display().to_string(), text.clone());
            text
        });
        if link_text.is_none() {
            log::warn!("Skipping link for {}", path.display());
        }

        FileReport {
            path: path.to_path_buf(),
            link_text,
            preview: self.inspector.extract_preview(path),
        }
    }

    /// Render every output, then write them in order.
    ///
    /// All formats are rendered before the first write, and the first write
    /// failure aborts the remaining ones.
    pub fn write_outputs(
        &self,
        outputs: &[(IndexFormat, PathBuf)],
        visitor: &mut dyn ScanVisitor,
    ) -> Result<Vec<PathBuf>> {
        let rendered = outputs
            .iter()
            .map(|(format, path)| Ok((*format, path, render(&self.index, *format)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut written = Vec::with_capacity(rendered.len());
        for (format, path, content) in rendered {
            write_output(path, &content)?;
            visitor.visit_output(format, path);
            written.push(path.clone());
        }
        Ok(written)
    }
}

/// Build an index as described by `options`.
pub fn build_index<B: PdfBackend>(
    backend: B,
    options: &IndexOptions,
    visitor: &mut dyn ScanVisitor,
) -> Result<RunSummary> {
    let mut builder = IndexBuilder::new(backend, options.title.clone());
    builder.run(&options.directories, &options.outputs, visitor)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
