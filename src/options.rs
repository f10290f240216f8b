//! Index build options and configuration.

use std::path::PathBuf;

use crate::render::IndexFormat;

/// Default index title.
pub const DEFAULT_TITLE: &str = "Index";

/// Options for building an index.
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Index title
    pub title: String,

    /// Source directories, scanned in order (one section each)
    pub directories: Vec<PathBuf>,

    /// Output files, rendered and written in order
    pub outputs: Vec<(IndexFormat, PathBuf)>,
}

impl IndexOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the index title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Add a source directory.
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.push(dir.into());
        self
    }

    /// Add several source directories.
    pub fn with_directories<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.directories.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Write `format` to `path`, replacing any earlier path for that format.
    pub fn with_output(mut self, format: IndexFormat, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match self.outputs.iter_mut().find(|(f, _)| *f == format) {
            Some(slot) => slot.1 = path,
            None => self.outputs.push((format, path)),
        }
        self
    }

    /// Stop writing `format`.
    pub fn without_output(mut self, format: IndexFormat) -> Self {
        self.outputs.retain(|(f, _)| *f != format);
        self
    }

    /// Configured path for `format`, if it is written.
    pub fn output_path(&self, format: IndexFormat) -> Option<&PathBuf> {
        self.outputs
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, p)| p)
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            directories: Vec::new(),
            outputs: [IndexFormat::Html, IndexFormat::Org]
                .into_iter()
                .map(|f| (f, PathBuf::from(f.default_file_name())))
                .collect(),
        }
    }
}
