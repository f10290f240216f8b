//! Source file enumeration.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// List every regular file under `root`, recursing into subdirectories.
///
/// Paths come back in the order the filesystem lists them; nothing is
/// sorted. A missing or unreadable root (or subdirectory) is an error, since
/// it points at a configuration problem rather than a bad document.
pub fn list_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|source| Error::ListDirectory {
            path: root.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    log::debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}
