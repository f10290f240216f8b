//! Writing rendered index files.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Write `content` to `path`, replacing any existing file.
///
/// The content goes to a temporary file next to `path` first and is then
/// renamed over the target, so readers never see a half-written index.
pub fn write_output<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(parent).map_err(write_error)?;
    file.write_all(content.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
