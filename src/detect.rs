//! PDF header sniffing.
//!
//! Scanned directories usually hold more than PDFs (notes, slides, archives).
//! Checking the `%PDF-x.y` header first turns those into a clean
//! [`Error::UnknownFormat`] instead of an opaque parser failure.
//!
//! Like most readers, the header may follow leading junk (mail headers,
//! a stray BOM) as long as it starts within the first [`HEADER_WINDOW`] bytes.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Number of leading bytes searched for the `%PDF-` marker.
pub const HEADER_WINDOW: usize = 1024;

/// Read the header of `path` and return the declared PDF version (e.g. `"1.7"`).
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut header = Vec::with_capacity(HEADER_WINDOW);
    File::open(path)?
        .take(HEADER_WINDOW as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Return the PDF version declared by the first bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<String> {
    let window = &data[..data.len().min(HEADER_WINDOW)];
    let start = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;
    let version = data[start + PDF_MAGIC.len()..]
        .get(..3)
        .ok_or(Error::UnknownFormat)?;

    match version {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(String::from_utf8_lossy(version).into_owned())
        }
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(version).into_owned(),
        )),
    }
}

/// Check whether `path` carries a PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_valid_pdf() {
        let version = detect_format_from_bytes(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap();
        assert_eq!(version, "1.7");
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_format_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let result = detect_format_from_bytes(b"%PDF");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_garbled_version() {
        let result = detect_format_from_bytes(b"%PDF-x.y");
        assert!(matches!(result, Err(Error::UnsupportedVersion(v)) if v == "x.y"));
    }

    #[test]
    fn test_detect_header_after_leading_junk() {
        let mut data = b"From: archive@example.com\r\n\r\n".to_vec();
        data.extend_from_slice(b"%PDF-1.4\n");
        assert_eq!(detect_format_from_bytes(&data).unwrap(), "1.4");
    }

    #[test]
    fn test_detect_header_beyond_window() {
        let mut data = vec![b' '; HEADER_WINDOW];
        data.extend_from_slice(b"%PDF-1.4\n");
        assert!(matches!(
            detect_format_from_bytes(&data),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_is_pdf_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("a.pdf");
        let prefixed = dir.path().join("mailed.pdf");
        let txt = dir.path().join("notes.txt");
        std::fs::write(&pdf, b"%PDF-1.4\n").unwrap();
        std::fs::write(&prefixed, b"\xef\xbb\xbf\n%PDF-1.4\n").unwrap();
        std::fs::write(&txt, b"hi").unwrap();

        assert!(is_pdf(&pdf));
        assert!(is_pdf(&prefixed));
        assert!(!is_pdf(&txt));
    }
}
