//! [`PdfBackend`] implementation backed by `lopdf`.

use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object};

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::DocumentMetadata;

use super::text::{decode_pdf_string, page_lines};
use super::PdfBackend;

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
#[derive(Debug, Clone, Default)]
pub struct LopdfBackend {
    _private: (),
}

impl LopdfBackend {
    /// Create a new backend.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn load(&self, path: &Path) -> Result<LopdfDocument> {
        // Reject non-PDF files before handing them to the parser
        detect_format_from_path(path)?;
        Ok(LopdfDocument::load(path)?)
    }
}

impl PdfBackend for LopdfBackend {
    fn document_info(&self, path: &Path) -> Result<DocumentMetadata> {
        let doc = self.load(path)?;
        let mut metadata = DocumentMetadata::with_version(doc.version.to_string());

        if let Some(info) = info_dictionary(&doc) {
            metadata.title = get_string_from_dict(info, b"Title");
            metadata.author = get_string_from_dict(info, b"Author");
            metadata.subject = get_string_from_dict(info, b"Subject");
            metadata.keywords = get_string_from_dict(info, b"Keywords");
            metadata.creator = get_string_from_dict(info, b"Creator");
            metadata.producer = get_string_from_dict(info, b"Producer");
            metadata.created =
                get_string_from_dict(info, b"CreationDate").and_then(|d| parse_pdf_date(&d));
        }

        metadata.page_count = doc.get_pages().len() as u32;
        Ok(metadata)
    }

    fn page_text(&self, path: &Path, page_index: u32) -> Result<String> {
        let doc = self.load(path)?;
        let pages = doc.get_pages();

        // lopdf numbers pages from 1
        let page_num = page_index + 1;
        let page_id = *pages
            .get(&page_num)
            .ok_or(Error::PageOutOfRange(page_index, pages.len() as u32))?;

        page_lines(&doc, page_id).map_err(|e| match e {
            Error::TextExtract(msg) => Error::TextExtract(format!("Page {}: {}", page_num, msg)),
            other => other,
        })
    }
}

/// Resolve the trailer's `Info` entry, which may be inline or a reference.
fn info_dictionary(doc: &LopdfDocument) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_dictionary(*id).ok(),
        Object::Dictionary(dict) => Some(dict),
        _ => None,
    }
}

/// Read a text string from a PDF dictionary.
fn get_string_from_dict(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

/// Parse a PDF date string (D:YYYYMMDDHHmmSSOHH'mm').
fn parse_pdf_date(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    let s = s.strip_prefix("D:").unwrap_or(s);

    let year: i32 = s.get(0..4)?.parse().ok()?;
    let field = |range: std::ops::Range<usize>, default: u32| {
        s.get(range).and_then(|v| v.parse().ok()).unwrap_or(default)
    };

    chrono::NaiveDate::from_ymd_opt(year, field(4..6, 1), field(6..8, 1))
        .and_then(|date| date.and_hms_opt(field(8..10, 0), field(10..12, 0), field(12..14, 0)))
        .map(|dt| chrono::DateTime::from_naive_utc_and_offset(dt, chrono::Utc))
}
