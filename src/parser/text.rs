//! Line-preserving text extraction from page content streams.
//!
//! lopdf's own `extract_text` only breaks lines at `ET`, so a whole text
//! block comes back as one line. Here every line-advancing operator
//! (`T*`, `'`, `"`, and `Td`/`TD`/`Tm` moves that change the baseline)
//! ends the current line.

use lopdf::content::{Content, Operation};
use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};

/// TJ adjustment (in 1/1000 text space units) treated as a word gap.
const TJ_SPACE_THRESHOLD: f32 = 200.0;

/// Extract the text of one page, one output line per text line.
pub(crate) fn page_lines(doc: &LopdfDocument, page_id: ObjectId) -> Result<String> {
    let fonts = doc
        .get_page_fonts(page_id)
        .map_err(|e| Error::PdfParse(e.to_string()))?;
    let data = doc
        .get_page_content(page_id)
        .map_err(|e| Error::TextExtract(e.to_string()))?;
    let content = Content::decode(&data).map_err(|e| Error::PdfParse(e.to_string()))?;

    Ok(collect_lines(&content.operations, |font_name, bytes| {
        fonts
            .get(font_name)
            .and_then(|font| font.get_font_encoding(doc).ok())
            .and_then(|encoding| LopdfDocument::decode_text(&encoding, bytes).ok())
            .unwrap_or_else(|| decode_pdf_string(bytes))
    }))
}

/// Walk content stream operations and build newline-separated text.
///
/// `decode` turns a string operand into text given the current font
/// resource name.
fn collect_lines<F>(operations: &[Operation], mut decode: F) -> String
where
    F: FnMut(&[u8], &[u8]) -> String,
{
    let mut writer = LineWriter::default();
    let mut font_name: Vec<u8> = Vec::new();

    for op in operations {
        match op.operator.as_str() {
            "BT" => writer.begin_block(),
            "ET" => writer.soft_break(),
            "Tf" => {
                if let Some(Ok(name)) = op.operands.first().map(Object::as_name) {
                    font_name = name.to_vec();
                }
            }
            "Td" | "TD" => {
                let ty = op.operands.get(1).and_then(number).unwrap_or(0.0);
                writer.move_by(ty);
            }
            "Tm" => {
                if let Some(y) = op.operands.get(5).and_then(number) {
                    writer.move_to(y);
                }
            }
            "T*" => writer.new_line(),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    writer.push(&decode(&font_name, bytes));
                }
            }
            "'" => {
                writer.new_line();
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    writer.push(&decode(&font_name, bytes));
                }
            }
            "\"" => {
                writer.new_line();
                if let Some(Object::String(bytes, _)) = op.operands.get(2) {
                    writer.push(&decode(&font_name, bytes));
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = op.operands.first() {
                    for item in items {
                        match item {
                            Object::String(bytes, _) => writer.push(&decode(&font_name, bytes)),
                            other => {
                                if number(other).is_some_and(|n| -n > TJ_SPACE_THRESHOLD) {
                                    writer.word_gap();
                                }
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    writer.finish()
}

/// Accumulates text, tracking whether the current line has content and
/// the current baseline.
#[derive(Debug, Default)]
struct LineWriter {
    text: String,
    line_open: bool,
    y: f32,
}

impl LineWriter {
    fn begin_block(&mut self) {
        self.y = 0.0;
    }

    fn push(&mut self, s: &str) {
        if !s.is_empty() {
            self.text.push_str(s);
            self.line_open = true;
        }
    }

    fn word_gap(&mut self) {
        if self.line_open && !self.text.ends_with(' ') {
            self.text.push(' ');
        }
    }

    /// Unconditional line break (`T*`, `'`, `"`).
    fn new_line(&mut self) {
        self.text.push('\n');
        self.line_open = false;
    }

    /// Break only if something was written on the current line.
    fn soft_break(&mut self) {
        if self.line_open {
            self.new_line();
        }
    }

    fn move_by(&mut self, ty: f32) {
        if ty != 0.0 {
            self.soft_break();
            self.y += ty;
        }
    }

    fn move_to(&mut self, y: f32) {
        if (y - self.y).abs() > f32::EPSILON {
            self.soft_break();
        }
        self.y = y;
    }

    fn finish(mut self) -> String {
        self.soft_break();
        self.text
    }
}

fn number(obj: &Object) -> Option<f32> {
    obj.as_float().ok()
}

/// Decode a PDF text string: UTF-16BE with BOM, else UTF-8, else Latin-1.
pub(crate) fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16_bytes) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16_bytes
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
