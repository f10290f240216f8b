//! HTML rendering for the index.

use crate::model::{IndexDocument, IndexEntry};

/// Render the index as a minimal HTML page.
///
/// Each heading becomes an `<h1>`, each link a paragraph wrapping an anchor.
pub fn to_html(index: &IndexDocument) -> String {
    let mut output = format!("<html>\n<head>{}</head>\n<body>\n", escape_html(index.title()));

    for entry in index.entries() {
        match entry {
            IndexEntry::Heading(text) => {
                output.push_str(&format!("<h1>{}</h1>\n", escape_html(text)));
            }
            IndexEntry::Link(link) => {
                output.push_str(&format!(
                    "<p><a href=\"{}\">{}</a></p>\n",
                    escape_html(&link.url),
                    escape_html(&link.text)
                ));
            }
        }
    }

    output.push_str("</body>\n</html>\n");
    output
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
