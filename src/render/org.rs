//! Org-mode outline rendering for the index.

use crate::model::{IndexDocument, IndexEntry};

/// Render the index as an Org-mode outline.
pub fn to_org(index: &IndexDocument) -> String {
    let mut output = format!("{}\n\n", index.title());

    for entry in index.entries() {
        match entry {
            IndexEntry::Heading(text) => {
                output.push_str(&format!("* {}\n", text));
            }
            IndexEntry::Link(link) => {
                output.push_str(&format!(
                    "[[file:{}][{}]]\n",
                    escape_org_target(&link.url),
                    escape_org_description(&link.text)
                ));
            }
        }
    }

    output
}

/// Org link targets escape brackets (and backslashes before them) with `\`.
fn escape_org_target(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '[' | ']' => {
                out.push('\\');
                out.push(c);
            }
            '\\' if matches!(chars.peek(), Some('[' | ']') | None) => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out
}

/// Org has no escape for brackets in a description, so they become braces.
fn escape_org_description(s: &str) -> String {
    s.replace('[', "{").replace(']', "}")
}
