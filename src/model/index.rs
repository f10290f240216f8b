//! The index document: an append-only list of headings and links.

use serde::{Deserialize, Serialize};

/// A link from the index to one source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexLink {
    /// Link target (the local file path)
    pub url: String,

    /// Display text (usually the document title)
    pub text: String,
}

/// A single accumulated index entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum IndexEntry {
    /// Level-1 section heading.
    Heading(String),

    /// Link to a source document.
    Link(IndexLink),
}

/// A heading together with the links that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSection {
    /// Section heading, `None` for links added before any heading.
    pub heading: Option<String>,

    /// Links in insertion order.
    pub links: Vec<IndexLink>,
}

/// Generated index page.
///
/// Content is only ever appended; every output format is rendered from
/// the same entry list, so the formats cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDocument {
    title: String,
    entries: Vec<IndexEntry>,
}

impl IndexDocument {
    /// Create an empty index with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Index title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a level-1 heading.
    pub fn add_heading(&mut self, text: impl Into<String>) {
        self.entries.push(IndexEntry::Heading(text.into()));
    }

    /// Append a link to `url` displayed as `text`.
    pub fn add_link(&mut self, url: impl Into<String>, text: impl Into<String>) {
        self.entries.push(IndexEntry::Link(IndexLink {
            url: url.into(),
            text: text.into(),
        }));
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Number of links across all sections.
    pub fn link_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, IndexEntry::Link(_)))
            .count()
    }

    /// Check if nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Group entries into sections, one per heading.
    pub fn sections(&self) -> Vec<IndexSection> {
        let mut sections: Vec<IndexSection> = Vec::new();
        for entry in &self.entries {
            match entry {
                IndexEntry::Heading(text) => sections.push(IndexSection {
                    heading: Some(text.clone()),
                    links: Vec::new(),
                }),
                IndexEntry::Link(link) => match sections.last_mut() {
                    Some(section) => section.links.push(link.clone()),
                    None => sections.push(IndexSection {
                        heading: None,
                        links: vec![link.clone()],
                    }),
                },
            }
        }
        sections
    }
}
