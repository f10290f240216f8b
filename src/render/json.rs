//! JSON rendering for the index.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{IndexDocument, IndexSection};

#[derive(Serialize)]
struct JsonIndex<'a> {
    title: &'a str,
    sections: Vec<IndexSection>,
}

/// Render the index as pretty-printed JSON grouped by section.
pub fn to_json(index: &IndexDocument) -> Result<String> {
    let manifest = JsonIndex {
        title: index.title(),
        sections: index.sections(),
    };

    serde_json::to_string_pretty(&manifest)
        .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json() {
        let mut index = IndexDocument::new("DVCON");
        index.add_heading("_2019");
        index.add_link("_2019/a.pdf", "Paper A");

        let json = to_json(&index).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "DVCON");
        assert_eq!(value["sections"][0]["heading"], "_2019");
        assert_eq!(value["sections"][0]["links"][0]["url"], "_2019/a.pdf");
        assert_eq!(value["sections"][0]["links"][0]["text"], "Paper A");
    }
}
