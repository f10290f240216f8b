//! Model types shared by inspection, accumulation and rendering.

mod index;
mod metadata;

pub use index::{IndexDocument, IndexEntry, IndexLink, IndexSection};
pub use metadata::DocumentMetadata;
