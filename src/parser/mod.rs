//! PDF parsing module.

mod backend;
mod lopdf_backend;
mod text;

pub use backend::PdfBackend;
pub use lopdf_backend::LopdfBackend;
