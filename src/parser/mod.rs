pub mod hangul;
pub mod pdf_reader;

pub use pdf_reader::{PdfReader, PopplerSource};

use anyhow::Result;
use std::path::Path;

/// Supplies per-page text for one document.
pub trait PageSource {
    fn page_count(&self, pdf_path: &Path) -> Result<usize>;

    /// Text of a 1-based page; `None` means nothing extractable.
    fn page_text(&self, pdf_path: &Path, page_number: usize) -> Result<Option<String>>;
}
