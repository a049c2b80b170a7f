pub mod json_export;
pub mod report;

use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::QuestionRecord;

pub use json_export::{load_seed_file, JsonExporter, DEFAULT_SEED_FILE};
pub use report::format_report;

pub trait Exporter {
    /// Writes the records and returns the path of the produced file.
    fn export(&self, records: &[QuestionRecord]) -> Result<PathBuf>;
}
