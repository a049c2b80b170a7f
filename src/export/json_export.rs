use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::model::QuestionRecord;
use crate::export::Exporter;

pub const DEFAULT_SEED_FILE: &str = "questions_seed.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_dir: PathBuf,
    file_name: String,
}

impl JsonExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self {
            out_dir,
            file_name: DEFAULT_SEED_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir.join(&self.file_name)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, records: &[QuestionRecord]) -> Result<PathBuf> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.output_path();
        let data = serde_json::to_string_pretty(records)?;
        fs::write(&path, data).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }
}

pub fn load_seed_file(path: &Path) -> Result<Vec<QuestionRecord>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let records = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse seed file {}", path.display()))?;
    Ok(records)
}
