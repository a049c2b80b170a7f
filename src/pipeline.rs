use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::core::model::{Provenance, QuestionRecord};
use crate::core::stats::RunStats;
use crate::error::ExtractError;
use crate::export::{Exporter, JsonExporter, DEFAULT_SEED_FILE};
use crate::extract::cheatkey::MAX_CHEATKEY_CHARS;
use crate::extract::QuestionExtractor;
use crate::parser::hangul::normalize_page_text;
use crate::parser::PageSource;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub output_name: String,
    pub max_cheatkey_chars: usize,
    pub quiet: bool,
}

impl PipelineConfig {
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            output_name: DEFAULT_SEED_FILE.to_string(),
            max_cheatkey_chars: MAX_CHEATKEY_CHARS,
            quiet: false,
        }
    }

    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = output_name.into();
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.input_dir.join(&self.output_name)
    }
}

#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub total: usize,
    pub stats: RunStats,
}

/// One extraction run over a directory of PDFs.
///
/// Owns everything the run accumulates; nothing is written until
/// [`Pipeline::run`] has visited every document.
pub struct Pipeline<S: PageSource> {
    config: PipelineConfig,
    source: S,
    extractor: QuestionExtractor,
    records: Vec<QuestionRecord>,
    stats: RunStats,
}

impl<S: PageSource> Pipeline<S> {
    pub fn new(config: PipelineConfig, source: S) -> Self {
        let extractor = QuestionExtractor::new().with_max_cheatkey_chars(config.max_cheatkey_chars);
        Self {
            config,
            source,
            extractor,
            records: Vec::new(),
            stats: RunStats::default(),
        }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn run(mut self) -> Result<RunSummary> {
        let documents = discover_documents(&self.config.input_dir)?;
        info!(
            dir = %self.config.input_dir.display(),
            count = documents.len(),
            "discovered PDF files"
        );
        self.say(format!("[*] Found {} PDF file(s)", documents.len()));

        for (i, document) in documents.iter().enumerate() {
            let name = file_name(document);
            self.say(format!("[{}/{}] Processing: {}", i + 1, documents.len(), name));

            match self.process_document(document) {
                Ok(count) => {
                    self.stats.documents_ok += 1;
                    info!(document = %name, questions = count, "document processed");
                    self.say(format!("  [✓] {count} question(s)"));
                }
                Err(e) => {
                    self.stats.documents_failed += 1;
                    let message = format!("{e:#}");
                    error!(document = %name, error = %message, "document skipped");
                    eprintln!("  [✗] Failed: {name} - {message}");
                }
            }
        }

        let exporter = JsonExporter::new(self.config.input_dir.clone())
            .with_file_name(self.config.output_name.clone());
        let output_path = exporter.export(&self.records)?;
        info!(path = %output_path.display(), total = self.records.len(), "seed file written");

        Ok(RunSummary {
            output_path,
            total: self.records.len(),
            stats: self.stats,
        })
    }

    /// Extract one document into the run's collection. Pages handled before a
    /// failure stay collected.
    pub fn process_document(&mut self, path: &Path) -> Result<usize> {
        let before = self.records.len();
        let records = &mut self.records;
        let stats = &mut self.stats;

        extract_pages(&self.source, &self.extractor, path, |_, page_records| {
            for record in &page_records {
                stats.record(record);
            }
            records.extend(page_records);
        })?;

        Ok(self.records.len() - before)
    }

    fn say(&self, line: String) {
        if !self.config.quiet {
            println!("{line}");
        }
    }
}

/// Walk a document page by page, handing each page's records to `on_page`
/// together with its 1-based page number. Pages without text are skipped.
pub fn extract_pages<S, F>(
    source: &S,
    extractor: &QuestionExtractor,
    path: &Path,
    mut on_page: F,
) -> Result<()>
where
    S: PageSource + ?Sized,
    F: FnMut(usize, Vec<QuestionRecord>),
{
    let source_file = file_name(path);
    let page_count = source
        .page_count(path)
        .with_context(|| format!("failed to read page count of {source_file}"))?;

    for page_number in 1..=page_count {
        let text = source
            .page_text(path, page_number)
            .with_context(|| format!("failed to extract page {page_number} of {source_file}"))?;

        let Some(text) = text else {
            debug!(document = %source_file, page = page_number, "no text on page");
            continue;
        };
        let text = normalize_page_text(&text);
        if text.trim().is_empty() {
            debug!(document = %source_file, page = page_number, "no text on page");
            continue;
        }

        let provenance = Provenance {
            source_file: &source_file,
            page_number,
        };
        let page_records = extractor.parse_page(&text, provenance);
        debug!(
            document = %source_file,
            page = page_number,
            questions = page_records.len(),
            "page parsed"
        );
        on_page(page_number, page_records);
    }

    Ok(())
}

/// PDF files directly inside `dir`, sorted by file name. Extension match is
/// case-insensitive.
pub fn discover_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(ExtractError::InputDirMissing(dir.to_path_buf()).into());
    }
    if !dir.is_dir() {
        return Err(ExtractError::NotADirectory(dir.to_path_buf()).into());
    }

    let mut documents = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf && path.is_file() {
            documents.push(path);
        }
    }
    documents.sort();

    Ok(documents)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
