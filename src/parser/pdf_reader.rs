use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ExtractError;
use crate::parser::PageSource;

#[derive(Debug, Clone)]
pub struct PdfReader {
    path: PathBuf,
}

impl PdfReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn page_count(&self) -> Result<usize> {
        get_page_count(&self.path)
    }

    /// Text of one page, `None` when the page has no extractable text.
    /// `page_number` is 1-based, like poppler's `-f`/`-l`.
    pub fn page_text(&self, page_number: usize) -> Result<Option<String>> {
        extract_page_text(&self.path, page_number)
    }
}

/// Page source backed by poppler-utils (`pdfinfo`, `pdftotext`).
#[derive(Debug, Default, Clone, Copy)]
pub struct PopplerSource;

impl PopplerSource {
    pub fn new() -> Self {
        Self
    }
}

impl PageSource for PopplerSource {
    fn page_count(&self, pdf_path: &Path) -> Result<usize> {
        get_page_count(pdf_path)
    }

    fn page_text(&self, pdf_path: &Path, page_number: usize) -> Result<Option<String>> {
        extract_page_text(pdf_path, page_number)
    }
}

fn get_page_count(pdf_path: &Path) -> Result<usize> {
    let output = Command::new("pdfinfo")
        .arg(pdf_path)
        .output()
        .map_err(|source| ExtractError::Tool {
            tool: "pdfinfo",
            source,
        })?;

    if !output.status.success() {
        return Err(ExtractError::ToolFailed {
            tool: "pdfinfo",
            path: pdf_path.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_page_count(&stdout).ok_or_else(|| {
        ExtractError::UnexpectedToolOutput {
            tool: "pdfinfo",
            path: pdf_path.to_path_buf(),
            detail: "no parsable 'Pages:' line".to_string(),
        }
        .into()
    })
}

fn parse_page_count(pdfinfo_stdout: &str) -> Option<usize> {
    pdfinfo_stdout
        .lines()
        .find_map(|line| line.strip_prefix("Pages:"))
        .and_then(|rest| rest.trim().parse().ok())
}

fn extract_page_text(pdf_path: &Path, page_number: usize) -> Result<Option<String>> {
    let page = page_number.to_string();
    let output = Command::new("pdftotext")
        .arg("-f")
        .arg(&page)
        .arg("-l")
        .arg(&page)
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path)
        .arg("-")
        .output()
        .map_err(|source| ExtractError::Tool {
            tool: "pdftotext",
            source,
        })?;

    if !output.status.success() {
        return Err(ExtractError::ToolFailed {
            tool: "pdftotext",
            path: pdf_path.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    let text = String::from_utf8_lossy(&output.stdout);
    // pdftotext terminates every page with a form feed
    let text = text.trim_end_matches('\x0c');
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pages_line() {
        let stdout = "Title:          기출문제\nProducer:       x\nPages:          12\nEncrypted:      no\n";
        assert_eq!(parse_page_count(stdout), Some(12));
    }

    #[test]
    fn missing_pages_line_is_none() {
        assert_eq!(parse_page_count("Title: nothing\n"), None);
        assert_eq!(parse_page_count("Pages: many\n"), None);
    }

    #[test]
    fn poppler_source_reports_unreadable_document() {
        let missing = Path::new("/nonexistent/quizseed-missing.pdf");
        let err = PopplerSource::new().page_count(missing).unwrap_err();
        assert!(err.downcast_ref::<ExtractError>().is_some());
        assert!(PdfReader::new(missing.to_path_buf()).page_count().is_err());
    }
}
