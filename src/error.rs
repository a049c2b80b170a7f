use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("input directory does not exist: {}", .0.display())]
    InputDirMissing(PathBuf),

    #[error("input path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to invoke {tool}; is poppler-utils installed?")]
    Tool {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} failed on {}: {stderr}", .path.display())]
    ToolFailed {
        tool: &'static str,
        path: PathBuf,
        stderr: String,
    },

    #[error("unexpected {tool} output for {}: {detail}", .path.display())]
    UnexpectedToolOutput {
        tool: &'static str,
        path: PathBuf,
        detail: String,
    },
}
