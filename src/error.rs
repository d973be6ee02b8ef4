use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("file could not be found: {}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The line source failed after `line` lines had been read.
    #[error("log stream failed after {line} lines")]
    Stream {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("invalid extraction pattern")]
    Pattern(#[from] regex::Error),
}

impl AnalysisError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AnalysisError::NotFound { .. })
    }
}
