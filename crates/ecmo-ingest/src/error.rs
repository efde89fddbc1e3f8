use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a data source. This is the pipeline's only halting error:
/// everything downstream of a fetched table degrades per field or per row
/// instead of failing.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source file does not exist.
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The source exists but could not be read as CSV.
    #[error("failed to read source {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    /// Path of the source the failure concerns.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            IngestError::SourceNotFound { path } | IngestError::SourceRead { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
