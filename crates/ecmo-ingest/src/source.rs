//! Data sources the pipeline can pull case tables from.
//!
//! A source hands back a [`RawTable`] snapshot on every fetch. Fetching is
//! the only fallible step of a pipeline run; a source that cannot be read
//! yields an [`IngestError`] and the caller decides whether to halt or fall
//! back to an earlier snapshot.

use std::path::{Path, PathBuf};

use ecmo_model::RawTable;
use tracing::debug;

use crate::error::{IngestError, Result};

pub trait DataSource {
    /// Stable name for log lines and payload provenance.
    fn describe(&self) -> String;

    /// Pulls the current table from the source.
    fn fetch(&self) -> Result<RawTable>;
}

/// Reads a CSV file from disk on every fetch.
///
/// The first non-blank record becomes the header row; rows that are entirely
/// blank are dropped. Ragged records are kept as-is and squared up later in
/// the pipeline. Cells are not trimmed here so that downstream stages see the
/// source text unchanged.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    /// Uses a different field delimiter, e.g. `b';'` for exports from
    /// locales that reserve the comma.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, source: csv::Error) -> IngestError {
        if let csv::ErrorKind::Io(io) = source.kind()
            && io.kind() == std::io::ErrorKind::NotFound
        {
            return IngestError::SourceNotFound {
                path: self.path.clone(),
            };
        }
        IngestError::SourceRead {
            path: self.path.clone(),
            source,
        }
    }
}

impl DataSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<RawTable> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(&self.path)
            .map_err(|source| self.read_error(source))?;

        let mut records: Vec<Vec<String>> = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| self.read_error(source))?;
            let row: Vec<String> = record.iter().map(str::to_string).collect();
            if row.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            records.push(row);
        }

        let table = match records.split_first() {
            None => RawTable::default(),
            Some((headers, rows)) => {
                let mut headers = headers.clone();
                // A file-level UTF-8 BOM lands in the first header cell.
                if let Some(first) = headers.first_mut()
                    && let Some(stripped) = first.strip_prefix('\u{feff}')
                {
                    *first = stripped.to_string();
                }
                RawTable::new(headers, rows.to_vec())
            }
        };

        debug!(
            path = %self.path.display(),
            rows = table.row_count(),
            columns = table.width(),
            "fetched csv source"
        );
        Ok(table)
    }
}

/// Serves a fixed table from memory. Used by tests and by callers that
/// already hold a snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    table: RawTable,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, table: RawTable) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }

    pub fn from_rows(name: impl Into<String>, headers: &[&str], rows: &[&[&str]]) -> Self {
        let headers = headers.iter().map(|cell| (*cell).to_string()).collect();
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect();
        Self::new(name, RawTable::new(headers, rows))
    }
}

impl DataSource for MemorySource {
    fn describe(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<RawTable> {
        Ok(self.table.clone())
    }
}
