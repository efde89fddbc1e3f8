/// Tabular data exactly as a source produced it.
///
/// Headers may be blank or duplicated and rows may be ragged; nothing here is
/// trimmed or renamed. Cleaning that shape up is the normalization pipeline's
/// job, not the reader's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// True when the source produced no data rows. An empty source is a
    /// normal condition, distinct from an unreadable one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of header cells, which downstream stages treat as the table
    /// width regardless of individual row lengths.
    #[must_use]
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}
