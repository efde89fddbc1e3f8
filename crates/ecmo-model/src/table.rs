use crate::error::{Result, TableError};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    name: String,
    values: Vec<String>,
}

/// Rectangular, fully materialized string table.
///
/// Column names are unique and ordered; every column holds exactly one value
/// per row. Cells are plain strings and an absent source cell is represented
/// by the empty string, never by a null marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTable {
    columns: Vec<Column>,
}

impl NormalizedTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, values)` pairs, preserving their order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |column| column.values.len())
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True when the table holds no rows. A table with columns but zero rows
    /// is still empty in this sense.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Zero-based position of a column, by exact name.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|column| column.name == name)
            .map(|column| column.values.as_slice())
    }

    /// Cell value at `row` in the named column, if both exist.
    #[must_use]
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        self.column(name)?.get(row).map(String::as_str)
    }

    /// Appends a column at the rightmost position.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<String>) -> Result<()> {
        let index = self.columns.len();
        self.insert_column(index, name, values)
    }

    /// Inserts a column at `index`, shifting later columns right. An index
    /// past the end appends.
    pub fn insert_column(
        &mut self,
        index: usize,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<()> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && values.len() != self.row_count() {
            return Err(TableError::LengthMismatch {
                column: name,
                expected: self.row_count(),
                actual: values.len(),
            });
        }
        let index = index.min(self.columns.len());
        self.columns.insert(index, Column { name, values });
        Ok(())
    }

    /// Removes a column by name, returning its values.
    pub fn remove_column(&mut self, name: &str) -> Option<Vec<String>> {
        let index = self.position(name)?;
        Some(self.columns.remove(index).values)
    }

    /// Iterates columns left to right as `(name, values)` pairs.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns
            .iter()
            .map(|column| (column.name.as_str(), column.values.as_slice()))
    }

    /// One row as cell references, left to right.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.row_count() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|column| column.values[index].as_str())
                .collect(),
        )
    }

    /// New table keeping only rows whose mask entry is true. Rows beyond the
    /// mask are dropped.
    #[must_use]
    pub fn filter_rows(&self, keep: &[bool]) -> NormalizedTable {
        let columns = self
            .columns
            .iter()
            .map(|column| Column {
                name: column.name.clone(),
                values: column
                    .values
                    .iter()
                    .zip(keep)
                    .filter(|(_, kept)| **kept)
                    .map(|(value, _)| value.clone())
                    .collect(),
            })
            .collect();
        NormalizedTable { columns }
    }

    /// New table keeping only the named columns, in the order given. Names
    /// not present are skipped; repeats keep the first mention.
    #[must_use]
    pub fn select_columns(&self, names: &[String]) -> NormalizedTable {
        let mut columns: Vec<Column> = Vec::new();
        for name in names {
            if columns.iter().any(|column| column.name == *name) {
                continue;
            }
            if let Some(index) = self.position(name) {
                columns.push(self.columns[index].clone());
            }
        }
        NormalizedTable { columns }
    }

    /// New table with rows rearranged to follow `order`. Indices out of range
    /// are skipped; indices may repeat.
    #[must_use]
    pub fn select_rows(&self, order: &[usize]) -> NormalizedTable {
        let columns = self
            .columns
            .iter()
            .map(|column| Column {
                name: column.name.clone(),
                values: order
                    .iter()
                    .filter_map(|&row| column.values.get(row).cloned())
                    .collect(),
            })
            .collect();
        NormalizedTable { columns }
    }
}
