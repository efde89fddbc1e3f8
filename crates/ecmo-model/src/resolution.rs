use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

static UNRESOLVED: Resolution = Resolution::Unresolved;

/// Outcome of looking up one canonical field in a source table.
///
/// An unresolved field is ordinary operating state, not an error: downstream
/// stages degrade per field instead of halting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "column")]
pub enum Resolution {
    /// The field maps to this column name in the normalized table.
    Resolved(String),
    /// No column matched; dependent features are skipped.
    Unresolved,
}

impl Resolution {
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(name) => Some(name),
            Resolution::Unresolved => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }
}

/// Mapping from every canonical field to its resolution against one table.
///
/// Serializes as a plain field-to-resolution object so report payloads stay
/// flat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap {
    entries: BTreeMap<CanonicalField, Resolution>,
}

impl FieldMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: CanonicalField, resolution: Resolution) {
        self.entries.insert(field, resolution);
    }

    /// Resolution for a field. Fields never inserted read as unresolved.
    #[must_use]
    pub fn resolution(&self, field: CanonicalField) -> &Resolution {
        self.entries.get(&field).unwrap_or(&UNRESOLVED)
    }

    #[must_use]
    pub fn column(&self, field: CanonicalField) -> Option<&str> {
        self.resolution(field).column()
    }

    #[must_use]
    pub fn is_resolved(&self, field: CanonicalField) -> bool {
        self.resolution(field).is_resolved()
    }

    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.entries
            .values()
            .filter(|resolution| resolution.is_resolved())
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &Resolution)> {
        self.entries.iter().map(|(field, resolution)| (*field, resolution))
    }
}
