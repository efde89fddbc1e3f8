//! Canonical registry fields that source columns are resolved against.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic fields the pipeline knows how to locate in a source table.
///
/// The set is fixed at compile time; sources may carry any number of extra
/// columns, which pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CanonicalField {
    Hospital,
    City,
    State,
    EcmoType,
    Diagnosis,
    Age,
    Timestamp,
    Status,
    Comments,
    Latitude,
    Longitude,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 11] = [
        CanonicalField::Hospital,
        CanonicalField::City,
        CanonicalField::State,
        CanonicalField::EcmoType,
        CanonicalField::Diagnosis,
        CanonicalField::Age,
        CanonicalField::Timestamp,
        CanonicalField::Status,
        CanonicalField::Comments,
        CanonicalField::Latitude,
        CanonicalField::Longitude,
    ];

    /// Human-readable label used in rendered views and log lines.
    pub fn label(self) -> &'static str {
        match self {
            CanonicalField::Hospital => "Hospital",
            CanonicalField::City => "City",
            CanonicalField::State => "State",
            CanonicalField::EcmoType => "ECMO Type",
            CanonicalField::Diagnosis => "Diagnosis",
            CanonicalField::Age => "Age",
            CanonicalField::Timestamp => "Initiation Date",
            CanonicalField::Status => "Status",
            CanonicalField::Comments => "Comments",
            CanonicalField::Latitude => "Latitude",
            CanonicalField::Longitude => "Longitude",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
