//! Deterministic two-pass resolution of canonical fields to header names.

use ecmo_model::{CanonicalField, FieldMap, Resolution};
use tracing::debug;

use crate::patterns::candidates;

/// Resolves one canonical field against a table's normalized headers.
///
/// Pass 1 tries each candidate for an exact case-insensitive match; pass 2
/// runs only if pass 1 found nothing and accepts any header containing a
/// candidate as a case-insensitive substring. Candidates are tried in
/// priority order and within a candidate the leftmost header wins, so the
/// outcome never depends on where an exactly-matching header sits.
///
/// A miss is an ordinary [`Resolution::Unresolved`], not an error.
#[must_use]
pub fn resolve(headers: &[String], field: CanonicalField) -> Resolution {
    match find_match(headers, candidates(field)) {
        Some(name) => Resolution::Resolved(name.to_string()),
        None => Resolution::Unresolved,
    }
}

fn find_match<'a>(headers: &'a [String], candidates: &[&str]) -> Option<&'a str> {
    for candidate in candidates {
        if let Some(header) = headers
            .iter()
            .find(|header| header.eq_ignore_ascii_case(candidate))
        {
            return Some(header);
        }
    }
    for candidate in candidates {
        let needle = candidate.to_ascii_lowercase();
        if let Some(header) = headers
            .iter()
            .find(|header| header.to_ascii_lowercase().contains(&needle))
        {
            return Some(header);
        }
    }
    None
}

/// Resolves every canonical field against the headers in one sweep.
#[must_use]
pub fn build_field_map(headers: &[String]) -> FieldMap {
    let mut map = FieldMap::new();
    for field in CanonicalField::ALL {
        let resolution = resolve(headers, field);
        match resolution.column() {
            Some(column) => debug!(field = %field, column, "field resolved"),
            None => debug!(field = %field, "field unresolved"),
        }
        map.insert(field, resolution);
    }
    map
}
