//! Header cleanup for human-edited spreadsheets.

use std::collections::{BTreeMap, BTreeSet};

/// Produces a unique, non-empty name for every raw header label.
///
/// Labels are trimmed; a label that is blank after trimming becomes a
/// positional `Column_<n>` placeholder. Repeats of a name gain a `" (k)"`
/// suffix counting occurrences, with the first occurrence keeping the bare
/// name. When a raw label already looks like a generated suffix the counter
/// skips ahead until the name is free, so the output is unique for any input.
///
/// Output length always equals input length and order is preserved.
#[must_use]
pub fn normalize_headers(raw: &[String]) -> Vec<String> {
    let mut occurrences: BTreeMap<String, usize> = BTreeMap::new();
    let mut used: BTreeSet<String> = BTreeSet::new();
    let mut names = Vec::with_capacity(raw.len());

    for (index, label) in raw.iter().enumerate() {
        let trimmed = label.trim();
        let base = if trimmed.is_empty() {
            format!("Column_{}", index + 1)
        } else {
            trimmed.to_string()
        };

        let occurrence = occurrences.entry(base.clone()).or_insert(0);
        *occurrence += 1;
        let mut name = disambiguate(&base, *occurrence);
        while !used.insert(name.clone()) {
            *occurrence += 1;
            name = disambiguate(&base, *occurrence);
        }
        names.push(name);
    }
    names
}

fn disambiguate(base: &str, occurrence: usize) -> String {
    if occurrence == 1 {
        base.to_string()
    } else {
        format!("{base} ({occurrence})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|label| (*label).to_string()).collect()
    }

    #[test]
    fn trims_and_fills_blanks() {
        assert_eq!(
            normalize_headers(&labels(&["  Hospital ", "", "   "])),
            ["Hospital", "Column_2", "Column_3"]
        );
    }

    #[test]
    fn suffixes_count_occurrences() {
        assert_eq!(
            normalize_headers(&labels(&["Hospital", "Hospital", ""])),
            ["Hospital", "Hospital (2)", "Column_3"]
        );
        assert_eq!(
            normalize_headers(&labels(&["Misc", "Misc", "Misc"])),
            ["Misc", "Misc (2)", "Misc (3)"]
        );
    }

    #[test]
    fn skips_past_labels_that_preempt_a_suffix() {
        // The third label already spells the suffix the second one generated.
        assert_eq!(
            normalize_headers(&labels(&["A", "A", "A (2)"])),
            ["A", "A (2)", "A (2) (2)"]
        );
    }

    #[test]
    fn placeholder_collisions_are_disambiguated_too() {
        assert_eq!(
            normalize_headers(&labels(&["Column_2", ""])),
            ["Column_2", "Column_2 (2)"]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(normalize_headers(&[]), Vec::<String>::new());
    }
}
