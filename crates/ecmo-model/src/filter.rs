use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// Sentinel choice meaning "no constraint" for a field.
pub const NO_CONSTRAINT: &str = "All";

/// One per-field filter choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Accept every row regardless of the field's value.
    Any,
    /// Accept rows whose cell equals this value exactly, case sensitively.
    Equals(String),
}

impl Selection {
    /// Interprets a raw user choice. The sentinel and blank input both mean
    /// no constraint; anything else is matched verbatim.
    #[must_use]
    pub fn from_choice(raw: &str) -> Selection {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == NO_CONSTRAINT {
            Selection::Any
        } else {
            Selection::Equals(raw.to_string())
        }
    }

    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }
}

/// Conjunction of per-field selections applied to a normalized table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    constraints: Vec<(CanonicalField, Selection)>,
}

impl FilterSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: CanonicalField, selection: Selection) -> Self {
        self.set(field, selection);
        self
    }

    /// Sets the selection for a field, replacing any earlier one.
    pub fn set(&mut self, field: CanonicalField, selection: Selection) {
        if let Some(entry) = self
            .constraints
            .iter_mut()
            .find(|(existing, _)| *existing == field)
        {
            entry.1 = selection;
        } else {
            self.constraints.push((field, selection));
        }
    }

    #[must_use]
    pub fn get(&self, field: CanonicalField) -> &Selection {
        self.constraints
            .iter()
            .find(|(existing, _)| *existing == field)
            .map_or(&Selection::Any, |(_, selection)| selection)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn constraints(&self) -> &[(CanonicalField, Selection)] {
        &self.constraints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_blank_mean_any() {
        assert!(Selection::from_choice("All").is_any());
        assert!(Selection::from_choice("  All  ").is_any());
        assert!(Selection::from_choice("").is_any());
        assert!(Selection::from_choice("   ").is_any());
    }

    #[test]
    fn other_choices_match_verbatim() {
        assert_eq!(
            Selection::from_choice("MH"),
            Selection::Equals("MH".to_string())
        );
        // Case is preserved, not folded.
        assert_eq!(
            Selection::from_choice("active"),
            Selection::Equals("active".to_string())
        );
    }

    #[test]
    fn set_replaces_existing_constraint() {
        let mut spec = FilterSpec::new()
            .with(CanonicalField::State, Selection::Equals("MH".to_string()));
        spec.set(CanonicalField::State, Selection::Equals("KA".to_string()));
        assert_eq!(spec.constraints().len(), 1);
        assert_eq!(
            spec.get(CanonicalField::State),
            &Selection::Equals("KA".to_string())
        );
        assert_eq!(spec.get(CanonicalField::Status), &Selection::Any);
    }
}
