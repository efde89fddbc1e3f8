//! Merges duplicated physical columns into one logical column.
//!
//! Spreadsheet edits leave behind repeated columns for one logical field,
//! which header normalization surfaces as `Name`, `Name (2)`, `Name (3)`.
//! Coalescing folds each such family back into a single column.

use ecmo_model::{NormalizedTable, Result};
use tracing::debug;

/// Coalesces all duplicates of `base` into one column named `base`.
///
/// The family is the bare name plus any `"<base> (<integer>)"` column. With
/// fewer than two members the table is untouched. Otherwise each row keeps
/// the first value that is non-empty after trimming, scanning the family
/// left to right; the merged column sits where the leftmost member was.
/// Winning values are kept verbatim, untrimmed.
///
/// Running this twice with the same base is a no-op the second time.
pub fn coalesce_duplicates(table: &mut NormalizedTable, base: &str) -> Result<()> {
    let family = duplicate_family(table, base);
    if family.len() < 2 {
        return Ok(());
    }

    let mut merged = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let value = family
            .iter()
            .filter_map(|name| table.value(row, name))
            .find(|value| !value.trim().is_empty())
            .unwrap_or("")
            .to_string();
        merged.push(value);
    }

    let position = table.position(&family[0]).unwrap_or(0);
    for name in &family {
        table.remove_column(name);
    }
    table.insert_column(position, base, merged)?;
    debug!(base, members = family.len(), "coalesced duplicate columns");
    Ok(())
}

/// Coalesces every base name that carries at least one disambiguated
/// duplicate, in column order.
pub fn coalesce_all(table: &mut NormalizedTable) -> Result<()> {
    let mut bases: Vec<String> = Vec::new();
    for name in table.column_names() {
        if let Some(base) = suffix_base(name)
            && !bases.iter().any(|known| known == base)
        {
            bases.push(base.to_string());
        }
    }
    for base in &bases {
        coalesce_duplicates(table, base)?;
    }
    Ok(())
}

fn duplicate_family(table: &NormalizedTable, base: &str) -> Vec<String> {
    table
        .column_names()
        .filter(|name| *name == base || suffix_base(name) == Some(base))
        .map(str::to_string)
        .collect()
}

/// For `"<base> (<integer>)"` returns the base; anything else, including
/// non-numeric parentheses like "Age (Years)", returns `None`.
fn suffix_base(name: &str) -> Option<&str> {
    let open = name.rfind(" (")?;
    let digits = name[open + 2..].strip_suffix(')')?;
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(&name[..open])
}
