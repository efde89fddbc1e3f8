use ecmo_model::{CanonicalField, FieldMap, NormalizedTable};
use ecmo_transform::DAYS_ON_ECMO_COLUMN;
use serde::Serialize;

/// Status value that marks a case as currently on support.
pub const ACTIVE_STATUS: &str = "Active";

const VV_TYPE: &str = "VV";
const VA_TYPE: &str = "VA";

/// Headline numbers for a (possibly filtered) view.
///
/// `active_cases` is `None` when the status field is unresolved, which the
/// renderer shows as a placeholder instead of a misleading zero. The same
/// goes for the median when no row has a computable day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiSummary {
    pub total_cases: usize,
    pub active_cases: Option<usize>,
    pub median_days_on_ecmo: Option<i64>,
    pub vv_cases: usize,
    pub va_cases: usize,
}

/// Computes the KPI row over the view.
#[must_use]
pub fn kpi_summary(table: &NormalizedTable, fields: &FieldMap) -> KpiSummary {
    let active_cases = fields
        .column(CanonicalField::Status)
        .and_then(|column| table.column(column))
        .map(|values| count_matching(values, ACTIVE_STATUS));

    let (vv_cases, va_cases) = fields
        .column(CanonicalField::EcmoType)
        .and_then(|column| table.column(column))
        .map_or((0, 0), |values| {
            (
                count_matching(values, VV_TYPE),
                count_matching(values, VA_TYPE),
            )
        });

    KpiSummary {
        total_cases: table.row_count(),
        active_cases,
        median_days_on_ecmo: median_days(table),
        vv_cases,
        va_cases,
    }
}

fn count_matching(values: &[String], expected: &str) -> usize {
    values
        .iter()
        .filter(|value| value.trim() == expected)
        .count()
}

fn median_days(table: &NormalizedTable) -> Option<i64> {
    let values = table.column(DAYS_ON_ECMO_COLUMN)?;
    let mut days: Vec<i64> = values
        .iter()
        .filter_map(|value| value.trim().parse().ok())
        .collect();
    if days.is_empty() {
        return None;
    }
    days.sort_unstable();
    let middle = days.len() / 2;
    if days.len() % 2 == 1 {
        Some(days[middle])
    } else {
        Some((days[middle - 1] + days[middle]) / 2)
    }
}
