use crate::models::ProjectRecord;
use crate::utils::{format_currency, format_date, format_percentage};
use serde::Serialize;

/// A project row with every field rendered for a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub project_id: String,
    pub status: String,
    pub area: String,
    pub completion: String,
    pub actual_cost: String,
    pub planned_cost: String,
    pub start_date: String,
    pub deadline: String,
}

/// Render one record for display
///
/// Currency as `R$ 1.234,56`, completion as `66,7%` (or `-` when blank),
/// dates as `DD/MM/YYYY` (or `-`).
pub fn project_row(record: &ProjectRecord) -> DisplayRow {
    DisplayRow {
        project_id: record.project_id.clone(),
        status: record.status.clone(),
        area: record.area.clone(),
        completion: record
            .completion_pct
            .map(format_percentage)
            .unwrap_or_else(|| "-".to_string()),
        actual_cost: format_currency(record.actual_cost),
        planned_cost: format_currency(record.planned_cost),
        start_date: format_date(record.start_date),
        deadline: format_date(record.deadline),
    }
}

pub fn project_rows(records: &[ProjectRecord]) -> Vec<DisplayRow> {
    records.iter().map(project_row).collect()
}
