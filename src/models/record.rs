use chrono::NaiveDate;
use serde::Serialize;

/// One row of the project export
///
/// `status` and `area` are kept as free text. `completion_pct` is in
/// percentage units and is not clamped; `None` means the cell was blank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub project_id: String,
    pub status: String,
    pub area: String,
    pub completion_pct: Option<f64>,
    pub actual_cost: f64,
    pub planned_cost: f64,
    pub start_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
}

impl ProjectRecord {
    /// Create a record with zero costs and no completion or dates
    pub fn new(project_id: impl Into<String>, status: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            status: status.into(),
            area: area.into(),
            completion_pct: None,
            actual_cost: 0.0,
            planned_cost: 0.0,
            start_date: None,
            deadline: None,
        }
    }

    pub fn with_completion(mut self, pct: f64) -> Self {
        self.completion_pct = Some(pct);
        self
    }

    pub fn with_costs(mut self, planned: f64, actual: f64) -> Self {
        self.planned_cost = planned;
        self.actual_cost = actual;
        self
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, deadline: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.deadline = deadline;
        self
    }
}
