use crate::data::error::{DataError, RowParseError};
use crate::models::ProjectRecord;
use crate::utils::{parse_date, parse_decimal, parse_percentage};
use csv::{ByteRecord, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns the loader requires in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ProjectId,
    Status,
    Area,
    Completion,
    ActualCost,
    PlannedCost,
    StartDate,
    Deadline,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::ProjectId,
        Column::Status,
        Column::Area,
        Column::Completion,
        Column::ActualCost,
        Column::PlannedCost,
        Column::StartDate,
        Column::Deadline,
    ];

    /// Header name used by the project export
    pub fn header(&self) -> &'static str {
        match self {
            Column::ProjectId => "project_id",
            Column::Status => "status",
            Column::Area => "area",
            Column::Completion => "conclusao",
            Column::ActualCost => "valor",
            Column::PlannedCost => "custo_previsto",
            Column::StartDate => "inicio",
            Column::Deadline => "prazo",
        }
    }

    /// English header accepted in place of the export name
    pub fn alias(&self) -> Option<&'static str> {
        match self {
            Column::Completion => Some("completion_pct"),
            Column::ActualCost => Some("actual_cost"),
            Column::PlannedCost => Some("planned_cost"),
            Column::StartDate => Some("start_date"),
            Column::Deadline => Some("deadline"),
            _ => None,
        }
    }

    fn matches(&self, name: &str) -> bool {
        let name = name.trim_start_matches('\u{feff}').trim();
        name == self.header() || Some(name) == self.alias()
    }
}

/// Position of each required column within a row
struct ColumnIndex([usize; 8]);

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, DataError> {
        let mut positions = [0usize; 8];
        let mut missing = Vec::new();

        for column in Column::ALL {
            match headers.iter().position(|h| column.matches(h)) {
                Some(pos) => positions[column as usize] = pos,
                None => missing.push(column.header()),
            }
        }

        if missing.is_empty() {
            Ok(Self(positions))
        } else {
            Err(DataError::MissingColumns { missing })
        }
    }

    /// Cell for a column; short rows read as blank
    fn get<'r>(&self, raw: &'r ByteRecord, column: Column, row: usize) -> Result<&'r str, RowParseError> {
        let bytes = raw.get(self.0[column as usize]).unwrap_or(b"");
        std::str::from_utf8(bytes).map_err(|e| RowParseError {
            row,
            column: column.header(),
            value: String::from_utf8_lossy(bytes).into_owned(),
            reason: format!("invalid UTF-8 after byte {}", e.valid_up_to()),
        })
    }
}

/// Outcome of a load: the records kept plus what was left out
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<ProjectRecord>,
    /// Rows with a malformed numeric or date cell, skipped
    pub skipped: Vec<RowParseError>,
    /// Rows without a project id, dropped
    pub dropped_blank_ids: usize,
}

impl LoadReport {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Data rows seen, including skipped and dropped ones
    pub fn rows_read(&self) -> usize {
        self.records.len() + self.skipped.len() + self.dropped_blank_ids
    }
}

/// Load project records from a CSV file
///
/// Missing columns or an unreadable file abort the load. A row with a
/// malformed number or date, or a cell that is not valid UTF-8, is skipped
/// and recorded in [`LoadReport::skipped`]; the remaining rows still load.
///
/// # Example
///
/// ```no_run
/// use pmdash::data::load_records;
///
/// let report = load_records("data/joined_projects_data.csv").unwrap();
/// println!("{} projects, {} rows skipped", report.records.len(), report.skipped.len());
/// ```
pub fn load_records(path: impl AsRef<Path>) -> Result<LoadReport, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let report = load_from_reader(file)?;
    log::info!(
        "Loaded {} record(s) from {} ({} skipped, {} without id)",
        report.records.len(),
        path.display(),
        report.skipped.len(),
        report.dropped_blank_ids
    );
    Ok(report)
}

/// Load project records from any CSV source
pub fn load_from_reader<R: Read>(reader: R) -> Result<LoadReport, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let index = ColumnIndex::resolve(&headers)?;

    // Cells are decoded per column, so bad encoding only costs its own row
    let mut report = LoadReport::default();
    for (i, result) in csv_reader.byte_records().enumerate() {
        let row = i + 1;
        let raw = result?;

        match parse_row(&raw, &index, row) {
            Ok(Some(record)) => report.records.push(record),
            Ok(None) => {
                log::debug!("Dropping row {}: blank project_id", row);
                report.dropped_blank_ids += 1;
            }
            Err(e) => {
                log::warn!("Skipping {}", e);
                report.skipped.push(e);
            }
        }
    }

    if report.is_empty() {
        log::warn!("No project records loaded; metrics will show empty values");
    }

    Ok(report)
}

fn parse_row(raw: &ByteRecord, index: &ColumnIndex, row: usize) -> Result<Option<ProjectRecord>, RowParseError> {
    let project_id = index.get(raw, Column::ProjectId, row)?.trim();
    if project_id.is_empty() {
        return Ok(None);
    }

    Ok(Some(ProjectRecord {
        project_id: project_id.to_string(),
        status: index.get(raw, Column::Status, row)?.to_string(),
        area: index.get(raw, Column::Area, row)?.to_string(),
        completion_pct: optional_cell(raw, index, Column::Completion, row, parse_percentage)?,
        actual_cost: optional_cell(raw, index, Column::ActualCost, row, parse_decimal)?.unwrap_or(0.0),
        planned_cost: optional_cell(raw, index, Column::PlannedCost, row, parse_decimal)?.unwrap_or(0.0),
        start_date: optional_cell(raw, index, Column::StartDate, row, parse_date)?,
        deadline: optional_cell(raw, index, Column::Deadline, row, parse_date)?,
    }))
}

/// Parse a cell that may be blank; blank yields `None`
fn optional_cell<T>(
    raw: &ByteRecord,
    index: &ColumnIndex,
    column: Column,
    row: usize,
    parse: fn(&str) -> Result<T, String>,
) -> Result<Option<T>, RowParseError> {
    let value = index.get(raw, column, row)?;
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse(value).map(Some).map_err(|reason| RowParseError {
        row,
        column: column.header(),
        value: value.to_string(),
        reason,
    })
}
