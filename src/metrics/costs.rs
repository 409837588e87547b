use crate::models::ProjectRecord;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Cost totals for one area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaCost {
    pub planned: f64,
    pub actual: f64,
    /// actual - planned
    pub variance: f64,
    pub records: usize,
    /// Distinct project ids in the area
    pub projects: usize,
    /// Mean completion of records that report one; 0 when none do
    pub mean_completion: f64,
}

#[derive(Default)]
struct AreaAccumulator<'a> {
    planned: f64,
    actual: f64,
    records: usize,
    project_ids: HashSet<&'a str>,
    completion_sum: f64,
    completion_count: usize,
}

/// Group records by area and total their costs
///
/// Areas are compared by exact string match. Every record contributes its
/// planned and actual cost to its area.
pub fn cost_by_area(records: &[ProjectRecord]) -> BTreeMap<String, AreaCost> {
    let mut groups: BTreeMap<&str, AreaAccumulator> = BTreeMap::new();

    for record in records {
        let acc = groups.entry(record.area.as_str()).or_default();
        acc.planned += record.planned_cost;
        acc.actual += record.actual_cost;
        acc.records += 1;
        acc.project_ids.insert(record.project_id.as_str());
        if let Some(pct) = record.completion_pct {
            acc.completion_sum += pct;
            acc.completion_count += 1;
        }
    }

    groups
        .into_iter()
        .map(|(area, acc)| {
            let mean_completion = if acc.completion_count > 0 {
                acc.completion_sum / acc.completion_count as f64
            } else {
                0.0
            };
            let cost = AreaCost {
                planned: acc.planned,
                actual: acc.actual,
                variance: acc.actual - acc.planned,
                records: acc.records,
                projects: acc.project_ids.len(),
                mean_completion,
            };
            (area.to_string(), cost)
        })
        .collect()
}

/// Planned versus actual cost for one project
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCost {
    pub project_id: String,
    pub area: String,
    /// Planned cost from the project's first row
    pub planned: f64,
    /// Sum of actual cost over all of the project's rows
    pub actual: f64,
    /// (actual - planned) / planned * 100; `None` when nothing was planned
    pub variance_percent: Option<f64>,
}

/// Compare planned and actual cost per project
///
/// The export repeats a project on every cost entry, so the planned cost and
/// area come from the first row for each id while actual costs accumulate.
/// Projects are listed in order of first appearance.
pub fn project_costs(records: &[ProjectRecord]) -> Vec<ProjectCost> {
    let mut order: HashMap<&str, usize> = HashMap::new();
    let mut projects: Vec<ProjectCost> = Vec::new();

    for record in records {
        match order.get(record.project_id.as_str()).copied() {
            Some(idx) => projects[idx].actual += record.actual_cost,
            None => {
                order.insert(record.project_id.as_str(), projects.len());
                projects.push(ProjectCost {
                    project_id: record.project_id.clone(),
                    area: record.area.clone(),
                    planned: record.planned_cost,
                    actual: record.actual_cost,
                    variance_percent: None,
                });
            }
        }
    }

    for project in &mut projects {
        project.variance_percent = variance_percent(project.planned, project.actual);
    }
    projects
}

/// Relative cost overrun in percent, undefined when nothing was planned
pub fn variance_percent(planned: f64, actual: f64) -> Option<f64> {
    if planned > 0.0 {
        Some((actual - planned) / planned * 100.0)
    } else {
        None
    }
}
