use crate::metrics::costs::{cost_by_area, project_costs, AreaCost, ProjectCost};
use crate::metrics::distribution::{resolve_colors, status_distribution, status_palette, StatusColor, StatusShare};
use crate::metrics::kpi::Kpis;
use crate::metrics::projection::{project_rows, DisplayRow};
use crate::models::{ProjectRecord, StatusColorMap};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything the renderer needs from one pass over the records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub kpis: Kpis,
    pub status_distribution: BTreeMap<String, StatusShare>,
    pub status_colors: BTreeMap<String, String>,
    pub areas: BTreeMap<String, AreaCost>,
    pub project_costs: Vec<ProjectCost>,
    pub record_colors: Vec<StatusColor>,
    pub rows: Vec<DisplayRow>,
}

impl Dashboard {
    /// Compute every metric from the same records
    ///
    /// Holds no state between calls; building twice from the same input
    /// gives equal dashboards.
    pub fn build(records: &[ProjectRecord], colors: &StatusColorMap) -> Self {
        Self {
            kpis: Kpis::compute(records),
            status_distribution: status_distribution(records),
            status_colors: status_palette(records, colors),
            areas: cost_by_area(records),
            project_costs: project_costs(records),
            record_colors: resolve_colors(records, colors),
            rows: project_rows(records),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kpis.total_records == 0
    }
}
