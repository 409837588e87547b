use crate::metrics::costs::{project_costs, variance_percent};
use crate::metrics::distribution::{ranked_distribution, status_distribution};
use crate::models::ProjectRecord;
use serde::Serialize;
use std::collections::HashSet;

/// Mean completion percentage across records
///
/// Records with a blank completion cell are left out of the mean. Returns
/// `0.0` when no record reports a completion, including for empty input.
pub fn completion_rate(records: &[ProjectRecord]) -> f64 {
    let (sum, count) = records
        .iter()
        .filter_map(|r| r.completion_pct)
        .fold((0.0, 0usize), |(sum, count), pct| (sum + pct, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Most frequent status label and its record count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadingStatus {
    pub status: String,
    pub count: usize,
}

/// Headline numbers for the top of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    pub total_records: usize,
    /// Distinct project ids
    pub total_projects: usize,
    pub leading_status: Option<LeadingStatus>,
    pub completion_rate: f64,
    /// Planned cost counted once per project
    pub planned_total: f64,
    pub actual_total: f64,
    /// Overall (actual - planned) / planned * 100; 0 when nothing was planned
    pub cost_variance_pct: f64,
}

impl Kpis {
    pub fn compute(records: &[ProjectRecord]) -> Self {
        let total_projects = records
            .iter()
            .map(|r| r.project_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        let distribution = status_distribution(records);
        let leading_status = ranked_distribution(&distribution)
            .first()
            .map(|(status, share)| LeadingStatus {
                status: status.to_string(),
                count: share.count,
            });

        let planned_total: f64 = project_costs(records).iter().map(|p| p.planned).sum();
        let actual_total: f64 = records.iter().map(|r| r.actual_cost).sum();

        Self {
            total_records: records.len(),
            total_projects,
            leading_status,
            completion_rate: completion_rate(records),
            planned_total,
            actual_total,
            cost_variance_pct: variance_percent(planned_total, actual_total).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate() {
        let records = vec![
            ProjectRecord::new("P1", "x", "Eng").with_completion(20.0),
            ProjectRecord::new("P2", "x", "Eng").with_completion(80.0),
            ProjectRecord::new("P3", "x", "Eng"),
        ];
        assert_eq!(completion_rate(&records), 50.0);
    }

    #[test]
    fn test_completion_rate_empty_is_zero() {
        assert_eq!(completion_rate(&[]), 0.0);
        let blank = vec![ProjectRecord::new("P1", "x", "Eng")];
        assert_eq!(completion_rate(&blank), 0.0);
    }

    #[test]
    fn test_completion_rate_passes_out_of_range() {
        let records = vec![
            ProjectRecord::new("P1", "x", "Eng").with_completion(150.0),
            ProjectRecord::new("P2", "x", "Eng").with_completion(-50.0),
        ];
        assert_eq!(completion_rate(&records), 50.0);
    }

    #[test]
    fn test_kpis() {
        let records = vec![
            ProjectRecord::new("P1", "atrasado", "Eng").with_completion(40.0).with_costs(100.0, 60.0),
            ProjectRecord::new("P1", "atrasado", "Eng").with_completion(40.0).with_costs(100.0, 90.0),
            ProjectRecord::new("P2", "em dia", "Ops").with_completion(100.0).with_costs(100.0, 100.0),
        ];
        let kpis = Kpis::compute(&records);
        assert_eq!(kpis.total_records, 3);
        assert_eq!(kpis.total_projects, 2);
        assert_eq!(
            kpis.leading_status,
            Some(LeadingStatus { status: "atrasado".to_string(), count: 2 })
        );
        assert_eq!(kpis.completion_rate, 60.0);
        assert_eq!(kpis.planned_total, 200.0);
        assert_eq!(kpis.actual_total, 250.0);
        assert_eq!(kpis.cost_variance_pct, 25.0);
    }

    #[test]
    fn test_kpis_empty() {
        let kpis = Kpis::compute(&[]);
        assert_eq!(kpis.total_records, 0);
        assert_eq!(kpis.total_projects, 0);
        assert!(kpis.leading_status.is_none());
        assert_eq!(kpis.completion_rate, 0.0);
        assert_eq!(kpis.cost_variance_pct, 0.0);
    }

    #[test]
    fn test_leading_status_tie_breaks_by_label() {
        let records = vec![
            ProjectRecord::new("P1", "pausado", "Eng"),
            ProjectRecord::new("P2", "critico", "Eng"),
        ];
        let kpis = Kpis::compute(&records);
        assert_eq!(kpis.leading_status.unwrap().status, "critico");
    }
}
