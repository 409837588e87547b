use crate::models::{ProjectRecord, StatusColorMap};
use serde::Serialize;
use std::collections::BTreeMap;

/// Count and share of one status label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusShare {
    pub count: usize,
    /// count * 100 / total
    pub percentage: f64,
}

/// Resolved display color for one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusColor {
    pub project_id: String,
    pub status: String,
    pub color: String,
}

/// Count records per observed status label
///
/// Every distinct label is reported, known or not. Records are counted
/// individually, so a repeated project id counts once per row. An empty
/// input yields an empty map.
pub fn status_distribution(records: &[ProjectRecord]) -> BTreeMap<String, StatusShare> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.status.clone()).or_insert(0) += 1;
    }

    let total = records.len() as f64;
    counts
        .into_iter()
        .map(|(status, count)| {
            let share = StatusShare {
                count,
                percentage: count as f64 * 100.0 / total,
            };
            (status, share)
        })
        .collect()
}

/// Distribution entries ordered for display: largest count first, then by label
pub fn ranked_distribution(distribution: &BTreeMap<String, StatusShare>) -> Vec<(&str, StatusShare)> {
    let mut ranked: Vec<(&str, StatusShare)> = distribution
        .iter()
        .map(|(status, share)| (status.as_str(), *share))
        .collect();
    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
    ranked
}

/// Resolve each record's status to a display color
pub fn resolve_colors(records: &[ProjectRecord], colors: &StatusColorMap) -> Vec<StatusColor> {
    records
        .iter()
        .map(|record| StatusColor {
            project_id: record.project_id.clone(),
            status: record.status.clone(),
            color: colors.resolve(&record.status).to_string(),
        })
        .collect()
}

/// One color per distinct observed status
pub fn status_palette(records: &[ProjectRecord], colors: &StatusColorMap) -> BTreeMap<String, String> {
    records
        .iter()
        .map(|record| (record.status.clone(), colors.resolve(&record.status).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FALLBACK_COLOR;

    fn records(statuses: &[&str]) -> Vec<ProjectRecord> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| ProjectRecord::new(format!("P{}", i), *s, "Eng"))
            .collect()
    }

    #[test]
    fn test_distribution_scenario() {
        let dist = status_distribution(&records(&["delayed", "delayed", "completed"]));
        assert_eq!(dist.len(), 2);
        assert_eq!(dist["delayed"].count, 2);
        assert!((dist["delayed"].percentage - 66.6667).abs() < 0.001);
        assert_eq!(dist["completed"].count, 1);
        assert!((dist["completed"].percentage - 33.3333).abs() < 0.001);
    }

    #[test]
    fn test_distribution_totals() {
        let input = records(&["em dia", "atrasado", "critico", "x", "em dia", "atrasado", "andamento"]);
        let dist = status_distribution(&input);

        let count_sum: usize = dist.values().map(|s| s.count).sum();
        assert_eq!(count_sum, input.len());

        let pct_sum: f64 = dist.values().map(|s| s.percentage).sum();
        assert!((pct_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_counts_duplicate_ids() {
        let input = vec![
            ProjectRecord::new("P1", "atrasado", "Eng"),
            ProjectRecord::new("P1", "atrasado", "Eng"),
        ];
        assert_eq!(status_distribution(&input)["atrasado"].count, 2);
    }

    #[test]
    fn test_distribution_empty() {
        assert!(status_distribution(&[]).is_empty());
    }

    #[test]
    fn test_ranked_distribution() {
        let dist = status_distribution(&records(&["b", "a", "c", "c", "a"]));
        let ranked = ranked_distribution(&dist);
        let labels: Vec<&str> = ranked.iter().map(|(s, _)| *s).collect();
        assert_eq!(labels, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_resolve_colors_with_fallback() {
        let colors = StatusColorMap::default();
        let resolved = resolve_colors(&records(&["atrasado", "cancelado", ""]), &colors);
        assert_eq!(resolved.len(), 3);
        assert_eq!(resolved[0].color, "#FF8C00");
        assert_eq!(resolved[1].color, FALLBACK_COLOR);
        assert_eq!(resolved[2].color, FALLBACK_COLOR);
        assert_eq!(resolved[1].project_id, "P1");
    }

    #[test]
    fn test_status_palette_distinct() {
        let colors = StatusColorMap::default();
        let palette = status_palette(&records(&["concluido", "concluido", "novo"]), &colors);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette["concluido"], "#4682B4");
        assert_eq!(palette["novo"], FALLBACK_COLOR);
    }
}
