// Metrics computed over loaded project records
// All functions are pure and can run in any order over the same slice

pub mod costs;
pub mod dashboard;
pub mod distribution;
pub mod kpi;
pub mod projection;

pub use costs::{cost_by_area, project_costs, variance_percent, AreaCost, ProjectCost};
pub use dashboard::Dashboard;
pub use distribution::{ranked_distribution, resolve_colors, status_distribution, status_palette, StatusColor, StatusShare};
pub use kpi::{completion_rate, Kpis, LeadingStatus};
pub use projection::{project_row, project_rows, DisplayRow};
