//! pmdash - Project management dashboard
//!
//! This library turns a CSV export of project records into dashboard metrics:
//! - Loading and cleaning the export (`data`)
//! - Project record and status palette models (`models`)
//! - Status distribution, completion rate, cost by area and per-project costs (`metrics`)
//! - Brazilian currency, percentage and date formatting (`utils`)
//! - The `pmdash` command-line renderer (`cli`)
//!
//! # Example
//!
//! ```no_run
//! use pmdash::data::load_records;
//! use pmdash::metrics::Dashboard;
//! use pmdash::models::StatusColorMap;
//!
//! let report = load_records("data/joined_projects_data.csv").unwrap();
//! let dashboard = Dashboard::build(&report.records, &StatusColorMap::default());
//! println!("average completion: {:.1}%", dashboard.kpis.completion_rate);
//! ```

pub mod cli;
pub mod data;
pub mod metrics;
pub mod models;
pub mod utils;
