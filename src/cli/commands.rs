use crate::cli::output::{
    format_area_table, format_cost_table, format_dashboard, format_load_notice, format_rows_table,
    format_status_table, get_terminal_width, is_tty, RenderOptions,
};
use crate::data::{load_records, Config, LoadReport};
use crate::metrics::Dashboard;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pmdash")]
#[command(about = "Project management dashboard - status, completion and cost metrics from a project CSV")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Project CSV to read (overrides data.location in ~/.pmdash/rc)
    #[arg(short = 'f', long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,
    /// Never color the output
    #[arg(long, global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Key indicators, status distribution and area costs (default)
    Dashboard,
    /// Projects per status with share and color
    Status,
    /// Planned versus actual cost per area
    Areas,
    /// Planned versus actual cost per project
    Costs,
    /// Every project row, formatted for display
    Rows,
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    handle_command(cli)
}

/// Initialise `env_logger`; defaults to warnings, overridable with RUST_LOG
fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // A logger may already be installed when running under tests
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn handle_command(cli: Cli) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let path = cli.file.clone().unwrap_or_else(|| config.data_location.clone());
    log::debug!("Reading project data from {}", path.display());

    let report = load_records(&path)?;
    if let Some(notice) = format_load_notice(&report) {
        eprintln!("{}", notice);
    }

    let dashboard = Dashboard::build(&report.records, &config.colors);
    let command = cli.command.unwrap_or(Commands::Dashboard);

    if cli.json {
        let json = json_output(command, &dashboard, &report);
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    let opts = render_options(cli.no_color);
    let text = match command {
        Commands::Dashboard => format_dashboard(&dashboard, &opts),
        Commands::Status => format_status_table(&dashboard, &opts),
        Commands::Areas => format_area_table(&dashboard, &opts),
        Commands::Costs => format_cost_table(&dashboard, &opts),
        Commands::Rows => format_rows_table(&dashboard, &opts),
    };
    print!("{}", text);

    Ok(())
}

/// Colors only on a terminal that can show them, and never with NO_COLOR set
fn render_options(no_color: bool) -> RenderOptions {
    let ansi_ok = enable_ansi_support::enable_ansi_support().is_ok();
    let color = !no_color && ansi_ok && is_tty() && std::env::var_os("NO_COLOR").is_none();
    RenderOptions {
        color,
        width: get_terminal_width(),
    }
}

fn json_output(command: Commands, dashboard: &Dashboard, report: &LoadReport) -> serde_json::Value {
    match command {
        Commands::Dashboard => serde_json::json!({
            "kpis": dashboard.kpis,
            "status_distribution": dashboard.status_distribution,
            "status_colors": dashboard.status_colors,
            "areas": dashboard.areas,
            "skipped_rows": report.skipped,
        }),
        Commands::Status => dashboard
            .status_distribution
            .iter()
            .map(|(status, share)| {
                serde_json::json!({
                    "status": status,
                    "count": share.count,
                    "percentage": share.percentage,
                    "color": dashboard.status_colors.get(status),
                })
            })
            .collect(),
        Commands::Areas => serde_json::json!(dashboard.areas),
        Commands::Costs => serde_json::json!(dashboard.project_costs),
        Commands::Rows => dashboard
            .rows
            .iter()
            .zip(&dashboard.record_colors)
            .map(|(row, color)| {
                serde_json::json!({
                    "row": row,
                    "color": color.color,
                })
            })
            .collect(),
    }
}
