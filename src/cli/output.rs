// Output formatting utilities

use crate::data::LoadReport;
use crate::metrics::{ranked_distribution, Dashboard};
use crate::utils::{format_currency, format_percentage};
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_RESET: &str = "\x1b[0m";

const MIN_FLEX_WIDTH: usize = 6;

/// How text output should be rendered
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit ANSI colors and bold headers
    pub color: bool,
    /// Maximum line width
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: false, width: 120 }
    }
}

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate, with fallback to the COLUMNS environment
/// variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

/// Parse `#RRGGBB` into its components
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Wrap text in a 24-bit foreground color when coloring is on
fn paint(text: &str, hex: &str, opts: &RenderOptions) -> String {
    match (opts.color, hex_to_rgb(hex)) {
        (true, Some((r, g, b))) => format!("\x1b[38;2;{};{};{}m{}{}", r, g, b, text, ANSI_RESET),
        _ => text.to_string(),
    }
}

fn bold_if(text: &str, opts: &RenderOptions) -> String {
    if opts.color {
        format!("{}{}{}", ANSI_BOLD, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Column definition for a text table
struct TableColumn {
    header: &'static str,
    align: Align,
    /// May be narrowed to fit the terminal
    flexible: bool,
}

impl TableColumn {
    fn text(header: &'static str) -> Self {
        Self { header, align: Align::Left, flexible: true }
    }

    fn number(header: &'static str) -> Self {
        Self { header, align: Align::Right, flexible: false }
    }
}

/// A table cell: plain text plus an optional color for the rendered text
struct Cell {
    text: String,
    color: Option<String>,
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, color: None }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self { text: text.to_string(), color: None }
    }
}

fn colored(text: &str, color: &str) -> Cell {
    Cell {
        text: text.to_string(),
        color: Some(color.to_string()),
    }
}

fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        text.to_string()
    } else if width <= 2 {
        text.chars().take(width).collect()
    } else {
        let mut out: String = text.chars().take(width - 2).collect();
        out.push_str("..");
        out
    }
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.chars().count());
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
    }
}

/// Lay out rows under their headers, narrowing flexible columns to fit
fn render_table(columns: &[TableColumn], rows: &[Vec<Cell>], opts: &RenderOptions) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.header.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(cell.text.chars().count());
        }
    }

    let separators = columns.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > opts.width {
        let widest = columns
            .iter()
            .enumerate()
            .filter(|(idx, c)| c.flexible && widths[*idx] > MIN_FLEX_WIDTH)
            .max_by_key(|(idx, _)| widths[*idx])
            .map(|(idx, _)| idx);
        match widest {
            Some(idx) => widths[idx] -= 1,
            None => break,
        }
    }

    let mut output = String::new();
    let header_line: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| pad(&truncate(c.header, *w), *w, c.align))
        .collect();
    output.push_str(&bold_if(header_line.join("  ").trim_end(), opts));
    output.push('\n');

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    output.push_str(&rule.join("  "));
    output.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(columns.iter().zip(&widths))
            .map(|(cell, (column, width))| {
                let text = pad(&truncate(&cell.text, *width), *width, column.align);
                match &cell.color {
                    Some(color) => paint(&text, color, opts),
                    None => text,
                }
            })
            .collect();
        output.push_str(line.join("  ").trim_end());
        output.push('\n');
    }

    output
}

fn variance_label(variance_pct: f64) -> String {
    if variance_pct > 0.0 {
        format!("{} above plan", format_percentage(variance_pct))
    } else if variance_pct < 0.0 {
        format!("{} below plan", format_percentage(variance_pct.abs()))
    } else {
        "on plan".to_string()
    }
}

/// Key indicator block
pub fn format_kpis(dashboard: &Dashboard, opts: &RenderOptions) -> String {
    let kpis = &dashboard.kpis;
    let mut output = String::new();

    output.push_str(&bold_if("=== Key Indicators ===", opts));
    output.push('\n');
    output.push_str(&format!(
        "Projects:            {} ({} row{})\n",
        kpis.total_projects,
        kpis.total_records,
        if kpis.total_records == 1 { "" } else { "s" }
    ));
    match &kpis.leading_status {
        Some(leading) => {
            let color = dashboard
                .status_colors
                .get(&leading.status)
                .map(String::as_str)
                .unwrap_or_default();
            output.push_str(&format!(
                "Most common status:  {} ({})\n",
                paint(&leading.status, color, opts),
                leading.count
            ));
        }
        None => output.push_str("Most common status:  -\n"),
    }
    output.push_str(&format!("Average completion:  {}\n", format_percentage(kpis.completion_rate)));
    output.push_str(&format!("Planned cost:        {}\n", format_currency(kpis.planned_total)));
    output.push_str(&format!("Actual cost:         {}\n", format_currency(kpis.actual_total)));
    output.push_str(&format!("Cost variance:       {}\n", variance_label(kpis.cost_variance_pct)));

    output
}

/// Status distribution table, largest share first
pub fn format_status_table(dashboard: &Dashboard, opts: &RenderOptions) -> String {
    if dashboard.is_empty() {
        return "No project records.\n".to_string();
    }

    let columns = [
        TableColumn::text("Status"),
        TableColumn::number("Count"),
        TableColumn::number("Share"),
        TableColumn::number("Color"),
    ];
    let rows: Vec<Vec<Cell>> = ranked_distribution(&dashboard.status_distribution)
        .into_iter()
        .map(|(status, share)| {
            let color = dashboard
                .status_colors
                .get(status)
                .cloned()
                .unwrap_or_default();
            vec![
                colored(status, &color),
                share.count.to_string().into(),
                format_percentage(share.percentage).into(),
                colored(&color, &color),
            ]
        })
        .collect();

    render_table(&columns, &rows, opts)
}

/// Planned versus actual cost per area
pub fn format_area_table(dashboard: &Dashboard, opts: &RenderOptions) -> String {
    if dashboard.is_empty() {
        return "No project records.\n".to_string();
    }

    let columns = [
        TableColumn::text("Area"),
        TableColumn::number("Projects"),
        TableColumn::number("Completion"),
        TableColumn::number("Planned"),
        TableColumn::number("Actual"),
        TableColumn::number("Variance"),
    ];
    let rows: Vec<Vec<Cell>> = dashboard
        .areas
        .iter()
        .map(|(area, cost)| {
            vec![
                area.as_str().into(),
                cost.projects.to_string().into(),
                format_percentage(cost.mean_completion).into(),
                format_currency(cost.planned).into(),
                format_currency(cost.actual).into(),
                format_currency(cost.variance).into(),
            ]
        })
        .collect();

    render_table(&columns, &rows, opts)
}

/// Planned versus actual cost per project
pub fn format_cost_table(dashboard: &Dashboard, opts: &RenderOptions) -> String {
    if dashboard.is_empty() {
        return "No project records.\n".to_string();
    }

    let columns = [
        TableColumn::text("Project"),
        TableColumn::text("Area"),
        TableColumn::number("Planned"),
        TableColumn::number("Actual"),
        TableColumn::number("Variance"),
    ];
    let rows: Vec<Vec<Cell>> = dashboard
        .project_costs
        .iter()
        .map(|p| {
            vec![
                p.project_id.as_str().into(),
                p.area.as_str().into(),
                format_currency(p.planned).into(),
                format_currency(p.actual).into(),
                p.variance_percent
                    .map(format_percentage)
                    .unwrap_or_else(|| "-".to_string())
                    .into(),
            ]
        })
        .collect();

    render_table(&columns, &rows, opts)
}

/// Formatted project rows with status colors
pub fn format_rows_table(dashboard: &Dashboard, opts: &RenderOptions) -> String {
    if dashboard.is_empty() {
        return "No project records.\n".to_string();
    }

    let columns = [
        TableColumn::text("Project"),
        TableColumn::text("Status"),
        TableColumn::text("Area"),
        TableColumn::number("Completion"),
        TableColumn::number("Planned"),
        TableColumn::number("Actual"),
        TableColumn::number("Start"),
        TableColumn::number("Deadline"),
    ];
    let rows: Vec<Vec<Cell>> = dashboard
        .rows
        .iter()
        .zip(&dashboard.record_colors)
        .map(|(row, color)| {
            vec![
                row.project_id.as_str().into(),
                colored(&row.status, &color.color),
                row.area.as_str().into(),
                row.completion.as_str().into(),
                row.planned_cost.as_str().into(),
                row.actual_cost.as_str().into(),
                row.start_date.as_str().into(),
                row.deadline.as_str().into(),
            ]
        })
        .collect();

    render_table(&columns, &rows, opts)
}

/// Full dashboard: indicators, status distribution, areas
pub fn format_dashboard(dashboard: &Dashboard, opts: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str(&format_kpis(dashboard, opts));
    output.push('\n');

    output.push_str(&bold_if("=== Status Distribution ===", opts));
    output.push('\n');
    output.push_str(&format_status_table(dashboard, opts));
    output.push('\n');

    output.push_str(&bold_if("=== Areas ===", opts));
    output.push('\n');
    output.push_str(&format_area_table(dashboard, opts));

    output
}

/// One-line notice about rows the loader left out, if any
pub fn format_load_notice(report: &LoadReport) -> Option<String> {
    if report.skipped.is_empty() {
        return None;
    }
    let mut notice = format!(
        "Warning: skipped {} malformed row{} of {}",
        report.skipped.len(),
        if report.skipped.len() == 1 { "" } else { "s" },
        report.rows_read()
    );
    if let Some(first) = report.skipped.first() {
        notice.push_str(&format!(" (first: {})", first));
    }
    Some(notice)
}
