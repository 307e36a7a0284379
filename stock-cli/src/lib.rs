//! Command implementations for the stock CLI.
//!
//! Both subcommands load a CSV, filter it by company and month, and either
//! draw the chart to an SVG file or print the matching rows.

use anyhow::Context;
use clap::Subcommand;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use stock_chart::{ChartConfig, ChartRenderer};
use stock_data::calendar::{parse_month, COMPANIES, DEFAULT_COMPANY, DEFAULT_MONTH};
use stock_data::{filter_points, load_dataset, Selection};

#[derive(Subcommand)]
pub enum Command {
    /// Render the chart for one company and month to an SVG file
    Render {
        /// Path to the stock CSV (Date,Company,Open,Close)
        #[arg(short = 'c', long)]
        csv: PathBuf,

        #[arg(long, default_value = DEFAULT_COMPANY)]
        company: String,

        /// Full month name, e.g. November
        #[arg(short = 'm', long, default_value = DEFAULT_MONTH)]
        month: String,

        /// Optional JSON chart configuration overriding the defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output path for the SVG
        #[arg(short = 'o', long)]
        output: PathBuf,
    },

    /// Print the rows matching a company and month as CSV
    Filter {
        /// Path to the stock CSV (Date,Company,Open,Close)
        #[arg(short = 'c', long)]
        csv: PathBuf,

        #[arg(long, default_value = DEFAULT_COMPANY)]
        company: String,

        /// Full month name, e.g. November
        #[arg(short = 'm', long, default_value = DEFAULT_MONTH)]
        month: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            csv,
            company,
            month,
            config,
            output,
        } => {
            let selection = checked_selection(company, month);
            let config = match config {
                Some(path) => read_config(&path)?,
                None => ChartConfig::default(),
            };
            let csv_text = read_csv(&csv)?;
            let svg = render_chart(&csv_text, &selection, config)?;
            fs::write(&output, svg)
                .with_context(|| format!("writing {}", output.display()))?;
            log::info!("Wrote chart to {}", output.display());
            Ok(())
        }
        Command::Filter {
            csv,
            company,
            month,
        } => {
            let selection = checked_selection(company, month);
            let csv_text = read_csv(&csv)?;
            let stdout = std::io::stdout();
            let count = write_filtered(&csv_text, &selection, stdout.lock())?;
            log::info!("{} matching rows", count);
            Ok(())
        }
    }
}

/// Build the selection, warning about values the chart controls never offer.
fn checked_selection(company: String, month: String) -> Selection {
    if !COMPANIES.contains(&company.as_str()) {
        log::warn!("{} is not one of {:?}; the chart may be empty", company, COMPANIES);
    }
    if parse_month(&month).is_none() {
        log::warn!("{} is not a full month name; the chart will be empty", month);
    }
    Selection::new(company, month)
}

fn read_csv(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn read_config(path: &Path) -> anyhow::Result<ChartConfig> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    ChartConfig::from_json(&json).with_context(|| format!("parsing {}", path.display()))
}

/// Render the chart for `selection` over `csv_text` as SVG markup.
pub fn render_chart(
    csv_text: &str,
    selection: &Selection,
    config: ChartConfig,
) -> anyhow::Result<String> {
    let dataset = load_dataset(csv_text)?;
    let mut renderer = ChartRenderer::new(config);
    renderer.mount(Some(&dataset), selection);
    renderer.svg()
}

/// Write the rows matching `selection` as CSV. Returns how many matched.
pub fn write_filtered<W: Write>(
    csv_text: &str,
    selection: &Selection,
    writer: W,
) -> anyhow::Result<usize> {
    let dataset = load_dataset(csv_text)?;
    let points = filter_points(Some(&dataset), selection);

    let mut wtr = csv::Writer::from_writer(writer);
    for point in &points {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(points.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOCK_CSV: &str = "\
Date,Company,Open,Close
2023-11-01,Apple,150.0,152.0
2023-11-02,Apple,152.0,151.0
2023-11-01,Microsoft,300.0,305.0
2023-10-31,Apple,149.0,150.0
";

    #[test]
    fn render_chart_draws_selected_rows() {
        let svg = render_chart(
            STOCK_CSV,
            &Selection::new("Apple", "November"),
            ChartConfig::default(),
        )
        .unwrap();
        // two days, one open and one close marker each
        assert_eq!(svg.matches("<circle").count(), 4);
        assert!(!svg.contains("No data"));
    }

    #[test]
    fn render_chart_with_no_matches_is_placeholder() {
        let svg = render_chart(
            STOCK_CSV,
            &Selection::new("Tesla", "November"),
            ChartConfig::default(),
        )
        .unwrap();
        assert!(svg.contains("No data for Tesla in November"));
        assert!(!svg.contains("<circle"));
    }

    #[test]
    fn write_filtered_outputs_csv() {
        let mut out = Vec::new();
        let count =
            write_filtered(STOCK_CSV, &Selection::new("Apple", "November"), &mut out).unwrap();
        assert_eq!(count, 2);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Date,Company,Open,Close\n2023-11-01,Apple,150.0,152.0\n2023-11-02,Apple,152.0,151.0\n"
        );
    }

    #[test]
    fn bad_csv_is_an_error() {
        let result = render_chart("Date,Company\n", &Selection::default(), ChartConfig::default());
        assert!(result.is_err());
    }
}
