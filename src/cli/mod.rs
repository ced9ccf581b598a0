//! Command-line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::services::insights::generate_insights;
use crate::services::{load_dataset, PeriodView, Resolver, Selection, TrendDirection};
use crate::tui;
use crate::tui::widgets::overview::format_number;
use crate::types::{DashError, Dataset, Metric, Result};

/// Terminal marketing KPI dashboard
#[derive(Parser)]
#[command(name = "mktdash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Load the dataset from a JSON file instead of the builtin data
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui,

    /// Print a KPI report for a period
    Report {
        /// Month or quarter label (defaults to the latest month)
        #[arg(long)]
        period: Option<String>,

        /// Default to the latest quarter instead of the latest month
        #[arg(long)]
        quarter: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate an AI summary for a period
    Insights {
        /// Month or quarter label (defaults to the latest month)
        #[arg(long)]
        period: Option<String>,

        /// Default to the latest quarter instead of the latest month
        #[arg(long)]
        quarter: bool,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let dataset = match &self.data {
            Some(path) => load_dataset(path)?,
            None => Dataset::builtin(),
        };

        match self.command {
            None | Some(Commands::Tui) => tui::run(dataset),
            Some(Commands::Report {
                period,
                quarter,
                json,
            }) => {
                let selection = selection_for(&dataset, period.as_deref(), quarter)?;
                let view = Resolver::resolve(&dataset, &selection)?;
                let report = build_report(&view);
                if json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", render_report_text(&report));
                }
                Ok(())
            }
            Some(Commands::Insights { period, quarter }) => {
                let selection = selection_for(&dataset, period.as_deref(), quarter)?;
                let view = Resolver::resolve(&dataset, &selection)?;
                println!("{}", generate_insights(&view.label, &view.months));
                Ok(())
            }
        }
    }
}

/// Pick a selection from CLI arguments.
///
/// An explicit label is matched against months first, then quarter
/// labels, so no mode flag is needed. Without a label the latest month
/// (or latest quarter with `--quarter`) is used.
fn selection_for(dataset: &Dataset, period: Option<&str>, quarter: bool) -> Result<Selection> {
    match period {
        Some(label) => {
            if dataset.month_index(label).is_some() {
                Ok(Selection::Month(label.to_string()))
            } else if dataset.quarters().contains(&label) {
                Ok(Selection::Quarter(label.to_string()))
            } else {
                Err(DashError::UnknownPeriod(label.to_string()))
            }
        }
        None if quarter => {
            let quarters = dataset.quarters();
            // Dataset is non-empty, so at least one quarter exists
            Ok(Selection::Quarter(quarters[quarters.len() - 1].to_string()))
        }
        None => Ok(Selection::Month(dataset.last_month().to_string())),
    }
}

#[derive(Debug, Serialize)]
struct MetricReport {
    metric: &'static str,
    value: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous: Option<u64>,
    direction: &'static str,
    change: String,
}

#[derive(Debug, Serialize)]
struct ReportPayload {
    period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_period: Option<String>,
    metrics: Vec<MetricReport>,
}

fn direction_str(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "up",
        TrendDirection::Down => "down",
        TrendDirection::Neutral => "neutral",
    }
}

fn build_report(view: &PeriodView) -> ReportPayload {
    let metrics = Metric::all()
        .iter()
        .map(|metric| {
            let trend = view.trend(*metric);
            MetricReport {
                metric: metric.label(),
                value: metric.of_aggregate(&view.current),
                previous: view.previous_value(*metric),
                direction: direction_str(trend.direction),
                change: trend.display,
            }
        })
        .collect();

    ReportPayload {
        period: view.label.clone(),
        previous_period: view.previous_label.clone(),
        metrics,
    }
}

fn render_report_text(report: &ReportPayload) -> String {
    let mut out = String::new();
    match &report.previous_period {
        Some(prev) => out.push_str(&format!("Period: {} (vs {})\n\n", report.period, prev)),
        None => out.push_str(&format!("Period: {} (no comparison available)\n\n", report.period)),
    }

    for m in &report.metrics {
        let mut line = format!(
            "  {:<12} {:>10}   {:>8}",
            m.metric,
            format_number(m.value),
            m.change
        );
        // The comparison column only exists when a previous period does
        if let Some(p) = m.previous {
            line.push_str(&format!("   vs {} prev.", format_number(p)));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== argument parsing ==========

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["mktdash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.data.is_none());
    }

    #[test]
    fn test_cli_parse_report_json() {
        let cli = Cli::try_parse_from(["mktdash", "report", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Report {
                period: None,
                quarter: false,
                json: true
            })
        ));
    }

    #[test]
    fn test_cli_parse_report_period() {
        let cli = Cli::try_parse_from(["mktdash", "report", "--period", "Q3"]).unwrap();
        match cli.command {
            Some(Commands::Report { period, .. }) => assert_eq!(period.as_deref(), Some("Q3")),
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_cli_parse_global_data_flag() {
        let cli = Cli::try_parse_from(["mktdash", "report", "--data", "/tmp/data.json"]).unwrap();
        assert_eq!(cli.data.as_deref(), Some(std::path::Path::new("/tmp/data.json")));
    }

    // ========== selection_for ==========

    #[test]
    fn test_selection_for_defaults_to_last_month() {
        let dataset = Dataset::builtin();
        let selection = selection_for(&dataset, None, false).unwrap();
        assert_eq!(selection, Selection::Month("Nov".into()));
    }

    #[test]
    fn test_selection_for_quarter_flag_defaults_to_last_quarter() {
        let dataset = Dataset::builtin();
        let selection = selection_for(&dataset, None, true).unwrap();
        assert_eq!(selection, Selection::Quarter("Q3".into()));
    }

    #[test]
    fn test_selection_for_month_label() {
        let dataset = Dataset::builtin();
        let selection = selection_for(&dataset, Some("August"), false).unwrap();
        assert_eq!(selection, Selection::Month("August".into()));
    }

    #[test]
    fn test_selection_for_quarter_label_inferred() {
        let dataset = Dataset::builtin();
        // Quarter labels resolve without the --quarter flag
        let selection = selection_for(&dataset, Some("Q2"), false).unwrap();
        assert_eq!(selection, Selection::Quarter("Q2".into()));
    }

    #[test]
    fn test_selection_for_unknown_label() {
        let dataset = Dataset::builtin();
        let result = selection_for(&dataset, Some("March"), false);
        assert!(matches!(result, Err(DashError::UnknownPeriod(_))));
    }

    // ========== report building ==========

    fn view_for(selection: Selection) -> PeriodView {
        Resolver::resolve(&Dataset::builtin(), &selection).unwrap()
    }

    #[test]
    fn test_build_report_month() {
        let report = build_report(&view_for(Selection::Month("Nov".into())));

        assert_eq!(report.period, "Nov");
        assert_eq!(report.previous_period.as_deref(), Some("Oct"));
        assert_eq!(report.metrics.len(), 5);

        let traffic = &report.metrics[0];
        assert_eq!(traffic.metric, "Traffic");
        assert_eq!(traffic.value, 2100);
        assert_eq!(traffic.previous, Some(2520));
        assert_eq!(traffic.direction, "down");
        assert_eq!(traffic.change, "-16.7%");
    }

    #[test]
    fn test_build_report_first_month_has_no_previous() {
        let report = build_report(&view_for(Selection::Month("July".into())));
        assert!(report.previous_period.is_none());
        assert!(report.metrics.iter().all(|m| m.previous.is_none()));
        assert!(report.metrics.iter().all(|m| m.direction == "neutral"));
    }

    #[test]
    fn test_report_json_shape() {
        let report = build_report(&view_for(Selection::Quarter("Q3".into())));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["period"], "Q3");
        assert_eq!(json["previous_period"], "Q2");
        assert_eq!(json["metrics"][0]["metric"], "Traffic");
        assert_eq!(json["metrics"][0]["value"], 4620);
    }

    #[test]
    fn test_render_report_text() {
        let report = build_report(&view_for(Selection::Month("Nov".into())));
        let text = render_report_text(&report);

        assert!(text.contains("Period: Nov (vs Oct)"));
        assert!(text.contains("Traffic"));
        assert!(text.contains("2,100"));
        assert!(text.contains("-16.7%"));
        assert!(text.contains("vs 2,520 prev."));
    }

    #[test]
    fn test_render_report_text_no_comparison() {
        let report = build_report(&view_for(Selection::Month("July".into())));
        let text = render_report_text(&report);
        assert!(text.contains("no comparison available"));
        assert!(text.contains("n/a"));
    }

    #[test]
    fn test_render_report_text_has_no_trailing_whitespace() {
        for selection in [
            Selection::Month("July".into()),
            Selection::Month("Nov".into()),
        ] {
            let report = build_report(&view_for(selection));
            let text = render_report_text(&report);
            assert!(text.lines().all(|l| l == l.trim_end()));
        }
    }
}
