//! Period selection and derived view computation
//!
//! Resolving a selection against the dataset is a pure function: it
//! produces the current aggregate, the previous-period aggregate for
//! comparison, and the chart window, with no hidden state or caching.

use crate::services::{Aggregator, Trend};
use crate::types::{AggregateRecord, DashError, Dataset, Metric, MonthlyRecord, Result};

/// The currently selected period: a single month or a whole quarter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Month(String),
    Quarter(String),
}

impl Selection {
    /// The selected label, independent of mode
    pub fn label(&self) -> &str {
        match self {
            Self::Month(label) | Self::Quarter(label) => label,
        }
    }

    pub fn is_quarter(&self) -> bool {
        matches!(self, Self::Quarter(_))
    }
}

/// Everything derived from one (dataset, selection) pair
#[derive(Debug, Clone)]
pub struct PeriodView {
    /// Selected period label (month name or quarter label)
    pub label: String,
    /// Label of the comparison period, when one exists
    pub previous_label: Option<String>,
    /// Months making up the selected period, in chronological order
    pub months: Vec<MonthlyRecord>,
    /// Summed metrics for the selected period
    pub current: AggregateRecord,
    /// Summed metrics for the immediately preceding period
    pub previous: Option<AggregateRecord>,
    /// Records to plot leading into the selection
    pub chart_window: Vec<MonthlyRecord>,
}

impl PeriodView {
    /// Trend of one metric against the previous period
    pub fn trend(&self, metric: Metric) -> Trend {
        Trend::compute(
            metric.of_aggregate(&self.current),
            self.previous.as_ref().map(|p| metric.of_aggregate(p)),
        )
    }

    /// Previous-period value of one metric, for the "vs N prev." sub-line
    pub fn previous_value(&self, metric: Metric) -> Option<u64> {
        self.previous.as_ref().map(|p| metric.of_aggregate(p))
    }

    /// Secondary video counter of the selected period, if any month
    /// recorded one (0 sums are treated as "not recorded")
    pub fn videos_secondary(&self) -> Option<u64> {
        (self.current.benchmark_videos_secondary > 0)
            .then_some(self.current.benchmark_videos_secondary)
    }
}

/// Resolver for turning selections into period views
pub struct Resolver;

impl Resolver {
    /// Resolve a selection against the dataset.
    ///
    /// Month mode: current is the named month; previous is the month
    /// immediately before it in dataset order (None for the first); the
    /// chart window is `[previous, current]` so a plotted trend line
    /// terminates at the selected value, or just `[current]` for the
    /// first month.
    ///
    /// Quarter mode: current is every month of the named quarter, summed;
    /// previous is the immediately preceding distinct quarter, summed
    /// (None for the first); the chart window is the quarter's months.
    pub fn resolve(dataset: &Dataset, selection: &Selection) -> Result<PeriodView> {
        match selection {
            Selection::Month(label) => Self::resolve_month(dataset, label),
            Selection::Quarter(label) => Self::resolve_quarter(dataset, label),
        }
    }

    fn resolve_month(dataset: &Dataset, label: &str) -> Result<PeriodView> {
        let index = dataset
            .month_index(label)
            .ok_or_else(|| DashError::UnknownPeriod(label.to_string()))?;

        let records = dataset.records();
        let current_record = records[index].clone();
        let previous_record = (index > 0).then(|| records[index - 1].clone());

        let chart_window = match &previous_record {
            Some(prev) => vec![prev.clone(), current_record.clone()],
            None => vec![current_record.clone()],
        };

        Ok(PeriodView {
            label: label.to_string(),
            previous_label: previous_record.as_ref().map(|r| r.month.clone()),
            current: Aggregator::combine(std::slice::from_ref(&current_record)),
            previous: previous_record
                .as_ref()
                .map(|r| Aggregator::combine(std::slice::from_ref(r))),
            months: vec![current_record],
            chart_window,
        })
    }

    fn resolve_quarter(dataset: &Dataset, label: &str) -> Result<PeriodView> {
        let quarters = dataset.quarters();
        let position = quarters
            .iter()
            .position(|q| *q == label)
            .ok_or_else(|| DashError::UnknownPeriod(label.to_string()))?;

        let months: Vec<MonthlyRecord> = dataset
            .quarter_records(label)
            .into_iter()
            .cloned()
            .collect();

        let previous_label = (position > 0).then(|| quarters[position - 1].to_string());
        let previous = previous_label
            .as_deref()
            .map(|prev| Aggregator::combine_refs(&dataset.quarter_records(prev)));

        Ok(PeriodView {
            label: label.to_string(),
            previous_label,
            current: Aggregator::combine(&months),
            previous,
            chart_window: months.clone(),
            months,
        })
    }
}
