//! Immutable monthly dataset and period lookups

use crate::types::{CampaignMetrics, DashError, MonthlyRecord, Result};

/// Immutable, chronologically ordered set of monthly records.
///
/// Constructed once at startup (builtin or loaded from JSON) and never
/// mutated. Array order is the chronological order.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<MonthlyRecord>,
}

impl Dataset {
    /// Create a dataset, validating that it is non-empty and that month
    /// names are unique.
    pub fn new(records: Vec<MonthlyRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(DashError::Dataset("dataset is empty".into()));
        }

        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.month == record.month) {
                return Err(DashError::Dataset(format!(
                    "duplicate month: {}",
                    record.month
                )));
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a month by name
    pub fn month_index(&self, month: &str) -> Option<usize> {
        self.records.iter().position(|r| r.month == month)
    }

    /// Last (most recent) month name
    pub fn last_month(&self) -> &str {
        // records is validated non-empty at construction
        &self.records[self.records.len() - 1].month
    }

    /// Distinct quarter labels in first-appearance (chronological) order
    pub fn quarters(&self) -> Vec<&str> {
        let mut quarters: Vec<&str> = Vec::new();
        for record in &self.records {
            if !quarters.contains(&record.quarter.as_str()) {
                quarters.push(&record.quarter);
            }
        }
        quarters
    }

    /// All records belonging to a quarter, in chronological order
    pub fn quarter_records(&self, quarter: &str) -> Vec<&MonthlyRecord> {
        self.records
            .iter()
            .filter(|r| r.quarter == quarter)
            .collect()
    }

    /// The five-month dataset shipped with the dashboard
    pub fn builtin() -> Self {
        Self {
            records: vec![
                MonthlyRecord {
                    month: "July".into(),
                    quarter: "Q2".into(),
                    traffic: 1673,
                    benchmark_videos: 310,
                    benchmark_videos_secondary: None,
                    newsletters: 1,
                    blogs: 16,
                    campaigns: CampaignMetrics {
                        email: 1100,
                        linkedin: 0,
                        other: 0,
                    },
                    activities: vec!["Weekly Newsletter (1)".into()],
                },
                MonthlyRecord {
                    month: "August".into(),
                    quarter: "Q2".into(),
                    traffic: 1567,
                    benchmark_videos: 59,
                    benchmark_videos_secondary: None,
                    newsletters: 3,
                    blogs: 8,
                    campaigns: CampaignMetrics {
                        email: 356,
                        linkedin: 475,
                        other: 0,
                    },
                    activities: vec![
                        "Weekly Newsletter (3)".into(),
                        "Newsletter Automation".into(),
                        "Benchmark tool".into(),
                    ],
                },
                MonthlyRecord {
                    month: "September".into(),
                    quarter: "Q2".into(),
                    traffic: 2500,
                    benchmark_videos: 45,
                    benchmark_videos_secondary: None,
                    newsletters: 5,
                    blogs: 16,
                    campaigns: CampaignMetrics::default(),
                    activities: vec!["Weekly Newsletter (5)".into()],
                },
                MonthlyRecord {
                    month: "Oct".into(),
                    quarter: "Q3".into(),
                    traffic: 2520,
                    benchmark_videos: 73,
                    benchmark_videos_secondary: Some(952),
                    newsletters: 4,
                    blogs: 0,
                    campaigns: CampaignMetrics {
                        email: 2545,
                        linkedin: 444,
                        other: 267,
                    },
                    activities: vec![
                        "Weekly Newsletter (4)".into(),
                        "Benchmark Revamp".into(),
                        "Warehouse campaign revamp".into(),
                    ],
                },
                MonthlyRecord {
                    month: "Nov".into(),
                    quarter: "Q3".into(),
                    traffic: 2100,
                    benchmark_videos: 28,
                    benchmark_videos_secondary: Some(924),
                    newsletters: 4,
                    blogs: 0,
                    campaigns: CampaignMetrics {
                        email: 800,
                        linkedin: 180,
                        other: 0,
                    },
                    activities: vec![
                        "Weekly Newsletter (4)".into(),
                        "Benchmark listicles automation".into(),
                        "Benchmark blog frontend revamp".into(),
                        "Hiring (3)".into(),
                    ],
                },
            ],
        }
    }
}
