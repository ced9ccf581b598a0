//! Record types for monthly marketing metrics

use serde::{Deserialize, Serialize};

/// Campaign send counters, broken down by channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CampaignMetrics {
    pub email: u64,
    pub linkedin: u64,
    pub other: u64,
}

impl CampaignMetrics {
    /// Total sends across all channels
    pub fn total(&self) -> u64 {
        self.email
            .saturating_add(self.linkedin)
            .saturating_add(self.other)
    }

    pub fn add(&mut self, other: &CampaignMetrics) {
        self.email = self.email.saturating_add(other.email);
        self.linkedin = self.linkedin.saturating_add(other.linkedin);
        self.other = self.other.saturating_add(other.other);
    }
}

/// One month of marketing metrics.
///
/// Records are kept in chronological order; "previous" always means the
/// immediately preceding record in that order, never a calendar lookup.
/// JSON field names match the original dashboard export (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub month: String,
    pub quarter: String,
    pub traffic: u64,
    pub benchmark_videos: u64,
    /// Secondary video counter (e.g. views); absent means "do not display"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark_videos_secondary: Option<u64>,
    pub newsletters: u64,
    pub blogs: u64,
    pub campaigns: CampaignMetrics,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl MonthlyRecord {
    /// Whether the month recorded any activity
    pub fn has_activity(&self) -> bool {
        !self.activities.is_empty()
    }
}

/// Summed metrics for a period (one or more months).
///
/// Same numeric shape as [`MonthlyRecord`] minus month/quarter/activities.
/// Transient: recomputed on every selection change, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct AggregateRecord {
    pub traffic: u64,
    pub benchmark_videos: u64,
    /// Sum of secondary counters, absent counted as 0
    pub benchmark_videos_secondary: u64,
    pub newsletters: u64,
    pub blogs: u64,
    pub campaigns: CampaignMetrics,
}

impl AggregateRecord {
    pub fn add(&mut self, record: &MonthlyRecord) {
        self.traffic = self.traffic.saturating_add(record.traffic);
        self.benchmark_videos = self
            .benchmark_videos
            .saturating_add(record.benchmark_videos);
        self.benchmark_videos_secondary = self
            .benchmark_videos_secondary
            .saturating_add(record.benchmark_videos_secondary.unwrap_or(0));
        self.newsletters = self.newsletters.saturating_add(record.newsletters);
        self.blogs = self.blogs.saturating_add(record.blogs);
        self.campaigns.add(&record.campaigns);
    }

    /// Campaign total across all channels
    pub fn campaign_total(&self) -> u64 {
        self.campaigns.total()
    }
}

/// Displayable KPI metrics, used by stat cards, charts, and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Traffic,
    Videos,
    Newsletters,
    Blogs,
    Campaigns,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Self::Traffic => "Traffic",
            Self::Videos => "Videos",
            Self::Newsletters => "Newsletters",
            Self::Blogs => "Blogs",
            Self::Campaigns => "Campaigns",
        }
    }

    /// All metrics in display order
    pub fn all() -> &'static [Metric] {
        &[
            Metric::Traffic,
            Metric::Videos,
            Metric::Newsletters,
            Metric::Blogs,
            Metric::Campaigns,
        ]
    }

    /// Next metric in display order (wrapping)
    pub fn next(self) -> Self {
        match self {
            Self::Traffic => Self::Videos,
            Self::Videos => Self::Newsletters,
            Self::Newsletters => Self::Blogs,
            Self::Blogs => Self::Campaigns,
            Self::Campaigns => Self::Traffic,
        }
    }

    /// Previous metric in display order (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Self::Traffic => Self::Campaigns,
            Self::Videos => Self::Traffic,
            Self::Newsletters => Self::Videos,
            Self::Blogs => Self::Newsletters,
            Self::Campaigns => Self::Blogs,
        }
    }

    /// Value of this metric for a single month
    pub fn of_record(self, record: &MonthlyRecord) -> u64 {
        match self {
            Self::Traffic => record.traffic,
            Self::Videos => record.benchmark_videos,
            Self::Newsletters => record.newsletters,
            Self::Blogs => record.blogs,
            Self::Campaigns => record.campaigns.total(),
        }
    }

    /// Value of this metric for an aggregate
    pub fn of_aggregate(self, agg: &AggregateRecord) -> u64 {
        match self {
            Self::Traffic => agg.traffic,
            Self::Videos => agg.benchmark_videos,
            Self::Newsletters => agg.newsletters,
            Self::Blogs => agg.blogs,
            Self::Campaigns => agg.campaign_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(month: &str, traffic: u64, secondary: Option<u64>) -> MonthlyRecord {
        MonthlyRecord {
            month: month.into(),
            quarter: "Q2".into(),
            traffic,
            benchmark_videos: 10,
            benchmark_videos_secondary: secondary,
            newsletters: 2,
            blogs: 4,
            campaigns: CampaignMetrics {
                email: 100,
                linkedin: 50,
                other: 25,
            },
            activities: vec!["Weekly Newsletter (2)".into()],
        }
    }

    #[test]
    fn test_campaign_total() {
        let c = CampaignMetrics {
            email: 100,
            linkedin: 50,
            other: 25,
        };
        assert_eq!(c.total(), 175);
    }

    #[test]
    fn test_campaign_total_zero() {
        assert_eq!(CampaignMetrics::default().total(), 0);
    }

    #[test]
    fn test_aggregate_add_sums_all_fields() {
        let mut agg = AggregateRecord::default();
        agg.add(&make_record("July", 1000, Some(500)));
        agg.add(&make_record("August", 2000, None));

        assert_eq!(agg.traffic, 3000);
        assert_eq!(agg.benchmark_videos, 20);
        // Absent secondary counter sums as 0
        assert_eq!(agg.benchmark_videos_secondary, 500);
        assert_eq!(agg.newsletters, 4);
        assert_eq!(agg.blogs, 8);
        assert_eq!(agg.campaigns.email, 200);
        assert_eq!(agg.campaigns.linkedin, 100);
        assert_eq!(agg.campaigns.other, 50);
        assert_eq!(agg.campaign_total(), 350);
    }

    #[test]
    fn test_has_activity() {
        let mut record = make_record("July", 100, None);
        assert!(record.has_activity());
        record.activities.clear();
        assert!(!record.has_activity());
    }

    #[test]
    fn test_record_json_field_names() {
        let record = make_record("Oct", 2520, Some(952));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["month"], "Oct");
        assert_eq!(json["benchmarkVideos"], 10);
        assert_eq!(json["benchmarkVideosSecondary"], 952);
        assert_eq!(json["campaigns"]["linkedin"], 50);
    }

    #[test]
    fn test_record_json_omits_absent_secondary() {
        let record = make_record("July", 100, None);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("benchmarkVideosSecondary").is_none());
    }

    #[test]
    fn test_record_deserialize_defaults() {
        let json = r#"{
            "month": "July",
            "quarter": "Q2",
            "traffic": 1673,
            "benchmarkVideos": 310,
            "newsletters": 1,
            "blogs": 16,
            "campaigns": {"email": 1100, "linkedin": 0, "other": 0}
        }"#;
        let record: MonthlyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.benchmark_videos_secondary, None);
        assert!(record.activities.is_empty());
    }

    #[test]
    fn test_metric_cycle_roundtrip() {
        for metric in Metric::all() {
            assert_eq!(metric.next().prev(), *metric);
        }
    }

    #[test]
    fn test_metric_values() {
        let record = make_record("July", 1673, None);
        assert_eq!(Metric::Traffic.of_record(&record), 1673);
        assert_eq!(Metric::Videos.of_record(&record), 10);
        assert_eq!(Metric::Campaigns.of_record(&record), 175);

        let mut agg = AggregateRecord::default();
        agg.add(&record);
        assert_eq!(Metric::Traffic.of_aggregate(&agg), 1673);
        assert_eq!(Metric::Campaigns.of_aggregate(&agg), 175);
    }
}
