//! Aggregator service for combining monthly records

use crate::types::{AggregateRecord, MonthlyRecord};

/// Aggregator for summing monthly records into one period record
pub struct Aggregator;

impl Aggregator {
    /// Sum every numeric field across the given records.
    ///
    /// Campaign sub-fields are summed independently; an absent secondary
    /// video counter counts as 0. An empty slice yields the zero record.
    pub fn combine(records: &[MonthlyRecord]) -> AggregateRecord {
        let mut agg = AggregateRecord::default();
        for record in records {
            agg.add(record);
        }
        agg
    }

    /// Reference-slice variant for callers holding borrowed records
    pub fn combine_refs(records: &[&MonthlyRecord]) -> AggregateRecord {
        let mut agg = AggregateRecord::default();
        for record in records {
            agg.add(record);
        }
        agg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CampaignMetrics, Dataset};

    fn make_record(
        month: &str,
        traffic: u64,
        videos: u64,
        secondary: Option<u64>,
        newsletters: u64,
        blogs: u64,
        campaigns: CampaignMetrics,
    ) -> MonthlyRecord {
        MonthlyRecord {
            month: month.into(),
            quarter: "Q2".into(),
            traffic,
            benchmark_videos: videos,
            benchmark_videos_secondary: secondary,
            newsletters,
            blogs,
            campaigns,
            activities: Vec::new(),
        }
    }

    #[test]
    fn test_combine_empty_is_zero_record() {
        let agg = Aggregator::combine(&[]);
        assert_eq!(agg, AggregateRecord::default());
    }

    #[test]
    fn test_combine_single_record_identity() {
        let record = make_record(
            "July",
            1673,
            310,
            None,
            1,
            16,
            CampaignMetrics {
                email: 1100,
                linkedin: 0,
                other: 0,
            },
        );
        let agg = Aggregator::combine(std::slice::from_ref(&record));

        assert_eq!(agg.traffic, 1673);
        assert_eq!(agg.benchmark_videos, 310);
        assert_eq!(agg.benchmark_videos_secondary, 0);
        assert_eq!(agg.newsletters, 1);
        assert_eq!(agg.blogs, 16);
        assert_eq!(agg.campaign_total(), 1100);
    }

    #[test]
    fn test_combine_sums_every_field() {
        let records = vec![
            make_record(
                "Oct",
                2520,
                73,
                Some(952),
                4,
                0,
                CampaignMetrics {
                    email: 2545,
                    linkedin: 444,
                    other: 267,
                },
            ),
            make_record(
                "Nov",
                2100,
                28,
                Some(924),
                4,
                0,
                CampaignMetrics {
                    email: 800,
                    linkedin: 180,
                    other: 0,
                },
            ),
        ];

        let agg = Aggregator::combine(&records);

        assert_eq!(agg.traffic, 4620);
        assert_eq!(agg.benchmark_videos, 101);
        assert_eq!(agg.benchmark_videos_secondary, 1876);
        assert_eq!(agg.newsletters, 8);
        assert_eq!(agg.blogs, 0);
        assert_eq!(agg.campaigns.email, 3345);
        assert_eq!(agg.campaigns.linkedin, 624);
        assert_eq!(agg.campaigns.other, 267);
        assert_eq!(agg.campaign_total(), 3345 + 624 + 267);
    }

    #[test]
    fn test_combine_absent_secondary_counts_as_zero() {
        let records = vec![
            make_record("July", 100, 10, None, 1, 2, CampaignMetrics::default()),
            make_record("August", 100, 10, Some(50), 1, 2, CampaignMetrics::default()),
            make_record("September", 100, 10, None, 1, 2, CampaignMetrics::default()),
        ];
        let agg = Aggregator::combine(&records);
        assert_eq!(agg.benchmark_videos_secondary, 50);
    }

    #[test]
    fn test_combine_refs_matches_combine() {
        let dataset = Dataset::builtin();
        let owned = Aggregator::combine(dataset.records());
        let refs: Vec<&MonthlyRecord> = dataset.records().iter().collect();
        assert_eq!(Aggregator::combine_refs(&refs), owned);
    }
}
