//! Cross-platform analytics summary and revenue ranking.

use crate::aggregator::{average, percentage_of_total, total};
use crate::view::{RecordView, SortDirection};
use creator_core::types::{ContentPerformance, PlatformAnalytics};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_followers: u64,
    pub total_revenue: f64,
    pub total_impressions: u64,
    pub total_reach: u64,
    pub avg_engagement: f64,
    pub avg_growth: f64,
    /// Platforms by revenue, highest first.
    pub revenue_ranking: Vec<PlatformShare>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformShare {
    pub platform: String,
    pub revenue: f64,
    pub share: f64,
}

pub fn summarize(rows: &[PlatformAnalytics]) -> AnalyticsSummary {
    let total_revenue = total(rows, |r| r.revenue);
    let ranked = RecordView::new()
        .sort_by("revenue", SortDirection::Desc)
        .apply(rows);

    AnalyticsSummary {
        total_followers: rows.iter().map(|r| r.followers).sum(),
        total_revenue,
        total_impressions: rows.iter().map(|r| r.impressions).sum(),
        total_reach: rows.iter().map(|r| r.reach).sum(),
        avg_engagement: average(rows, |r| r.engagement),
        avg_growth: average(rows, |r| r.growth),
        revenue_ranking: ranked
            .into_iter()
            .map(|r| PlatformShare {
                share: percentage_of_total(r.revenue, total_revenue),
                platform: r.platform,
                revenue: r.revenue,
            })
            .collect(),
    }
}

/// Best-earning content first, at most `limit` items.
pub fn top_content(items: &[ContentPerformance], limit: usize) -> Vec<ContentPerformance> {
    RecordView::new()
        .sort_by("revenue", SortDirection::Desc)
        .limit(limit)
        .apply(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn row(platform: &str, followers: u64, engagement: f64, revenue: f64, growth: f64) -> PlatformAnalytics {
        PlatformAnalytics {
            id: Uuid::new_v4(),
            platform: platform.to_string(),
            followers,
            engagement,
            reach: followers / 2,
            impressions: followers * 2,
            clicks: 100,
            shares: 10,
            comments: 10,
            likes: 10,
            revenue,
            growth,
        }
    }

    fn performance(title: &str, revenue: f64) -> ContentPerformance {
        ContentPerformance {
            id: Uuid::new_v4(),
            title: title.to_string(),
            platform: "YouTube".to_string(),
            content_type: "Video".to_string(),
            publish_date: NaiveDate::from_ymd_opt(2024, 1, 18).unwrap(),
            views: 1_000,
            engagement: 5.0,
            revenue,
            ctr: 3.0,
        }
    }

    #[test]
    fn test_summary_totals_and_averages() {
        let rows = vec![
            row("Instagram", 125_000, 4.2, 1250.50, 12.5),
            row("Facebook", 89_000, 3.8, 980.20, 8.3),
            row("YouTube", 45_000, 6.1, 2100.80, 15.2),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.total_followers, 259_000);
        assert!((summary.total_revenue - 4331.5).abs() < 1e-9);
        assert!((summary.avg_engagement - 14.1 / 3.0).abs() < 1e-9);
        assert!((summary.avg_growth - 12.0).abs() < 1e-9);

        let order: Vec<&str> = summary
            .revenue_ranking
            .iter()
            .map(|s| s.platform.as_str())
            .collect();
        assert_eq!(order, vec!["YouTube", "Instagram", "Facebook"]);
        let share_sum: f64 = summary.revenue_ranking.iter().map(|s| s.share).sum();
        assert!((share_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_rows_average_to_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.avg_engagement, 0.0);
        assert_eq!(summary.avg_growth, 0.0);
        assert!(summary.revenue_ranking.is_empty());
    }

    #[test]
    fn test_top_content_limit() {
        let items = vec![
            performance("Fashion", 180.50),
            performance("Tech", 450.20),
            performance("Cooking", 320.80),
        ];
        let top = top_content(&items, 2);
        let titles: Vec<&str> = top.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Tech", "Cooking"]);
    }
}
