//! Ad manager summary: spend, revenue, CTR and ROI across campaigns.

use crate::aggregator::{net_return, percentage_of_total, rate, total};
use creator_core::types::{AdPlacement, Campaign, CampaignStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Headline numbers for the ad manager cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdSummary {
    pub total_revenue: f64,
    pub total_spent: f64,
    pub total_impressions: u64,
    pub total_clicks: u64,
    /// `clicks / impressions * 100` (0.0 without impressions).
    pub avg_ctr: f64,
    /// `(revenue - spent) / spent * 100` (0.0 when nothing was spent).
    pub roi: f64,
    pub active_campaigns: usize,
    pub active_placements: usize,
    pub active_placement_revenue: f64,
    pub budgets: Vec<BudgetUtilization>,
}

/// How much of one campaign's budget has been consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetUtilization {
    pub campaign_id: Uuid,
    pub spent: f64,
    pub budget: f64,
    pub percent_used: f64,
}

pub fn summarize(campaigns: &[Campaign], placements: &[AdPlacement]) -> AdSummary {
    let total_revenue = total(campaigns, |c| c.revenue);
    let total_spent = total(campaigns, |c| c.spent);
    let total_impressions: u64 = campaigns.iter().map(|c| c.impressions).sum();
    let total_clicks: u64 = campaigns.iter().map(|c| c.clicks).sum();

    let live_placements: Vec<&AdPlacement> = placements.iter().filter(|p| p.is_active).collect();

    AdSummary {
        total_revenue,
        total_spent,
        total_impressions,
        total_clicks,
        avg_ctr: rate(campaigns, |c| c.clicks as f64, |c| c.impressions as f64),
        roi: net_return(total_revenue, total_spent),
        active_campaigns: campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count(),
        active_placements: live_placements.len(),
        active_placement_revenue: live_placements.iter().map(|p| p.revenue).sum(),
        budgets: campaigns.iter().map(budget_utilization).collect(),
    }
}

pub fn budget_utilization(campaign: &Campaign) -> BudgetUtilization {
    BudgetUtilization {
        campaign_id: campaign.id,
        spent: campaign.spent,
        budget: campaign.budget,
        percent_used: percentage_of_total(campaign.spent, campaign.budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use creator_core::types::{AdPlacementKind, CampaignKind, PlacementMode};

    fn campaign(status: CampaignStatus, budget: f64, spent: f64, revenue: f64) -> Campaign {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Campaign {
            id: Uuid::new_v4(),
            name: "Campaign".to_string(),
            platform: "Meta Ads".to_string(),
            kind: CampaignKind::MetaAds,
            status,
            budget,
            spent,
            revenue,
            impressions: (spent * 200.0) as u64,
            clicks: (spent * 4.0) as u64,
            ctr: 2.0,
            cpm: 5.0,
            start_date: date,
            end_date: date,
            placement: PlacementMode::Manual,
            ad_spots: vec!["story-break".to_string()],
        }
    }

    fn placement(revenue: f64, is_active: bool) -> AdPlacement {
        AdPlacement {
            id: Uuid::new_v4(),
            name: "Header Banner".to_string(),
            kind: AdPlacementKind::Banner,
            position: "Top of page".to_string(),
            platform: "WordPress".to_string(),
            revenue,
            impressions: 1_000,
            ctr: 1.8,
            is_active,
        }
    }

    #[test]
    fn test_summary_matches_reference_scenario() {
        let campaigns = vec![
            campaign(CampaignStatus::Active, 1000.0, 650.0, 1250.0),
            campaign(CampaignStatus::Active, 800.0, 420.0, 890.0),
            campaign(CampaignStatus::Paused, 1200.0, 800.0, 1600.0),
        ];
        let summary = summarize(&campaigns, &[]);
        assert!((summary.total_spent - 1870.0).abs() < 1e-9);
        assert!((summary.total_revenue - 3740.0).abs() < 1e-9);
        assert!((summary.roi - 100.0).abs() < 1e-9);
        assert!((summary.avg_ctr - 2.0).abs() < 1e-9);
        assert_eq!(summary.active_campaigns, 2);
        assert!((summary.budgets[0].percent_used - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_is_all_zero() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.avg_ctr, 0.0);
        assert_eq!(summary.roi, 0.0);
        assert!(summary.budgets.is_empty());
    }

    #[test]
    fn test_only_active_placements_count() {
        let placements = vec![placement(450.20, true), placement(280.80, false)];
        let summary = summarize(&[], &placements);
        assert_eq!(summary.active_placements, 1);
        assert!((summary.active_placement_revenue - 450.20).abs() < 1e-9);
    }

    #[test]
    fn test_zero_budget_utilization_is_zero() {
        let c = campaign(CampaignStatus::Draft, 0.0, 0.0, 0.0);
        assert_eq!(budget_utilization(&c).percent_used, 0.0);
    }
}
