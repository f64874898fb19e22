//! Home dashboard overview of revenue, reach and recent content.

use crate::aggregator::total;
use chrono::{DateTime, Utc};
use creator_core::types::{
    ContentItem, PlatformAccount, RevenueKind, RevenueStream, Transaction,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOverview {
    /// Σ signed transaction amounts.
    pub total_revenue: f64,
    /// Σ amounts of ad-revenue streams.
    pub ad_revenue: f64,
    /// Σ impressions over content, using views where impressions are unknown.
    pub total_reach: u64,
    pub content_count: usize,
    pub recent_content: Vec<ContentItem>,
    pub connected_platforms: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Inputs for one dashboard load.
pub struct DashboardInputs<'a> {
    pub transactions: &'a [Transaction],
    pub streams: &'a [RevenueStream],
    pub content: &'a [ContentItem],
    pub accounts: &'a [PlatformAccount],
    pub recent_limit: usize,
}

pub fn overview(inputs: DashboardInputs<'_>) -> DashboardOverview {
    let ad_streams: Vec<RevenueStream> = inputs
        .streams
        .iter()
        .filter(|s| s.kind == RevenueKind::AdRevenue)
        .cloned()
        .collect();

    DashboardOverview {
        total_revenue: total(inputs.transactions, |t| t.amount),
        ad_revenue: total(&ad_streams, |s| s.amount),
        total_reach: inputs.content.iter().map(reach).sum(),
        content_count: inputs.content.len(),
        recent_content: recent(inputs.content, inputs.recent_limit),
        connected_platforms: inputs
            .accounts
            .iter()
            .filter(|a| a.is_connected)
            .map(|a| a.platform.clone())
            .collect(),
        generated_at: Utc::now(),
    }
}

/// Newest first; ties keep store order.
pub fn recent(content: &[ContentItem], limit: usize) -> Vec<ContentItem> {
    let mut items = content.to_vec();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    items.truncate(limit);
    items
}

fn reach(item: &ContentItem) -> u64 {
    if item.impressions > 0 {
        item.impressions
    } else {
        item.views
    }
}
