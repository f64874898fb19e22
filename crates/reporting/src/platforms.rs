//! Platform connection summary.

use crate::aggregator::{average, percentage_of_total};
use creator_core::types::{ConnectionStatus, PlatformAccount};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformSummary {
    pub total_accounts: usize,
    pub connected_accounts: usize,
    /// Followers across connected accounts only.
    pub total_followers: u64,
    /// Mean engagement across connected accounts (0.0 when none).
    pub avg_engagement: f64,
    /// Connected accounts as a percentage of all known accounts.
    pub coverage: f64,
    /// Connected accounts whose status needs attention.
    pub needs_attention: Vec<String>,
}

pub fn summarize(accounts: &[PlatformAccount]) -> PlatformSummary {
    let connected: Vec<PlatformAccount> = accounts
        .iter()
        .filter(|a| a.is_connected)
        .cloned()
        .collect();

    PlatformSummary {
        total_accounts: accounts.len(),
        connected_accounts: connected.len(),
        total_followers: connected.iter().map(|a| a.followers).sum(),
        avg_engagement: average(&connected, |a| a.engagement),
        coverage: percentage_of_total(connected.len() as f64, accounts.len() as f64),
        needs_attention: connected
            .iter()
            .filter(|a| matches!(a.status, ConnectionStatus::Error | ConnectionStatus::Limited))
            .map(|a| a.platform.clone())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn account(platform: &str, connected: bool, followers: u64, engagement: f64, status: ConnectionStatus) -> PlatformAccount {
        PlatformAccount {
            id: Uuid::new_v4(),
            platform: platform.to_string(),
            account_name: platform.to_string(),
            username: format!("@{}", platform.to_lowercase()),
            is_connected: connected,
            followers,
            engagement,
            last_sync: None,
            status,
            permissions: Vec::new(),
            auto_post: false,
            ad_integration: false,
        }
    }

    #[test]
    fn test_only_connected_accounts_are_aggregated() {
        let accounts = vec![
            account("Instagram", true, 125_000, 4.2, ConnectionStatus::Active),
            account("YouTube", true, 45_000, 6.1, ConnectionStatus::Limited),
            account("TikTok", false, 0, 0.0, ConnectionStatus::Pending),
            account("WordPress", true, 15_000, 2.5, ConnectionStatus::Error),
        ];
        let summary = summarize(&accounts);
        assert_eq!(summary.connected_accounts, 3);
        assert_eq!(summary.total_followers, 185_000);
        assert!((summary.avg_engagement - 12.8 / 3.0).abs() < 1e-9);
        assert!((summary.coverage - 75.0).abs() < 1e-9);
        assert_eq!(summary.needs_attention, vec!["YouTube", "WordPress"]);
    }

    #[test]
    fn test_no_accounts() {
        let summary = summarize(&[]);
        assert_eq!(summary.coverage, 0.0);
        assert_eq!(summary.avg_engagement, 0.0);
    }
}
