//! Request and response shapes for the hub REST API.

use chrono::{NaiveDate, NaiveTime};
use creator_core::types::*;
use creator_core::{CreatorError, CreatorResult};
use creator_reporting::ads::AdSummary;
use creator_reporting::analytics::AnalyticsSummary;
use creator_reporting::calendar::CalendarSummary;
use creator_reporting::platforms::PlatformSummary;
use creator_reporting::revenue::RevenueSummary;
use serde::{Deserialize, Serialize};

// ─── Session ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub user: Option<User>,
    pub is_loading: bool,
    pub is_authenticated: bool,
}

// ─── Pages ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdsPage {
    pub campaigns: Vec<Campaign>,
    pub placements: Vec<AdPlacement>,
    pub summary: AdSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsPage {
    pub platform: String,
    pub rows: Vec<PlatformAnalytics>,
    pub summary: AnalyticsSummary,
    pub top_content: Vec<ContentPerformance>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePage {
    pub streams: Vec<RevenueStream>,
    pub transactions: Vec<Transaction>,
    pub summary: RevenueSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformsPage {
    pub accounts: Vec<PlatformAccount>,
    pub summary: PlatformSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarPage {
    pub posts: Vec<ScheduledPost>,
    pub summary: CalendarSummary,
}

// ─── Queries ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsQuery {
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RevenueQuery {
    pub platform: Option<String>,
    pub status: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl RevenueQuery {
    /// The inclusive period to total, open ends defaulting to the date range
    /// limits. `None` when neither end was given.
    pub fn period(&self) -> CreatorResult<Option<(NaiveDate, NaiveDate)>> {
        if self.from.is_none() && self.to.is_none() {
            return Ok(None);
        }
        let from = self.from.unwrap_or(NaiveDate::MIN);
        let to = self.to.unwrap_or(NaiveDate::MAX);
        if from > to {
            return Err(CreatorError::Validation(format!(
                "period start {} is after end {}",
                from, to
            )));
        }
        Ok(Some((from, to)))
    }
}

// ─── Commands ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct TransitionRequest<A> {
    pub action: A,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub platform: String,
    pub kind: CampaignKind,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_placement")]
    pub placement: PlacementMode,
    #[serde(default)]
    pub ad_spots: Vec<String>,
}

fn default_placement() -> PlacementMode {
    PlacementMode::Automatic
}

impl CreateCampaignRequest {
    pub fn validate(&self) -> CreatorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CreatorError::Validation("campaign name is required".into()));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(CreatorError::Validation("budget must be a non-negative amount".into()));
        }
        if self.end_date < self.start_date {
            return Err(CreatorError::Validation("campaign ends before it starts".into()));
        }
        Ok(())
    }
}

/// A content draft from the creator page. A date schedules it on the
/// calendar as well.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentRequest {
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub kind: ContentKind,
    pub platforms: Vec<String>,
    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
    /// `HH:MM:SS`; midnight when only a date is given.
    #[serde(default)]
    pub scheduled_time: Option<NaiveTime>,
    #[serde(default)]
    pub auto_ad_placement: bool,
}

impl CreateContentRequest {
    pub fn validate(&self) -> CreatorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CreatorError::Validation("title is required".into()));
        }
        if self.platforms.iter().all(|p| p.trim().is_empty()) {
            return Err(CreatorError::Validation("select at least one platform".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDraft {
    pub content: ContentItem,
    pub post: Option<ScheduledPost>,
}

// ─── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_request(title: &str, platforms: &[&str]) -> CreateContentRequest {
        CreateContentRequest {
            title: title.to_string(),
            body: String::new(),
            kind: ContentKind::Post,
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            scheduled_date: None,
            scheduled_time: None,
            auto_ad_placement: false,
        }
    }

    #[test]
    fn test_content_validation() {
        assert!(content_request("Launch day", &["instagram"]).validate().is_ok());
        assert!(content_request("  ", &["instagram"]).validate().is_err());
        assert!(content_request("Launch day", &[]).validate().is_err());
    }

    #[test]
    fn test_revenue_period() {
        let none = RevenueQuery::default();
        assert!(none.period().unwrap().is_none());

        let open_end = RevenueQuery {
            from: NaiveDate::from_ymd_opt(2024, 1, 16),
            ..Default::default()
        };
        let (from, to) = open_end.period().unwrap().unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(to, NaiveDate::MAX);

        let inverted = RevenueQuery {
            from: NaiveDate::from_ymd_opt(2024, 2, 1),
            to: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        assert!(inverted.period().is_err());
    }

    #[test]
    fn test_campaign_request_defaults_and_validation() {
        let req: CreateCampaignRequest = serde_json::from_str(
            r#"{"name":"Spring Push","platform":"Meta Ads","kind":"meta_ads","budget":500,
                "start_date":"2024-03-01","end_date":"2024-03-31"}"#,
        )
        .unwrap();
        assert_eq!(req.placement, PlacementMode::Automatic);
        assert!(req.ad_spots.is_empty());
        assert!(req.validate().is_ok());

        let backwards = CreateCampaignRequest {
            end_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            ..req
        };
        assert!(backwards.validate().is_err());
    }
}
