//! Domain records behind the hub pages.
//!
//! Every record is a flat, serde-serializable snapshot. Changes replace the
//! whole record in its store; nothing here enforces references between
//! records.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A flat record that can live in a record store and be filtered by name.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Human-readable kind, used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> Uuid;

    /// Look up a field by its serialized name.
    ///
    /// Returns `None` when the record has no such field.
    fn field(&self, name: &str) -> Option<serde_json::Value> {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(mut map)) => map.remove(name),
            _ => None,
        }
    }
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> Uuid {
                self.id
            }
        }
    };
}

macro_rules! impl_as_str {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ─── Session ───────────────────────────────────────────────────────────────

/// The signed-in user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ─── Ad Manager ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub platform: String,
    pub kind: CampaignKind,
    pub status: CampaignStatus,
    pub budget: f64,
    pub spent: f64,
    pub revenue: f64,
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
    pub cpm: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub placement: PlacementMode,
    #[serde(default)]
    pub ad_spots: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CampaignKind {
    GoogleAdsense,
    MetaAds,
    YoutubeAds,
    Native,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Draft,
    Active,
    Paused,
    Completed,
}

impl_as_str!(CampaignStatus {
    Draft => "draft",
    Active => "active",
    Paused => "paused",
    Completed => "completed",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdPlacement {
    pub id: Uuid,
    pub name: String,
    pub kind: AdPlacementKind,
    pub position: String,
    pub platform: String,
    pub revenue: f64,
    pub impressions: u64,
    pub ctr: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdPlacementKind {
    Banner,
    Video,
    Native,
    Interstitial,
}

// ─── Platform Connections ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformAccount {
    pub id: Uuid,
    pub platform: String,
    pub account_name: String,
    pub username: String,
    pub is_connected: bool,
    pub followers: u64,
    pub engagement: f64,
    pub last_sync: Option<DateTime<Utc>>,
    pub status: ConnectionStatus,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub auto_post: bool,
    pub ad_integration: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Active,
    Error,
    Limited,
    Pending,
}

impl_as_str!(ConnectionStatus {
    Active => "active",
    Error => "error",
    Limited => "limited",
    Pending => "pending",
});

// ─── Publishing Calendar ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub platforms: Vec<String>,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub status: PostStatus,
    pub content_type: String,
    pub estimated_revenue: f64,
    pub ad_placement: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Scheduled,
    Published,
    Failed,
    Draft,
}

impl_as_str!(PostStatus {
    Scheduled => "scheduled",
    Published => "published",
    Failed => "failed",
    Draft => "draft",
});

// ─── Revenue Center ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueStream {
    pub id: Uuid,
    pub source: String,
    pub platform: String,
    pub kind: RevenueKind,
    pub amount: f64,
    /// Period-over-period growth in percent; may be negative.
    pub growth: f64,
    pub last_payout: NaiveDate,
    pub status: StreamStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RevenueKind {
    AdRevenue,
    Sponsorship,
    Affiliate,
    Subscription,
    DirectSales,
}

impl_as_str!(RevenueKind {
    AdRevenue => "ad_revenue",
    Sponsorship => "sponsorship",
    Affiliate => "affiliate",
    Subscription => "subscription",
    DirectSales => "direct_sales",
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StreamStatus {
    Active,
    Pending,
    Paused,
}

impl_as_str!(StreamStatus {
    Active => "active",
    Pending => "pending",
    Paused => "paused",
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub platform: String,
    /// Signed: fees are negative.
    pub amount: f64,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Payout,
    Earning,
    Fee,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl_as_str!(TransactionStatus {
    Completed => "completed",
    Pending => "pending",
    Failed => "failed",
});

// ─── Content ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub title: String,
    pub kind: ContentKind,
    pub platforms: Vec<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub auto_ad_placement: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub impressions: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub engagement: f64,
    #[serde(default)]
    pub revenue: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Post,
    Story,
    Reel,
    Video,
    Blog,
    Carousel,
}

impl_as_str!(ContentKind {
    Post => "post",
    Story => "story",
    Reel => "reel",
    Video => "video",
    Blog => "blog",
    Carousel => "carousel",
});

// ─── Analytics ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformAnalytics {
    pub id: Uuid,
    pub platform: String,
    pub followers: u64,
    pub engagement: f64,
    pub reach: u64,
    pub impressions: u64,
    pub clicks: u64,
    pub shares: u64,
    pub comments: u64,
    pub likes: u64,
    pub revenue: f64,
    pub growth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentPerformance {
    pub id: Uuid,
    pub title: String,
    pub platform: String,
    pub content_type: String,
    pub publish_date: NaiveDate,
    pub views: u64,
    pub engagement: f64,
    pub revenue: f64,
    pub ctr: f64,
}

impl_record!(Campaign, "campaign");
impl_record!(AdPlacement, "ad placement");
impl_record!(PlatformAccount, "platform account");
impl_record!(ScheduledPost, "scheduled post");
impl_record!(RevenueStream, "revenue stream");
impl_record!(Transaction, "transaction");
impl_record!(ContentItem, "content item");
impl_record!(PlatformAnalytics, "platform analytics");
impl_record!(ContentPerformance, "content performance");

// ─── Settings ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSettings {
    pub profile: ProfileSettings,
    pub notifications: NotificationSettings,
    pub privacy: PrivacySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            bio: String::new(),
            website: String::new(),
            location: String::new(),
            timezone: default_timezone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub weekly_reports: bool,
    pub revenue_alerts: bool,
    pub content_reminders: bool,
    pub platform_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            weekly_reports: true,
            revenue_alerts: true,
            content_reminders: false,
            platform_updates: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub profile_visibility: ProfileVisibility,
    pub analytics_sharing: bool,
    pub data_collection: bool,
    pub third_party_integrations: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            profile_visibility: ProfileVisibility::Public,
            analytics_sharing: true,
            data_collection: true,
            third_party_integrations: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileVisibility {
    Public,
    Private,
}
