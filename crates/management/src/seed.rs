//! Demo records loaded into the in-memory repositories on startup.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use creator_core::types::*;
use creator_core::{CreatorError, CreatorResult};
use tracing::info;
use uuid::Uuid;

/// One snapshot of every record kind the hub pages read.
#[derive(Debug, Clone, Default)]
pub struct DemoData {
    pub campaigns: Vec<Campaign>,
    pub placements: Vec<AdPlacement>,
    pub accounts: Vec<PlatformAccount>,
    pub posts: Vec<ScheduledPost>,
    pub streams: Vec<RevenueStream>,
    pub transactions: Vec<Transaction>,
    pub content: Vec<ContentItem>,
    pub analytics: Vec<PlatformAnalytics>,
    pub performance: Vec<ContentPerformance>,
    pub settings: UserSettings,
}

fn date(s: &str) -> CreatorResult<NaiveDate> {
    s.parse()
        .map_err(|e| CreatorError::Validation(format!("invalid seed date {}: {}", s, e)))
}

fn time(s: &str) -> CreatorResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|e| CreatorError::Validation(format!("invalid seed time {}: {}", s, e)))
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_data(owner_name: &str, owner_email: &str) -> CreatorResult<DemoData> {
    let data = DemoData {
        campaigns: campaigns()?,
        placements: placements(),
        accounts: accounts(),
        posts: posts()?,
        streams: streams()?,
        transactions: transactions()?,
        content: content(),
        analytics: analytics(),
        performance: performance()?,
        settings: UserSettings {
            profile: ProfileSettings {
                name: owner_name.to_string(),
                email: owner_email.to_string(),
                timezone: "UTC".to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
    };
    info!(
        campaigns = data.campaigns.len(),
        accounts = data.accounts.len(),
        posts = data.posts.len(),
        transactions = data.transactions.len(),
        "Demo data prepared"
    );
    Ok(data)
}

// ─── Ad Manager ────────────────────────────────────────────────────────────

fn campaigns() -> CreatorResult<Vec<Campaign>> {
    #[allow(clippy::type_complexity)]
    let rows: [(&str, &str, CampaignKind, CampaignStatus, f64, f64, f64, u64, u64, f64, &str, &str, PlacementMode, &[&str]); 3] = [
        ("Fashion Content Monetization", "Google AdSense", CampaignKind::GoogleAdsense, CampaignStatus::Active,
            1000.0, 650.0, 1250.0, 125_000, 2_500, 5.20, "2024-01-01", "2024-01-31", PlacementMode::Automatic,
            &["header", "sidebar", "in-content"]),
        ("Instagram Story Ads", "Meta Ads", CampaignKind::MetaAds, CampaignStatus::Active,
            800.0, 420.0, 890.0, 89_000, 1_780, 4.70, "2024-01-15", "2024-02-15", PlacementMode::Manual,
            &["story-break", "post-end"]),
        ("YouTube Pre-roll Campaign", "YouTube", CampaignKind::YoutubeAds, CampaignStatus::Paused,
            1200.0, 800.0, 1600.0, 200_000, 4_000, 4.00, "2024-01-10", "2024-02-10", PlacementMode::Automatic,
            &["pre-roll", "mid-roll"]),
    ];

    rows.into_iter()
        .map(|(name, platform, kind, status, budget, spent, revenue, impressions, clicks, cpm, start, end, placement, spots)| -> CreatorResult<Campaign> {
            Ok(Campaign {
                id: Uuid::new_v4(),
                name: name.to_string(),
                platform: platform.to_string(),
                kind,
                status,
                budget,
                spent,
                revenue,
                impressions,
                clicks,
                ctr: 2.0,
                cpm,
                start_date: date(start)?,
                end_date: date(end)?,
                placement,
                ad_spots: strings(spots),
            })
        })
        .collect()
}

fn placements() -> Vec<AdPlacement> {
    [
        ("Header Banner", AdPlacementKind::Banner, "Top of page", "WordPress", 450.20, 45_000, 1.8, true),
        ("Story Ad Break", AdPlacementKind::Video, "Between stories", "Instagram", 320.50, 32_000, 2.2, true),
        ("In-Feed Native", AdPlacementKind::Native, "Feed integration", "Facebook", 280.80, 28_000, 1.9, false),
    ]
    .into_iter()
    .map(|(name, kind, position, platform, revenue, impressions, ctr, is_active)| AdPlacement {
        id: Uuid::new_v4(),
        name: name.to_string(),
        kind,
        position: position.to_string(),
        platform: platform.to_string(),
        revenue,
        impressions,
        ctr,
        is_active,
    })
    .collect()
}

// ─── Platform Connections ──────────────────────────────────────────────────

fn accounts() -> Vec<PlatformAccount> {
    let now = Utc::now();
    #[allow(clippy::type_complexity)]
    let rows: [(&str, &str, &str, bool, u64, f64, Option<i64>, ConnectionStatus, &[&str], bool, bool); 5] = [
        ("Instagram", "My Fashion Brand", "@myfashionbrand", true, 125_000, 4.2, Some(2),
            ConnectionStatus::Active, &["publish_posts", "read_insights", "manage_comments"], true, true),
        ("Facebook", "Fashion Brand Page", "Fashion Brand", true, 89_000, 3.8, Some(5),
            ConnectionStatus::Active, &["publish_posts", "read_insights", "manage_ads"], true, true),
        ("YouTube", "Fashion Tutorials", "Fashion Tutorials", true, 45_000, 6.1, Some(60),
            ConnectionStatus::Limited, &["upload_videos", "read_analytics"], false, true),
        ("TikTok", "Fashion Tips", "@fashiontips2024", false, 0, 0.0, None,
            ConnectionStatus::Pending, &[], false, false),
        ("WordPress", "Fashion Blog", "fashionblog.com", true, 15_000, 2.5, Some(30),
            ConnectionStatus::Error, &["publish_posts", "manage_media"], true, true),
    ];

    rows.into_iter()
        .map(|(platform, account_name, username, is_connected, followers, engagement, synced_minutes_ago, status, permissions, auto_post, ad_integration)| {
            PlatformAccount {
                id: Uuid::new_v4(),
                platform: platform.to_string(),
                account_name: account_name.to_string(),
                username: username.to_string(),
                is_connected,
                followers,
                engagement,
                last_sync: synced_minutes_ago.map(|m| now - Duration::minutes(m)),
                status,
                permissions: strings(permissions),
                auto_post,
                ad_integration,
            }
        })
        .collect()
}

// ─── Publishing Calendar ───────────────────────────────────────────────────

fn posts() -> CreatorResult<Vec<ScheduledPost>> {
    #[allow(clippy::type_complexity)]
    let rows: [(&str, &str, &[&str], &str, &str, PostStatus, &str, f64, &str); 3] = [
        ("Summer Fashion Trends 2024", "Discover the hottest fashion trends this summer...",
            &["Instagram", "Facebook", "TikTok"], "2024-01-25", "14:00", PostStatus::Scheduled, "Post", 45.20, "Automatic"),
        ("Tech Review: Latest Smartphone", "In-depth review of the newest smartphone features...",
            &["YouTube", "WordPress"], "2024-01-26", "10:30", PostStatus::Scheduled, "Blog Article", 120.50, "Manual"),
        ("Quick Cooking Tips", "Learn these amazing cooking hacks...",
            &["Instagram", "TikTok"], "2024-01-24", "18:00", PostStatus::Published, "Reel", 32.80, "Automatic"),
    ];

    rows.into_iter()
        .map(|(title, content, platforms, day, at, status, content_type, estimated_revenue, ad_placement)| -> CreatorResult<ScheduledPost> {
            Ok(ScheduledPost {
                id: Uuid::new_v4(),
                title: title.to_string(),
                content: content.to_string(),
                platforms: strings(platforms),
                scheduled_date: date(day)?,
                scheduled_time: time(at)?,
                status,
                content_type: content_type.to_string(),
                estimated_revenue,
                ad_placement: ad_placement.to_string(),
            })
        })
        .collect()
}

// ─── Revenue Center ────────────────────────────────────────────────────────

fn streams() -> CreatorResult<Vec<RevenueStream>> {
    [
        ("Google AdSense", "WordPress", RevenueKind::AdRevenue, 1250.50, 15.2, "2024-01-15", StreamStatus::Active),
        ("Meta Ads", "Instagram", RevenueKind::AdRevenue, 890.20, 8.7, "2024-01-20", StreamStatus::Active),
        ("YouTube Partner Program", "YouTube", RevenueKind::AdRevenue, 2100.80, 22.1, "2024-01-18", StreamStatus::Active),
        ("Brand Sponsorship", "TikTok", RevenueKind::Sponsorship, 1500.00, -5.3, "2024-01-10", StreamStatus::Pending),
        ("Affiliate Marketing", "All Platforms", RevenueKind::Affiliate, 650.30, 12.8, "2024-01-22", StreamStatus::Active),
    ]
    .into_iter()
    .map(|(source, platform, kind, amount, growth, last_payout, status)| -> CreatorResult<RevenueStream> {
        Ok(RevenueStream {
            id: Uuid::new_v4(),
            source: source.to_string(),
            platform: platform.to_string(),
            kind,
            amount,
            growth,
            last_payout: date(last_payout)?,
            status,
        })
    })
    .collect()
}

fn transactions() -> CreatorResult<Vec<Transaction>> {
    [
        ("2024-01-22", "YouTube Ad Revenue", "YouTube", 450.20, TransactionKind::Earning, TransactionStatus::Completed),
        ("2024-01-20", "Meta Ads Payout", "Instagram", 890.20, TransactionKind::Payout, TransactionStatus::Completed),
        ("2024-01-18", "Platform Fee", "All", -25.00, TransactionKind::Fee, TransactionStatus::Completed),
        ("2024-01-15", "Google AdSense", "WordPress", 1250.50, TransactionKind::Payout, TransactionStatus::Pending),
    ]
    .into_iter()
    .map(|(day, description, platform, amount, kind, status)| -> CreatorResult<Transaction> {
        Ok(Transaction {
            id: Uuid::new_v4(),
            date: date(day)?,
            description: description.to_string(),
            platform: platform.to_string(),
            amount,
            kind,
            status,
        })
    })
    .collect()
}

// ─── Content & Analytics ───────────────────────────────────────────────────

fn content() -> Vec<ContentItem> {
    let now = Utc::now();
    #[allow(clippy::type_complexity)]
    let rows: [(&str, ContentKind, &[&str], PostStatus, u64, f64, f64, i64); 3] = [
        ("Summer Fashion Trends 2024", ContentKind::Post, &["instagram", "facebook"], PostStatus::Published, 12_500, 8.4, 45.20, 48),
        ("Tech Review: Latest Smartphone", ContentKind::Video, &["youtube", "tiktok"], PostStatus::Scheduled, 0, 0.0, 0.0, 2),
        ("Productivity Tips for Creators", ContentKind::Blog, &["wordpress"], PostStatus::Published, 3_200, 12.1, 28.50, 96),
    ];

    rows.into_iter()
        .map(|(title, kind, platforms, status, views, engagement, revenue, age_hours)| ContentItem {
            id: Uuid::new_v4(),
            title: title.to_string(),
            kind,
            platforms: strings(platforms),
            status,
            body: String::new(),
            auto_ad_placement: false,
            views,
            impressions: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            engagement,
            revenue,
            created_at: now - Duration::hours(age_hours),
        })
        .collect()
}

fn analytics() -> Vec<PlatformAnalytics> {
    [
        ("Instagram", 125_000, 4.2, 89_000, 156_000, 3_200, 890, 1_200, 8_900, 1250.50, 12.5),
        ("Facebook", 89_000, 3.8, 67_000, 134_000, 2_800, 650, 890, 6_700, 980.20, 8.3),
        ("YouTube", 45_000, 6.1, 78_000, 234_000, 4_500, 1_200, 2_100, 12_000, 2100.80, 15.2),
        ("TikTok", 67_000, 7.8, 123_000, 345_000, 6_700, 2_300, 3_400, 18_900, 890.30, 22.1),
        ("WordPress", 15_000, 2.5, 12_000, 45_000, 1_200, 180, 340, 890, 450.60, 5.8),
    ]
    .into_iter()
    .map(|(platform, followers, engagement, reach, impressions, clicks, shares, comments, likes, revenue, growth)| {
        PlatformAnalytics {
            id: Uuid::new_v4(),
            platform: platform.to_string(),
            followers,
            engagement,
            reach,
            impressions,
            clicks,
            shares,
            comments,
            likes,
            revenue,
            growth,
        }
    })
    .collect()
}

fn performance() -> CreatorResult<Vec<ContentPerformance>> {
    [
        ("Summer Fashion Trends 2024", "Instagram", "Post", "2024-01-20", 45_000, 5.2, 180.50, 3.2),
        ("Tech Review: Latest Smartphone", "YouTube", "Video", "2024-01-18", 89_000, 7.8, 450.20, 4.1),
        ("Quick Cooking Tips", "TikTok", "Video", "2024-01-22", 123_000, 9.1, 320.80, 5.6),
    ]
    .into_iter()
    .map(|(title, platform, content_type, publish_date, views, engagement, revenue, ctr)| -> CreatorResult<ContentPerformance> {
        Ok(ContentPerformance {
            id: Uuid::new_v4(),
            title: title.to_string(),
            platform: platform.to_string(),
            content_type: content_type.to_string(),
            publish_date: date(publish_date)?,
            views,
            engagement,
            revenue,
            ctr,
        })
    })
    .collect()
}
