//! Hub page store.
//!
//! Every page load asks the repositories for its records once, then derives
//! the page's summary with the reporting aggregators. A failing repository
//! never fails a page: the error is logged and the page renders from an empty
//! record set, so its numbers degrade to zero.

use crate::models::*;
use crate::repository::{InMemoryRepository, ListQuery, Repository};
use crate::seed::DemoData;
use crate::session::SessionContext;
use chrono::{NaiveDate, Utc};
use creator_core::lifecycle::{
    CampaignAction, ConnectionAction, PostAction, StreamAction, TransactionAction,
};
use creator_core::types::*;
use creator_core::{CreatorResult, Lifecycle, Record};
use creator_reporting::calendar::CalendarFilter;
use creator_reporting::dashboard::DashboardInputs;
use creator_reporting::{ads, analytics, calendar, dashboard, platforms, revenue};
use creator_reporting::{DashboardOverview, SortDirection, WILDCARD};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// How many content items the analytics page ranks.
const TOP_CONTENT_LIMIT: usize = 5;

/// One repository per record kind.
#[derive(Clone)]
pub struct Repositories {
    pub campaigns: Arc<dyn Repository<Campaign>>,
    pub placements: Arc<dyn Repository<AdPlacement>>,
    pub accounts: Arc<dyn Repository<PlatformAccount>>,
    pub posts: Arc<dyn Repository<ScheduledPost>>,
    pub streams: Arc<dyn Repository<RevenueStream>>,
    pub transactions: Arc<dyn Repository<Transaction>>,
    pub content: Arc<dyn Repository<ContentItem>>,
    pub analytics: Arc<dyn Repository<PlatformAnalytics>>,
    pub performance: Arc<dyn Repository<ContentPerformance>>,
}

impl Repositories {
    /// In-memory repositories holding `data`.
    pub fn in_memory(data: DemoData) -> Self {
        Self {
            campaigns: Arc::new(InMemoryRepository::with_records(data.campaigns)),
            placements: Arc::new(InMemoryRepository::with_records(data.placements)),
            accounts: Arc::new(InMemoryRepository::with_records(data.accounts)),
            posts: Arc::new(InMemoryRepository::with_records(data.posts)),
            streams: Arc::new(InMemoryRepository::with_records(data.streams)),
            transactions: Arc::new(InMemoryRepository::with_records(data.transactions)),
            content: Arc::new(InMemoryRepository::with_records(data.content)),
            analytics: Arc::new(InMemoryRepository::with_records(data.analytics)),
            performance: Arc::new(InMemoryRepository::with_records(data.performance)),
        }
    }

    pub fn empty() -> Self {
        Self::in_memory(DemoData::default())
    }
}

/// Load a page's record set, masking provider failures as an empty set.
async fn load<R: Record>(repo: &dyn Repository<R>, query: &ListQuery) -> Vec<R> {
    match repo.list(query).await {
        Ok(records) => records,
        Err(e) => {
            warn!(kind = R::KIND, error = %e, "Record load failed, rendering empty");
            metrics::counter!("hub.load_failures").increment(1);
            Vec::new()
        }
    }
}

pub struct HubStore {
    repos: Repositories,
    settings: RwLock<UserSettings>,
    session: Arc<SessionContext>,
    recent_content_limit: usize,
}

impl HubStore {
    pub fn new(
        repos: Repositories,
        settings: UserSettings,
        session: Arc<SessionContext>,
        recent_content_limit: usize,
    ) -> Self {
        info!(recent_content_limit, "Hub store initialized");
        Self {
            repos,
            settings: RwLock::new(settings),
            session,
            recent_content_limit,
        }
    }

    pub fn session(&self) -> SessionResponse {
        let state = self.session.state();
        SessionResponse {
            is_authenticated: state.is_authenticated(),
            is_loading: state.is_loading,
            user: state.user,
        }
    }

    // ─── Dashboard ─────────────────────────────────────────────────────────

    pub async fn dashboard(&self) -> DashboardOverview {
        let all = ListQuery::new();
        let transactions = load(self.repos.transactions.as_ref(), &all).await;
        let streams = load(self.repos.streams.as_ref(), &all).await;
        let content = load(self.repos.content.as_ref(), &all).await;
        let accounts = load(self.repos.accounts.as_ref(), &all).await;

        dashboard::overview(DashboardInputs {
            transactions: &transactions,
            streams: &streams,
            content: &content,
            accounts: &accounts,
            recent_limit: self.recent_content_limit,
        })
    }

    // ─── Ad Manager ────────────────────────────────────────────────────────

    pub async fn ads_page(&self) -> AdsPage {
        let all = ListQuery::new();
        let campaigns = load(self.repos.campaigns.as_ref(), &all).await;
        let placements = load(self.repos.placements.as_ref(), &all).await;
        let summary = ads::summarize(&campaigns, &placements);
        AdsPage {
            campaigns,
            placements,
            summary,
        }
    }

    pub async fn create_campaign(&self, req: CreateCampaignRequest) -> CreatorResult<Campaign> {
        req.validate()?;
        let campaign = Campaign {
            id: Uuid::new_v4(),
            name: req.name,
            platform: req.platform,
            kind: req.kind,
            status: CampaignStatus::Draft,
            budget: req.budget,
            spent: 0.0,
            revenue: 0.0,
            impressions: 0,
            clicks: 0,
            ctr: 0.0,
            cpm: 0.0,
            start_date: req.start_date,
            end_date: req.end_date,
            placement: req.placement,
            ad_spots: req.ad_spots,
        };
        let campaign = self.repos.campaigns.create(campaign).await?;
        info!(campaign_id = %campaign.id, name = %campaign.name, "Campaign created");
        Ok(campaign)
    }

    pub async fn transition_campaign(&self, id: Uuid, action: CampaignAction) -> CreatorResult<Campaign> {
        let campaign = self
            .repos
            .campaigns
            .modify(
                id,
                Box::new(move |c: &mut Campaign| {
                    c.status = c.status.apply(action)?;
                    Ok(())
                }),
            )
            .await?;
        info!(campaign_id = %id, ?action, to = %campaign.status, "Campaign transitioned");
        Ok(campaign)
    }

    /// Play/pause switch: pauses an active campaign, resumes a paused one.
    pub async fn toggle_campaign(&self, id: Uuid) -> CreatorResult<Campaign> {
        let campaign = self
            .repos
            .campaigns
            .modify(
                id,
                Box::new(|c: &mut Campaign| {
                    c.status = c.status.apply(c.status.toggle_action()?)?;
                    Ok(())
                }),
            )
            .await?;
        info!(campaign_id = %id, to = %campaign.status, "Campaign toggled");
        Ok(campaign)
    }

    pub async fn delete_campaign(&self, id: Uuid) -> CreatorResult<()> {
        self.repos.campaigns.delete(id).await?;
        info!(campaign_id = %id, "Campaign deleted");
        Ok(())
    }

    pub async fn toggle_placement(&self, id: Uuid) -> CreatorResult<AdPlacement> {
        let placement = self
            .repos
            .placements
            .modify(
                id,
                Box::new(|p: &mut AdPlacement| {
                    p.is_active = !p.is_active;
                    Ok(())
                }),
            )
            .await?;
        info!(placement_id = %id, is_active = placement.is_active, "Placement toggled");
        Ok(placement)
    }

    // ─── Analytics ─────────────────────────────────────────────────────────

    /// Analytics rows for `platform` (`None` or `"all"` for every platform).
    /// Cards and ranking summarize the rows shown.
    pub async fn analytics_page(&self, platform: Option<&str>) -> AnalyticsPage {
        let query = ListQuery::new().where_token("platform", platform);
        let rows = load(self.repos.analytics.as_ref(), &query).await;
        let performance = load(self.repos.performance.as_ref(), &ListQuery::new()).await;
        AnalyticsPage {
            platform: platform.unwrap_or(WILDCARD).to_string(),
            summary: analytics::summarize(&rows),
            top_content: analytics::top_content(&performance, TOP_CONTENT_LIMIT),
            rows,
        }
    }

    // ─── Revenue Center ────────────────────────────────────────────────────

    pub async fn revenue_page(
        &self,
        platform: Option<&str>,
        status: Option<&str>,
        period: Option<(NaiveDate, NaiveDate)>,
    ) -> RevenuePage {
        let stream_query = ListQuery::new().where_token("platform", platform);
        let tx_query = ListQuery::new()
            .where_token("platform", platform)
            .where_token("status", status)
            .order_by("date", SortDirection::Desc);

        let streams = load(self.repos.streams.as_ref(), &stream_query).await;
        let transactions = load(self.repos.transactions.as_ref(), &tx_query).await;
        let summary = revenue::summarize(&streams, &transactions, period);
        RevenuePage {
            streams,
            transactions,
            summary,
        }
    }

    pub async fn transition_stream(&self, id: Uuid, action: StreamAction) -> CreatorResult<RevenueStream> {
        let stream = self
            .repos
            .streams
            .modify(
                id,
                Box::new(move |s: &mut RevenueStream| {
                    s.status = s.status.apply(action)?;
                    Ok(())
                }),
            )
            .await?;
        info!(stream_id = %id, ?action, to = %stream.status, "Revenue stream transitioned");
        Ok(stream)
    }

    pub async fn transition_transaction(
        &self,
        id: Uuid,
        action: TransactionAction,
    ) -> CreatorResult<Transaction> {
        let tx = self
            .repos
            .transactions
            .modify(
                id,
                Box::new(move |t: &mut Transaction| {
                    t.status = t.status.apply(action)?;
                    Ok(())
                }),
            )
            .await?;
        info!(transaction_id = %id, ?action, to = %tx.status, "Transaction transitioned");
        Ok(tx)
    }

    // ─── Platform Connections ──────────────────────────────────────────────

    pub async fn platforms_page(&self) -> PlatformsPage {
        let accounts = load(self.repos.accounts.as_ref(), &ListQuery::new()).await;
        PlatformsPage {
            summary: platforms::summarize(&accounts),
            accounts,
        }
    }

    /// Mark the account connected and synced now. A pending account becomes
    /// active; limited or erroring accounts keep their status.
    pub async fn connect_account(&self, id: Uuid) -> CreatorResult<PlatformAccount> {
        let account = self
            .repos
            .accounts
            .modify(
                id,
                Box::new(|a: &mut PlatformAccount| {
                    if a.status == ConnectionStatus::Pending {
                        a.status = a.status.apply(ConnectionAction::Activate)?;
                    }
                    a.is_connected = true;
                    a.last_sync = Some(Utc::now());
                    Ok(())
                }),
            )
            .await?;
        info!(account_id = %id, platform = %account.platform, "Platform connected");
        Ok(account)
    }

    pub async fn disconnect_account(&self, id: Uuid) -> CreatorResult<PlatformAccount> {
        let account = self
            .repos
            .accounts
            .modify(
                id,
                Box::new(|a: &mut PlatformAccount| {
                    a.status = a.status.apply(ConnectionAction::Reset)?;
                    a.is_connected = false;
                    Ok(())
                }),
            )
            .await?;
        info!(account_id = %id, platform = %account.platform, "Platform disconnected");
        Ok(account)
    }

    pub async fn toggle_auto_post(&self, id: Uuid) -> CreatorResult<PlatformAccount> {
        self.repos
            .accounts
            .modify(
                id,
                Box::new(|a: &mut PlatformAccount| {
                    a.auto_post = !a.auto_post;
                    Ok(())
                }),
            )
            .await
    }

    pub async fn toggle_ad_integration(&self, id: Uuid) -> CreatorResult<PlatformAccount> {
        self.repos
            .accounts
            .modify(
                id,
                Box::new(|a: &mut PlatformAccount| {
                    a.ad_integration = !a.ad_integration;
                    Ok(())
                }),
            )
            .await
    }

    // ─── Publishing Calendar ───────────────────────────────────────────────

    /// Posts matching `filter`; counts cover the filtered posts.
    pub async fn calendar_page(&self, filter: &CalendarFilter) -> CalendarPage {
        let posts = load(self.repos.posts.as_ref(), &ListQuery::new()).await;
        let posts = filter.view().apply(&posts);
        CalendarPage {
            summary: calendar::summarize(&posts),
            posts,
        }
    }

    pub async fn transition_post(&self, id: Uuid, action: PostAction) -> CreatorResult<ScheduledPost> {
        let post = self
            .repos
            .posts
            .modify(
                id,
                Box::new(move |p: &mut ScheduledPost| {
                    p.status = p.status.apply(action)?;
                    Ok(())
                }),
            )
            .await?;
        info!(post_id = %id, ?action, to = %post.status, "Post transitioned");
        Ok(post)
    }

    // ─── Content Creator ───────────────────────────────────────────────────

    /// Save a draft. With a date, it is also put on the calendar and both
    /// records are marked scheduled.
    pub async fn create_content(&self, req: CreateContentRequest) -> CreatorResult<ContentDraft> {
        req.validate()?;
        let platforms: Vec<String> = req
            .platforms
            .into_iter()
            .filter(|p| !p.trim().is_empty())
            .collect();

        let mut content = ContentItem {
            id: Uuid::new_v4(),
            title: req.title,
            kind: req.kind,
            platforms,
            status: PostStatus::Draft,
            body: req.body,
            auto_ad_placement: req.auto_ad_placement,
            views: 0,
            impressions: 0,
            likes: 0,
            comments: 0,
            shares: 0,
            engagement: 0.0,
            revenue: 0.0,
            created_at: Utc::now(),
        };

        let post = match req.scheduled_date {
            Some(date) => {
                content.status = content.status.apply(PostAction::Schedule)?;
                let ad_placement = if content.auto_ad_placement { "Automatic" } else { "None" };
                let post = ScheduledPost {
                    id: Uuid::new_v4(),
                    title: content.title.clone(),
                    content: content.body.clone(),
                    platforms: content.platforms.clone(),
                    scheduled_date: date,
                    scheduled_time: req.scheduled_time.unwrap_or_default(),
                    status: content.status,
                    content_type: content.kind.to_string(),
                    estimated_revenue: 0.0,
                    ad_placement: ad_placement.to_string(),
                };
                Some(post)
            }
            None => None,
        };

        let content = self.repos.content.create(content).await?;
        let post = match post {
            Some(post) => match self.repos.posts.create(post).await {
                Ok(post) => Some(post),
                Err(e) => {
                    if let Err(cleanup) = self.repos.content.delete(content.id).await {
                        warn!(content_id = %content.id, error = %cleanup, "Draft rollback failed");
                    }
                    return Err(e);
                }
            },
            None => None,
        };
        info!(
            content_id = %content.id,
            kind = %content.kind,
            scheduled = post.is_some(),
            "Content draft saved"
        );
        Ok(ContentDraft { content, post })
    }

    // ─── Settings ──────────────────────────────────────────────────────────

    pub fn settings(&self) -> UserSettings {
        self.settings.read().clone()
    }

    pub fn update_settings(&self, settings: UserSettings) -> UserSettings {
        *self.settings.write() = settings.clone();
        info!("Settings updated");
        settings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
