//! Axum REST handlers for the hub API.

use crate::models::*;
use crate::store::HubStore;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use creator_core::lifecycle::{CampaignAction, PostAction, StreamAction, TransactionAction};
use creator_core::types::*;
use creator_core::CreatorError;
use creator_reporting::calendar::CalendarFilter;
use creator_reporting::DashboardOverview;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

/// Shared hub state.
#[derive(Clone)]
pub struct HubState {
    pub store: Arc<HubStore>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<Json<T>, ApiError>;

fn api_error(err: CreatorError) -> ApiError {
    let (status, code) = match &err {
        CreatorError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        CreatorError::InvalidTransition { .. } => (StatusCode::CONFLICT, "invalid_transition"),
        CreatorError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_failed"),
        CreatorError::Serialization(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };
    if status.is_server_error() {
        error!(error = %err, "Request failed");
    }
    metrics::counter!("hub.api.errors", "code" => code).increment(1);
    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
        }),
    )
}

/// Extractor failure (bad id, query or body), answered as a JSON 400.
#[derive(Debug)]
pub struct ApiRejection {
    message: String,
}

impl ApiRejection {
    fn new(message: String) -> Self {
        Self { message }
    }
}

impl IntoResponse for ApiRejection {
    fn into_response(self) -> Response {
        metrics::counter!("hub.api.errors", "code" => "bad_request").increment(1);
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "bad_request".to_string(),
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<PathRejection> for ApiRejection {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.body_text())
    }
}

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiRejection))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiRejection))]
pub struct ApiQuery<T>(pub T);

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiRejection))]
pub struct ApiJson<T>(pub T);

fn respond<T>(result: creator_core::CreatorResult<T>) -> ApiResult<T> {
    result.map(Json).map_err(api_error)
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ─── Session ───────────────────────────────────────────────────────────────

pub async fn session(State(state): State<HubState>) -> Json<SessionResponse> {
    Json(state.store.session())
}

// ─── Dashboard ─────────────────────────────────────────────────────────────

pub async fn dashboard(State(state): State<HubState>) -> Json<DashboardOverview> {
    metrics::counter!("hub.page_loads", "page" => "dashboard").increment(1);
    Json(state.store.dashboard().await)
}

// ─── Ad Manager ────────────────────────────────────────────────────────────

pub async fn ads_page(State(state): State<HubState>) -> Json<AdsPage> {
    metrics::counter!("hub.page_loads", "page" => "ads").increment(1);
    Json(state.store.ads_page().await)
}

pub async fn create_campaign(
    State(state): State<HubState>,
    ApiJson(req): ApiJson<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), ApiError> {
    let campaign = state.store.create_campaign(req).await.map_err(api_error)?;
    metrics::counter!("hub.campaigns.created").increment(1);
    Ok((StatusCode::CREATED, Json(campaign)))
}

pub async fn toggle_campaign(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Campaign> {
    respond(state.store.toggle_campaign(id).await)
}

pub async fn transition_campaign(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<TransitionRequest<CampaignAction>>,
) -> ApiResult<Campaign> {
    respond(state.store.transition_campaign(id, req.action).await)
}

pub async fn delete_campaign(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_campaign(id).await.map_err(api_error)?;
    metrics::counter!("hub.campaigns.deleted").increment(1);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_placement(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<AdPlacement> {
    respond(state.store.toggle_placement(id).await)
}

// ─── Analytics ─────────────────────────────────────────────────────────────

pub async fn analytics_page(
    State(state): State<HubState>,
    ApiQuery(query): ApiQuery<AnalyticsQuery>,
) -> Json<AnalyticsPage> {
    metrics::counter!("hub.page_loads", "page" => "analytics").increment(1);
    Json(state.store.analytics_page(query.platform.as_deref()).await)
}

// ─── Revenue Center ────────────────────────────────────────────────────────

pub async fn revenue_page(
    State(state): State<HubState>,
    ApiQuery(query): ApiQuery<RevenueQuery>,
) -> ApiResult<RevenuePage> {
    metrics::counter!("hub.page_loads", "page" => "revenue").increment(1);
    let period = query.period().map_err(api_error)?;
    let page = state
        .store
        .revenue_page(query.platform.as_deref(), query.status.as_deref(), period)
        .await;
    Ok(Json(page))
}

pub async fn transition_stream(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<TransitionRequest<StreamAction>>,
) -> ApiResult<RevenueStream> {
    respond(state.store.transition_stream(id, req.action).await)
}

pub async fn transition_transaction(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<TransitionRequest<TransactionAction>>,
) -> ApiResult<Transaction> {
    respond(state.store.transition_transaction(id, req.action).await)
}

// ─── Platform Connections ──────────────────────────────────────────────────

pub async fn platforms_page(State(state): State<HubState>) -> Json<PlatformsPage> {
    metrics::counter!("hub.page_loads", "page" => "platforms").increment(1);
    Json(state.store.platforms_page().await)
}

pub async fn connect_account(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<PlatformAccount> {
    respond(state.store.connect_account(id).await)
}

pub async fn disconnect_account(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<PlatformAccount> {
    respond(state.store.disconnect_account(id).await)
}

pub async fn toggle_auto_post(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<PlatformAccount> {
    respond(state.store.toggle_auto_post(id).await)
}

pub async fn toggle_ad_integration(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<PlatformAccount> {
    respond(state.store.toggle_ad_integration(id).await)
}

// ─── Publishing Calendar ───────────────────────────────────────────────────

pub async fn calendar_page(
    State(state): State<HubState>,
    ApiQuery(filter): ApiQuery<CalendarFilter>,
) -> Json<CalendarPage> {
    metrics::counter!("hub.page_loads", "page" => "calendar").increment(1);
    Json(state.store.calendar_page(&filter).await)
}

pub async fn transition_post(
    State(state): State<HubState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<TransitionRequest<PostAction>>,
) -> ApiResult<ScheduledPost> {
    respond(state.store.transition_post(id, req.action).await)
}

// ─── Content Creator ───────────────────────────────────────────────────────

pub async fn create_content(
    State(state): State<HubState>,
    ApiJson(req): ApiJson<CreateContentRequest>,
) -> Result<(StatusCode, Json<ContentDraft>), ApiError> {
    let draft = state.store.create_content(req).await.map_err(api_error)?;
    metrics::counter!("hub.content.created").increment(1);
    Ok((StatusCode::CREATED, Json(draft)))
}

// ─── Settings ──────────────────────────────────────────────────────────────

pub async fn get_settings(State(state): State<HubState>) -> Json<UserSettings> {
    Json(state.store.settings())
}

pub async fn update_settings(
    State(state): State<HubState>,
    ApiJson(settings): ApiJson<UserSettings>,
) -> Json<UserSettings> {
    Json(state.store.update_settings(settings))
}
