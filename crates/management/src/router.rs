//! Hub API router; mounts every page endpoint under /api/v1.

use crate::handlers::{self, HubState};
use crate::store::HubStore;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;

/// Build the hub router around `store`.
pub fn hub_router(store: Arc<HubStore>) -> Router {
    let state = HubState { store };

    Router::new()
        .route("/health", get(handlers::health))
        // Session & dashboard
        .route("/api/v1/session", get(handlers::session))
        .route("/api/v1/dashboard", get(handlers::dashboard))
        // Ad manager
        .route("/api/v1/ads", get(handlers::ads_page))
        .route("/api/v1/ads/campaigns", post(handlers::create_campaign))
        .route("/api/v1/ads/campaigns/:id", delete(handlers::delete_campaign))
        .route("/api/v1/ads/campaigns/:id/toggle", post(handlers::toggle_campaign))
        .route("/api/v1/ads/campaigns/:id/transition", post(handlers::transition_campaign))
        .route("/api/v1/ads/placements/:id/toggle", post(handlers::toggle_placement))
        // Analytics
        .route("/api/v1/analytics", get(handlers::analytics_page))
        // Revenue
        .route("/api/v1/revenue", get(handlers::revenue_page))
        .route("/api/v1/revenue/streams/:id/transition", post(handlers::transition_stream))
        .route("/api/v1/revenue/transactions/:id/transition", post(handlers::transition_transaction))
        // Platforms
        .route("/api/v1/platforms", get(handlers::platforms_page))
        .route("/api/v1/platforms/:id/connect", post(handlers::connect_account))
        .route("/api/v1/platforms/:id/disconnect", post(handlers::disconnect_account))
        .route("/api/v1/platforms/:id/auto-post", post(handlers::toggle_auto_post))
        .route("/api/v1/platforms/:id/ad-integration", post(handlers::toggle_ad_integration))
        // Calendar
        .route("/api/v1/calendar", get(handlers::calendar_page))
        .route("/api/v1/calendar/posts/:id/transition", post(handlers::transition_post))
        // Content & settings
        .route("/api/v1/content", post(handlers::create_content))
        .route("/api/v1/settings", get(handlers::get_settings).put(handlers::update_settings))
        .with_state(state)
}
