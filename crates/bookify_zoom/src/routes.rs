// --- File: crates/bookify_zoom/src/routes.rs ---

use crate::handlers::{
    book_meeting_handler, list_meetings_handler, method_not_allowed_handler, ZoomState,
};
use axum::{routing::get, Router};
use bookify_common::{create_client, HTTP_CLIENT};
use bookify_config::{AppConfig, ZoomAccount};
use std::sync::Arc;

/// Creates a router containing all routes for the Zoom meetings feature.
///
/// The account list is injected rather than read from the environment here so
/// the caller (and tests) control which credentials are in play.
pub fn routes(config: Arc<AppConfig>, accounts: Vec<ZoomAccount>) -> Router {
    let timeout_secs = config
        .zoom
        .as_ref()
        .map(|zoom| zoom.request_timeout_secs)
        .unwrap_or(30);
    let http_client =
        create_client(timeout_secs).unwrap_or_else(|_| HTTP_CLIENT.clone());

    let zoom_state = Arc::new(ZoomState {
        config,
        accounts: Arc::new(accounts),
        http_client,
    });
    router_with_state(zoom_state)
}

/// Builds the router for a pre-constructed state. Split out so tests can
/// drive the full HTTP surface against a stub vendor.
pub fn router_with_state(state: Arc<ZoomState>) -> Router {
    Router::new()
        .route(
            "/meetings",
            get(list_meetings_handler)
                .post(book_meeting_handler)
                // Any other method gets the fixed 405 payload.
                .fallback(method_not_allowed_handler),
        )
        .with_state(state)
}
