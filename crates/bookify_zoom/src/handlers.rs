// --- File: crates/bookify_zoom/src/handlers.rs ---
use crate::error::ZoomError;
use crate::logic::{
    book_meeting_first_account, list_meetings_all_accounts, CreateMeetingRequest, MeetingRecord,
};
use axum::{extract::State, http::StatusCode, response::Json};
use bookify_common::HttpStatusCode;
use bookify_config::{AppConfig, ZoomAccount, ZoomConfig};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// Define shared state needed by Zoom handlers
#[derive(Clone)]
pub struct ZoomState {
    pub config: Arc<AppConfig>,
    /// Static account list, built once at startup and injected here so tests
    /// can substitute stub accounts and a stub vendor base URL.
    pub accounts: Arc<Vec<ZoomAccount>>,
    pub http_client: reqwest::Client,
}

impl ZoomState {
    fn zoom_config(&self) -> Result<&ZoomConfig, ZoomError> {
        self.config.zoom.as_ref().ok_or(ZoomError::ConfigError)
    }
}

/// Error body of the list endpoint.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ListMeetingsError {
    pub error: String,
}

/// Success body of the booking endpoint. `meeting` is the vendor's raw
/// creation payload, passed through unchanged.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub meeting: serde_json::Value,
}

/// Failure body shared by the booking endpoint and the 405 fallback.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ApiFailure {
    pub success: bool,
    pub message: String,
}

impl ApiFailure {
    fn new(message: impl Into<String>) -> Self {
        ApiFailure {
            success: false,
            message: message.into(),
        }
    }
}

/// Handler for `GET /meetings`: the aggregate list across all configured
/// sub-accounts. All-or-nothing: any account failure yields a 500 with no
/// partial list.
#[axum::debug_handler]
pub async fn list_meetings_handler(
    State(state): State<Arc<ZoomState>>,
) -> Result<Json<Vec<MeetingRecord>>, (StatusCode, Json<ListMeetingsError>)> {
    let result = match state.zoom_config() {
        Ok(zoom_config) => {
            list_meetings_all_accounts(&state.http_client, zoom_config, &state.accounts).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(meetings) => Ok(Json(meetings)),
        Err(e) => {
            error!("Error aggregating meetings: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ListMeetingsError {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// Handler for `POST /meetings`: books one meeting on the first configured
/// sub-account and passes the vendor confirmation through.
#[axum::debug_handler]
pub async fn book_meeting_handler(
    State(state): State<Arc<ZoomState>>,
    Json(payload): Json<CreateMeetingRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, Json<ApiFailure>)> {
    let result = match state.zoom_config() {
        Ok(zoom_config) => {
            book_meeting_first_account(&state.http_client, zoom_config, &state.accounts, &payload)
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(meeting) => Ok(Json(BookingResponse {
            success: true,
            meeting,
        })),
        Err(e) => {
            error!("Error creating meeting: {e}");
            let status = StatusCode::from_u16(e.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Err((status, Json(ApiFailure::new(e.to_string()))))
        }
    }
}

/// Fallback for any other HTTP method on the meetings resource.
pub async fn method_not_allowed_handler() -> (StatusCode, Json<ApiFailure>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiFailure::new("Method Not Allowed")),
    )
}
