// --- File: crates/bookify_zoom/src/logic.rs ---
//! Meeting reader/creator logic against the Zoom REST API, plus the pure
//! mapping and validation helpers the handlers build on.

use bookify_config::{ZoomAccount, ZoomConfig};
use chrono::{DateTime, SecondsFormat};
use chrono_tz::Tz;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::auth::get_access_token;
use crate::error::ZoomError;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Every meeting is scheduled in this zone regardless of caller input.
pub const MEETING_TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

/// Zoom meeting type for a scheduled (non-instant, non-recurring) meeting.
const SCHEDULED_MEETING_TYPE: u8 = 2;

/// Label shown instead of the topic for non-mentoring bookings.
const MASKED_TITLE: &str = "Booked";

/// Topics containing this substring (case-sensitive) are shown verbatim.
const MENTORING_MARKER: &str = "Mentoring";

// --- Data Structures ---

/// Display-friendly meeting record returned by the list endpoint.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct MeetingRecord {
    pub id: i64,
    pub title: String,
    /// Vendor start time, passed through unchanged.
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Duration in minutes.
    pub duration: i64,
    #[serde(rename = "joinUrl")]
    pub join_url: String,
}

/// One meeting as returned by Zoom's "list my meetings" endpoint.
#[derive(Deserialize, Debug)]
pub(crate) struct ZoomMeeting {
    // id and start_time are required here on purpose: a meeting without them
    // must never reach the UI, so deserialization fails instead.
    pub id: i64,
    pub topic: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    pub duration: i64,
    #[serde(default)]
    pub join_url: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct MeetingListResponse {
    #[serde(default)]
    pub meetings: Vec<ZoomMeeting>,
}

impl From<ZoomMeeting> for MeetingRecord {
    fn from(meeting: ZoomMeeting) -> Self {
        MeetingRecord {
            id: meeting.id,
            title: derive_title(&meeting.topic),
            start: meeting.start_time,
            end: meeting.end_time,
            duration: meeting.duration,
            join_url: meeting.join_url,
        }
    }
}

/// Booking request received from our frontend.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreateMeetingRequest {
    #[cfg_attr(feature = "openapi", schema(example = "test G1 - Mentoring"))]
    pub topic: String,
    #[cfg_attr(feature = "openapi", schema(example = "2025-01-02T09:00:00+07:00"))]
    pub start_time: String,
    /// Duration in minutes.
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration: i64,
}

/// JSON body sent to Zoom's "create meeting" endpoint.
#[derive(Serialize, Debug)]
struct CreateMeetingPayload<'a> {
    topic: &'a str,
    #[serde(rename = "type")]
    meeting_type: u8,
    start_time: String,
    duration: i64,
    timezone: &'a str,
}

// --- Pure Helpers ---

/// Derives the display title for a meeting topic.
///
/// Topics containing the case-sensitive substring `"Mentoring"` are shown
/// verbatim; everything else is masked as `"Booked"` so non-mentoring
/// bookings stay private on the shared calendar.
pub fn derive_title(topic: &str) -> String {
    if topic.contains(MENTORING_MARKER) {
        topic.to_string()
    } else {
        MASKED_TITLE.to_string()
    }
}

/// Validates a caller-supplied start time and normalizes it to RFC 3339.
///
/// The original booking form emitted shorthand offsets such as `+7`; those
/// are expanded to `+07:00` before parsing. Anything that still fails to
/// parse is rejected instead of being forwarded to the vendor.
pub fn normalize_start_time(raw: &str) -> Result<String, ZoomError> {
    let candidate = expand_shorthand_offset(raw);
    let parsed = DateTime::parse_from_rfc3339(&candidate).map_err(|_| {
        ZoomError::ValidationError(format!("start_time is not a valid RFC 3339 timestamp: {raw}"))
    })?;
    Ok(parsed.to_rfc3339_opts(SecondsFormat::Secs, false))
}

/// Rewrites a trailing one- or two-digit UTC offset (`+7`, `-5`) into the
/// RFC 3339 form (`+07:00`, `-05:00`). Anything else is returned unchanged.
fn expand_shorthand_offset(raw: &str) -> String {
    let Some(time_sep) = raw.find('T') else {
        return raw.to_string();
    };
    let time_part = &raw[time_sep..];
    for sign in ['+', '-'] {
        if let Some(pos) = time_part.rfind(sign) {
            let offset = &time_part[pos + 1..];
            if !offset.is_empty() && offset.len() <= 2 && offset.bytes().all(|b| b.is_ascii_digit())
            {
                let hours: u32 = offset.parse().unwrap_or(0);
                return format!("{}{}{:02}:00", &raw[..time_sep + pos], sign, hours);
            }
        }
    }
    raw.to_string()
}

/// Validates a booking request and builds the vendor payload for it.
///
/// Meeting type and timezone are fixed here, never taken from the caller.
pub(crate) fn build_create_payload(
    request: &CreateMeetingRequest,
) -> Result<serde_json::Value, ZoomError> {
    if request.topic.trim().is_empty() {
        return Err(ZoomError::ValidationError(
            "topic must not be empty".to_string(),
        ));
    }
    if request.duration <= 0 {
        return Err(ZoomError::ValidationError(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    let start_time = normalize_start_time(&request.start_time)?;
    let payload = CreateMeetingPayload {
        topic: &request.topic,
        meeting_type: SCHEDULED_MEETING_TYPE,
        start_time,
        duration: request.duration,
        timezone: MEETING_TIMEZONE.name(),
    };
    serde_json::to_value(&payload)
        .map_err(|e| ZoomError::CreateError(format!("failed to encode meeting payload: {e}")))
}

// --- Vendor Calls ---

/// Fetches the authenticated user's scheduled meetings and maps them into
/// display records, in vendor response order (no re-sorting).
pub async fn fetch_meetings(
    client: &Client,
    config: &ZoomConfig,
    access_token: &str,
) -> Result<Vec<MeetingRecord>, ZoomError> {
    let url = format!("{}/users/me/meetings", config.api_base_url);

    let response = client
        .get(&url)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| {
            error!("Failed to reach Zoom meetings endpoint: {e}");
            ZoomError::FetchError(e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        error!(%status, "Zoom meeting list rejected: {body_text}");
        return Err(ZoomError::FetchError(format!(
            "status {status}: {body_text}"
        )));
    }

    let payload: MeetingListResponse = response.json().await.map_err(|e| {
        error!("Failed to parse Zoom meeting list: {e}");
        ZoomError::FetchError(e.to_string())
    })?;

    Ok(payload.meetings.into_iter().map(MeetingRecord::from).collect())
}

/// Asks Zoom to schedule a new meeting and returns the vendor's raw JSON
/// confirmation unchanged.
///
/// No idempotency key is sent: submitting the same request twice creates two
/// distinct vendor meetings. That matches the original product behavior and
/// is intentional.
pub async fn create_meeting(
    client: &Client,
    config: &ZoomConfig,
    access_token: &str,
    request: &CreateMeetingRequest,
) -> Result<serde_json::Value, ZoomError> {
    let payload = build_create_payload(request)?;
    post_meeting(client, config, access_token, &payload).await
}

async fn post_meeting(
    client: &Client,
    config: &ZoomConfig,
    access_token: &str,
    payload: &serde_json::Value,
) -> Result<serde_json::Value, ZoomError> {
    let url = format!("{}/users/me/meetings", config.api_base_url);

    let response = client
        .post(&url)
        .bearer_auth(access_token)
        .json(payload)
        .send()
        .await
        .map_err(|e| {
            error!("Failed to reach Zoom create-meeting endpoint: {e}");
            ZoomError::CreateError(e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        error!(%status, "Zoom meeting creation rejected: {body_text}");
        return Err(ZoomError::CreateError(format!(
            "status {status}: {body_text}"
        )));
    }

    response.json().await.map_err(|e| {
        error!("Failed to parse Zoom creation response: {e}");
        ZoomError::CreateError(e.to_string())
    })
}

// --- Orchestration ---

/// Aggregates meetings across all configured sub-accounts.
///
/// Policy: all-or-nothing. Accounts are processed sequentially
/// (token exchange, then list) and the first failing account aborts the
/// whole aggregate, even when earlier accounts already contributed
/// meetings. Successful results are concatenated in account-then-vendor
/// order.
pub async fn list_meetings_all_accounts(
    client: &Client,
    config: &ZoomConfig,
    accounts: &[ZoomAccount],
) -> Result<Vec<MeetingRecord>, ZoomError> {
    let mut all_meetings = Vec::new();
    for account in accounts {
        let access_token = get_access_token(client, config, account).await?;
        let meetings = fetch_meetings(client, config, &access_token).await?;
        all_meetings.extend(meetings);
    }
    Ok(all_meetings)
}

/// Books a meeting on the FIRST configured sub-account.
///
/// GET aggregates across all accounts while POST always targets account
/// index 0. The asymmetry is inherited from the original product and is
/// preserved as-is pending product clarification; do not unify it here.
pub async fn book_meeting_first_account(
    client: &Client,
    config: &ZoomConfig,
    accounts: &[ZoomAccount],
    request: &CreateMeetingRequest,
) -> Result<serde_json::Value, ZoomError> {
    // Validate before spending a token exchange on a bad request.
    let payload = build_create_payload(request)?;
    let account = accounts.first().ok_or(ZoomError::ConfigError)?;
    let access_token = get_access_token(client, config, account).await?;
    post_meeting(client, config, &access_token, &payload).await
}
