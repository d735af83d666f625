// --- File: crates/bookify_zoom/src/doc.rs ---

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{ApiFailure, BookingResponse, ListMeetingsError};
use crate::logic::{CreateMeetingRequest, MeetingRecord};

#[utoipa::path(
    get,
    path = "/meetings",
    responses(
        (status = 200, description = "Aggregate meeting list across all configured Zoom sub-accounts", body = [MeetingRecord]),
        (status = 500, description = "Any account failed; no partial list is returned", body = ListMeetingsError)
    ),
    tag = "Zoom"
)]
fn doc_list_meetings_handler() {}

#[utoipa::path(
    post,
    path = "/meetings",
    request_body(content = CreateMeetingRequest, example = json!({
        "topic": "test G1",
        "start_time": "2025-01-02T09:00:00+07:00",
        "duration": 30
    })),
    responses(
        (status = 200, description = "Meeting booked on the first configured sub-account", body = BookingResponse),
        (status = 400, description = "Invalid booking request (bad start_time, empty topic, non-positive duration)", body = ApiFailure),
        (status = 500, description = "Vendor call failed", body = ApiFailure,
         example = json!({
             "success": false,
             "message": "Failed to create Zoom meeting: status 400 Bad Request"
         })
        )
    ),
    tag = "Zoom"
)]
fn doc_book_meeting_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_list_meetings_handler, doc_book_meeting_handler),
    components(schemas(
        MeetingRecord,
        CreateMeetingRequest,
        BookingResponse,
        ApiFailure,
        ListMeetingsError
    )),
    tags((name = "Zoom", description = "Mentoring meeting booking via Zoom"))
)]
pub struct ZoomApiDoc;
