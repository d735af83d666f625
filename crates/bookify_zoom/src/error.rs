// --- File: crates/bookify_zoom/src/error.rs ---
use bookify_common::HttpStatusCode;
use thiserror::Error;

/// Errors raised by the Zoom integration.
///
/// The three vendor-call kinds (`AuthError`, `FetchError`, `CreateError`) are
/// deliberately separate variants so a failed token exchange is
/// distinguishable in logs from a failed list or create call, even though the
/// HTTP surface collapses all of them to a 500.
#[derive(Error, Debug)]
pub enum ZoomError {
    #[error("Zoom token exchange failed: {0}")]
    AuthError(String),
    #[error("Failed to fetch Zoom meetings: {0}")]
    FetchError(String),
    #[error("Failed to create Zoom meeting: {0}")]
    CreateError(String),
    #[error("Invalid booking request: {0}")]
    ValidationError(String),
    #[error("Zoom configuration missing or incomplete")]
    ConfigError,
}

impl HttpStatusCode for ZoomError {
    fn status_code(&self) -> u16 {
        match self {
            ZoomError::ValidationError(_) => 400,
            // The original surface reports every vendor failure as a plain
            // 500 with a human-readable message, with no per-kind status.
            ZoomError::AuthError(_)
            | ZoomError::FetchError(_)
            | ZoomError::CreateError(_)
            | ZoomError::ConfigError => 500,
        }
    }
}
