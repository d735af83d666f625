// --- File: crates/bookify_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::fmt;

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Zoom Config ---
// Holds non-secret Zoom config. Per-account credentials are loaded directly
// from env vars (ZOOM_CLIENT_ID_n / ZOOM_CLIENT_SECRET_n / ZOOM_ACCOUNT_ID_n).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ZoomConfig {
    /// OAuth token endpoint for the account_credentials grant.
    #[serde(default = "default_oauth_token_url")]
    pub oauth_token_url: String,
    /// Base URL of the Zoom REST API (no trailing slash).
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Timeout applied to every outbound vendor call.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_oauth_token_url() -> String {
    "https://zoom.us/oauth/token".to_string()
}

fn default_api_base_url() -> String {
    "https://api.zoom.us/v2".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ZoomConfig {
    fn default() -> Self {
        ZoomConfig {
            oauth_token_url: default_oauth_token_url(),
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

// --- Zoom Sub-Account Credentials ---
// One triple per bookable Zoom sub-account. Immutable after startup.
// Deliberately not Serialize: credential triples never leave this process.
#[derive(Clone, PartialEq, Eq)]
pub struct ZoomAccount {
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
}

// client_secret must never reach logs, so no derived Debug.
impl fmt::Debug for ZoomAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomAccount")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("account_id", &self.account_id)
            .finish()
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_zoom: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub zoom: Option<ZoomConfig>,
}
