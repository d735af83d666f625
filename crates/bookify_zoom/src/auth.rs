// --- File: crates/bookify_zoom/src/auth.rs ---
//! Token acquirer for Zoom's Server-to-Server OAuth (account_credentials
//! grant).

use base64::{engine::general_purpose::STANDARD as base64_engine, Engine as _};
use bookify_config::{ZoomAccount, ZoomConfig};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Deserialize;
use tracing::error;

use crate::error::ZoomError;

#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

/// Exchanges one sub-account's credentials for a short-lived bearer token.
///
/// A fresh token is requested for every inbound request; tokens are never
/// cached or reused across requests, so expiry handling stays with the
/// vendor. Any network failure or non-2xx response aborts the enclosing
/// operation with [`ZoomError::AuthError`], no retry.
pub async fn get_access_token(
    client: &Client,
    config: &ZoomConfig,
    account: &ZoomAccount,
) -> Result<String, ZoomError> {
    let credentials =
        base64_engine.encode(format!("{}:{}", account.client_id, account.client_secret));
    let body = serde_urlencoded::to_string([
        ("grant_type", "account_credentials"),
        ("account_id", account.account_id.as_str()),
    ])
    .map_err(|e| ZoomError::AuthError(format!("failed to encode token request: {e}")))?;

    let response = client
        .post(&config.oauth_token_url)
        .header(AUTHORIZATION, format!("Basic {credentials}"))
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .map_err(|e| {
            error!(account_id = %account.account_id, "Failed to reach Zoom token endpoint: {e}");
            ZoomError::AuthError(e.to_string())
        })?;

    let status = response.status();
    if !status.is_success() {
        let body_text = response.text().await.unwrap_or_default();
        error!(
            account_id = %account.account_id,
            %status,
            "Zoom token exchange rejected: {body_text}"
        );
        return Err(ZoomError::AuthError(format!("status {status}: {body_text}")));
    }

    let token: TokenResponse = response.json().await.map_err(|e| {
        error!(account_id = %account.account_id, "Failed to parse Zoom token response: {e}");
        ZoomError::AuthError(e.to_string())
    })?;

    Ok(token.access_token)
}
