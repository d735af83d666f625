#[cfg(test)]
mod tests {
    use crate::auth::get_access_token;
    use crate::error::ZoomError;
    use base64::{engine::general_purpose::STANDARD as base64_engine, Engine as _};
    use bookify_config::{ZoomAccount, ZoomConfig};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_account() -> ZoomAccount {
        ZoomAccount {
            client_id: "client-1".into(),
            client_secret: "secret-1".into(),
            account_id: "acct-1".into(),
        }
    }

    fn test_config(server_uri: &str) -> ZoomConfig {
        ZoomConfig {
            oauth_token_url: format!("{server_uri}/oauth/token"),
            api_base_url: format!("{server_uri}/v2"),
            request_timeout_secs: 5,
        }
    }

    fn basic_credentials(account: &ZoomAccount) -> String {
        let encoded =
            base64_engine.encode(format!("{}:{}", account.client_id, account.client_secret));
        format!("Basic {encoded}")
    }

    #[tokio::test]
    async fn exchanges_credentials_for_token() {
        let mock_server = MockServer::start().await;
        let account = test_account();

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(header("Authorization", basic_credentials(&account).as_str()))
            .and(header("Content-Type", "application/x-www-form-urlencoded"))
            .and(body_string("grant_type=account_credentials&account_id=acct-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "token-abc",
                "token_type": "bearer",
                "expires_in": 3599,
                "scope": "meeting:read meeting:write"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let token = get_access_token(
            &reqwest::Client::new(),
            &test_config(&mock_server.uri()),
            &account,
        )
        .await
        .unwrap();

        assert_eq!(token, "token-abc");
    }

    #[tokio::test]
    async fn rejected_exchange_is_an_auth_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "reason": "Invalid client_id or client_secret",
                "error": "invalid_client"
            })))
            .mount(&mock_server)
            .await;

        let err = get_access_token(
            &reqwest::Client::new(),
            &test_config(&mock_server.uri()),
            &test_account(),
        )
        .await
        .unwrap_err();

        match err {
            ZoomError::AuthError(message) => {
                assert!(message.contains("400"), "message was: {message}");
                assert!(message.contains("invalid_client"), "message was: {message}");
            }
            other => panic!("expected AuthError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_token_endpoint_is_an_auth_error() {
        // Nothing listens here; the connection itself fails.
        let config = ZoomConfig {
            oauth_token_url: "http://127.0.0.1:1/oauth/token".into(),
            api_base_url: "http://127.0.0.1:1/v2".into(),
            request_timeout_secs: 1,
        };

        let err = get_access_token(&reqwest::Client::new(), &config, &test_account())
            .await
            .unwrap_err();

        assert!(matches!(err, ZoomError::AuthError(_)));
    }
}
