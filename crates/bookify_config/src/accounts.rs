// --- File: crates/bookify_config/src/accounts.rs ---
//! Loader for the static list of Zoom sub-account credentials.
//!
//! Accounts are configured as numbered env-var triples starting at 1:
//! `ZOOM_CLIENT_ID_1`, `ZOOM_CLIENT_SECRET_1`, `ZOOM_ACCOUNT_ID_1`,
//! `ZOOM_CLIENT_ID_2`, ... Loading stops at the first index with no
//! `CLIENT_ID`; the list is built once at startup and never reloaded.

use crate::models::ZoomAccount;
use std::env;
use tracing::warn;

/// Default env-var prefix for account triples.
pub const ACCOUNT_ENV_PREFIX: &str = "ZOOM";

/// Load all configured Zoom sub-accounts using the default prefix.
pub fn load_zoom_accounts() -> Vec<ZoomAccount> {
    load_zoom_accounts_with_prefix(ACCOUNT_ENV_PREFIX)
}

/// Load account triples `<PREFIX>_CLIENT_ID_n` / `<PREFIX>_CLIENT_SECRET_n` /
/// `<PREFIX>_ACCOUNT_ID_n` for n = 1.. until the first missing client id.
///
/// A triple with a client id but a missing secret or account id is skipped
/// with a warning rather than producing a half-configured account.
pub fn load_zoom_accounts_with_prefix(prefix: &str) -> Vec<ZoomAccount> {
    let mut accounts = Vec::new();
    for n in 1.. {
        let client_id = match non_empty_var(&format!("{prefix}_CLIENT_ID_{n}")) {
            Some(value) => value,
            None => break,
        };
        let client_secret = non_empty_var(&format!("{prefix}_CLIENT_SECRET_{n}"));
        let account_id = non_empty_var(&format!("{prefix}_ACCOUNT_ID_{n}"));
        match (client_secret, account_id) {
            (Some(client_secret), Some(account_id)) => accounts.push(ZoomAccount {
                client_id,
                client_secret,
                account_id,
            }),
            _ => {
                warn!(index = n, "Incomplete Zoom account triple, skipping");
            }
        }
    }
    accounts
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own prefix so the global env is not shared state.

    #[test]
    fn loads_sequential_triples_in_order() {
        env::set_var("ACCT_SEQ_CLIENT_ID_1", "id-1");
        env::set_var("ACCT_SEQ_CLIENT_SECRET_1", "secret-1");
        env::set_var("ACCT_SEQ_ACCOUNT_ID_1", "acct-1");
        env::set_var("ACCT_SEQ_CLIENT_ID_2", "id-2");
        env::set_var("ACCT_SEQ_CLIENT_SECRET_2", "secret-2");
        env::set_var("ACCT_SEQ_ACCOUNT_ID_2", "acct-2");

        let accounts = load_zoom_accounts_with_prefix("ACCT_SEQ");
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].client_id, "id-1");
        assert_eq!(accounts[1].account_id, "acct-2");
    }

    #[test]
    fn stops_at_first_gap() {
        env::set_var("ACCT_GAP_CLIENT_ID_1", "id-1");
        env::set_var("ACCT_GAP_CLIENT_SECRET_1", "secret-1");
        env::set_var("ACCT_GAP_ACCOUNT_ID_1", "acct-1");
        // No index 2; index 3 must not be picked up.
        env::set_var("ACCT_GAP_CLIENT_ID_3", "id-3");
        env::set_var("ACCT_GAP_CLIENT_SECRET_3", "secret-3");
        env::set_var("ACCT_GAP_ACCOUNT_ID_3", "acct-3");

        let accounts = load_zoom_accounts_with_prefix("ACCT_GAP");
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].client_id, "id-1");
    }

    #[test]
    fn skips_incomplete_triple() {
        env::set_var("ACCT_PART_CLIENT_ID_1", "id-1");
        // Secret and account id missing.
        env::set_var("ACCT_PART_CLIENT_ID_2", "id-2");
        env::set_var("ACCT_PART_CLIENT_SECRET_2", "secret-2");
        env::set_var("ACCT_PART_ACCOUNT_ID_2", "acct-2");

        let accounts = load_zoom_accounts_with_prefix("ACCT_PART");
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].client_id, "id-2");
    }

    #[test]
    fn empty_env_yields_no_accounts() {
        let accounts = load_zoom_accounts_with_prefix("ACCT_NONE");
        assert!(accounts.is_empty());
    }

    #[test]
    fn debug_output_redacts_secret() {
        let account = ZoomAccount {
            client_id: "id".into(),
            client_secret: "very-secret".into(),
            account_id: "acct".into(),
        };
        let rendered = format!("{account:?}");
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
