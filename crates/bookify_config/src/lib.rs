// --- File: crates/bookify_config/src/lib.rs ---

pub mod accounts;
pub mod models;

pub use accounts::{load_zoom_accounts, load_zoom_accounts_with_prefix};
pub use models::{AppConfig, ServerConfig, ZoomAccount, ZoomConfig};

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;

static DOTENV: OnceCell<()> = OnceCell::new();

/// Loads `.env` once per process. Later calls are no-ops, so any entry point
/// (binary, tests) can call this without worrying about ordering.
pub fn ensure_dotenv_loaded() {
    DOTENV.get_or_init(|| {
        dotenv::dotenv().ok();
    });
}

/// Loads the unified application configuration.
///
/// Sources, later entries overriding earlier ones:
/// 1. `config/default.toml` (optional)
/// 2. `config/<RUN_MODE>.toml` (optional, `RUN_MODE` defaults to `development`)
/// 3. Environment variables prefixed `BOOKIFY`, `__` as nesting separator
///    (e.g. `BOOKIFY_SERVER__PORT=8086`)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

    Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8086)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
        .add_source(Environment::with_prefix("BOOKIFY").separator("__"))
        .build()?
        .try_deserialize()
}
