use dailycheck_core::short_id::DEFAULT_MAX_ATTEMPTS;

/// Name of the environment in which the cron secret is enforced.
pub const PRODUCTION_ENV: &str = "production";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deployment environment name (default: `development`).
    pub app_env: String,
    /// Shared secret expected in `Authorization: Bearer` on cron routes.
    pub cron_secret: Option<String>,
    /// Short aliases tried per form creation before giving up (default: `10`).
    pub short_id_max_attempts: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `APP_ENV`               | `development`              |
    /// | `CRON_SECRET`           | unset                      |
    /// | `SHORT_ID_MAX_ATTEMPTS` | `10`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let cron_secret = std::env::var("CRON_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        let short_id_max_attempts: u32 = std::env::var("SHORT_ID_MAX_ATTEMPTS")
            .unwrap_or_else(|_| DEFAULT_MAX_ATTEMPTS.to_string())
            .parse()
            .expect("SHORT_ID_MAX_ATTEMPTS must be a valid u32");
        assert!(
            short_id_max_attempts > 0,
            "SHORT_ID_MAX_ATTEMPTS must be at least 1"
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            app_env,
            cron_secret,
            short_id_max_attempts,
        }
    }

    /// Whether the server runs in production, where cron routes require the
    /// shared secret.
    pub fn is_production(&self) -> bool {
        self.app_env == PRODUCTION_ENV
    }
}
