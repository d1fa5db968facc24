use std::path::PathBuf;

use portfolio_db::stores::json_store::DEFAULT_PROJECTS_FILE;

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
    /// Path of the JSON fallback store (default: `data/projects.json`).
    pub projects_file: PathBuf,
    /// Hosted database settings. `None` means JSON-only operation.
    pub database: Option<DatabaseConfig>,
    /// Whether the quote-request email provider has credentials.
    pub quote_email_enabled: bool,
    /// Whether images are served through the CDN rather than local paths.
    pub cdn_images_enabled: bool,
}

/// Connection settings for the primary store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection URL, credentials included.
    pub url: String,
    /// Seconds to wait for a pooled connection before giving up and
    /// falling back (default: `5`).
    pub acquire_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                 |
    /// |---------------------------------|-------------------------|
    /// | `HOST`                          | `0.0.0.0`               |
    /// | `PORT`                          | `3000`                  |
    /// | `CORS_ORIGINS`                  | `http://localhost:3000` |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                    |
    /// | `PROJECTS_FILE`                 | `data/projects.json`    |
    /// | `DATABASE_URL`                  | unset (JSON only)       |
    /// | `DATABASE_ACQUIRE_TIMEOUT_SECS` | `5`                     |
    /// | `SENDGRID_API_KEY`              | unset                   |
    /// | `CLOUDINARY_CLOUD_NAME`         | unset                   |
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

        let projects_file = std::env::var("PROJECTS_FILE")
            .unwrap_or_else(|_| DEFAULT_PROJECTS_FILE.into())
            .into();

        let database = non_empty_var("DATABASE_URL").map(|url| {
            let acquire_timeout_secs: u64 = std::env::var("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .expect("DATABASE_ACQUIRE_TIMEOUT_SECS must be a valid u64");
            DatabaseConfig {
                url,
                acquire_timeout_secs,
            }
        });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            projects_file,
            database,
            quote_email_enabled: non_empty_var("SENDGRID_API_KEY").is_some(),
            cdn_images_enabled: non_empty_var("CLOUDINARY_CLOUD_NAME").is_some(),
        }
    }
}

/// An environment variable that is set to something other than whitespace.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
}
