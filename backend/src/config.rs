use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 3000;
const STAGING_PORT: u16 = 3100;
const DEFAULT_STATIC_DIR: &str = "../frontend/dist";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub frontend_origin: HeaderValue,
    pub sentry_dsn: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests don't touch the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => match lookup("ENVIRONMENT").as_deref() {
                Some("staging") => STAGING_PORT,
                _ => DEFAULT_PORT,
            },
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let frontend_url = lookup("FRONTEND_URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
        let frontend_origin = HeaderValue::from_str(&frontend_url)
            .map_err(|_| ConfigError::InvalidOrigin(frontend_url.clone()))?;
        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty());

        Ok(Self {
            port,
            static_dir,
            frontend_origin,
            sentry_dsn,
        })
    }

    pub fn index_file(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
