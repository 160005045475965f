use std::env;

use crate::fetcher::OrderScope;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub orders_api_url: String,
    pub scope: OrderScope,
    pub auth_token: Option<String>,
    pub http_timeout_secs: u64,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let orders_api_url = env::var("ORDERS_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string())
            .trim_end_matches('/')
            .to_string();
        let scope = match env::var("ORDERS_SCOPE") {
            Ok(raw) => raw.parse::<OrderScope>()?,
            Err(_) => OrderScope::Admin,
        };
        let auth_token = env::var("AUTH_TOKEN").ok().filter(|t| !t.trim().is_empty());
        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        let database_url = env::var("DATABASE_URL").ok();
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        Ok(Self {
            orders_api_url,
            scope,
            auth_token,
            http_timeout_secs,
            database_url,
            host,
            port,
        })
    }

    /// Only the database tooling needs a connection string.
    pub fn require_database_url(&self) -> anyhow::Result<&str> {
        self.database_url
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is not set"))
    }
}
