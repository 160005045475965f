use std::{fmt, str::FromStr, time::Duration};

use async_trait::async_trait;
use reqwest::header;

use crate::{
    error::{AppError, AppResult},
    models::{Credential, Order},
};

/// Source of the orders shown on the page.
#[async_trait]
pub trait OrderFetcher: Send + Sync {
    async fn fetch(&self, credential: &Credential) -> AppResult<Vec<Order>>;
}

/// Which collection the credential is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderScope {
    /// Every order in the store.
    #[default]
    Admin,
    /// Only the signed-in buyer's orders.
    User,
}

impl OrderScope {
    pub fn path(&self) -> &'static str {
        match self {
            OrderScope::Admin => "/api/v1/auth/all-orders",
            OrderScope::User => "/api/v1/auth/orders",
        }
    }
}

impl FromStr for OrderScope {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(OrderScope::Admin),
            "user" => Ok(OrderScope::User),
            other => Err(anyhow::anyhow!("unknown order scope {other:?}")),
        }
    }
}

impl fmt::Display for OrderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderScope::Admin => f.write_str("admin"),
            OrderScope::User => f.write_str("user"),
        }
    }
}

/// Reads orders from the storefront backend over HTTP.
pub struct HttpOrderFetcher {
    api_url: String,
    scope: OrderScope,
    client: reqwest::Client,
}

impl HttpOrderFetcher {
    pub fn new(api_url: &str, scope: OrderScope, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(api_url, scope, client))
    }

    pub fn with_client(api_url: &str, scope: OrderScope, client: reqwest::Client) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            scope,
            client,
        }
    }

    pub fn orders_url(&self) -> String {
        format!("{}{}", self.api_url, self.scope.path())
    }
}

#[async_trait]
impl OrderFetcher for HttpOrderFetcher {
    async fn fetch(&self, credential: &Credential) -> AppResult<Vec<Order>> {
        let url = self.orders_url();
        tracing::debug!(%url, scope = %self.scope, "fetching orders");

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", credential.as_str()))
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus(status));
        }

        let body = response.bytes().await?;
        let orders: Vec<Order> = serde_json::from_slice(&body)?;
        tracing::debug!(count = orders.len(), "orders received");
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_parses_and_picks_path() {
        assert_eq!("Admin".parse::<OrderScope>().unwrap(), OrderScope::Admin);
        assert_eq!(" user ".parse::<OrderScope>().unwrap(), OrderScope::User);
        assert!("root".parse::<OrderScope>().is_err());

        let fetcher = HttpOrderFetcher::with_client(
            "http://shop.test/",
            OrderScope::User,
            reqwest::Client::new(),
        );
        assert_eq!(fetcher.orders_url(), "http://shop.test/api/v1/auth/orders");
    }
}
