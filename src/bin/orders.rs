use std::{sync::Arc, time::Duration};

use admin_orders::{
    config::AppConfig,
    fetcher::HttpOrderFetcher,
    models::Credential,
    render,
    telemetry::init_tracing,
    time_format::RelativeTime,
    view::OrderListView,
};

/// Prints the order table once for `AUTH_TOKEN`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = AppConfig::from_env()?;

    let fetcher = HttpOrderFetcher::new(
        &config.orders_api_url,
        config.scope,
        Duration::from_secs(config.http_timeout_secs),
    )?;
    let credential = config.auth_token.clone().and_then(Credential::new);
    if credential.is_none() {
        tracing::warn!("AUTH_TOKEN is not set; nothing will be fetched");
    }

    let mut view = OrderListView::new(Arc::new(fetcher), Arc::new(RelativeTime::new()), credential);
    view.activate().await;

    print!("{}", render::text::table(&view.render()));
    if let Some(err) = view.last_error() {
        anyhow::bail!("could not load orders: {err}");
    }
    Ok(())
}
