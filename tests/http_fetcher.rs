use std::time::Duration;

use admin_orders::{
    error::AppError,
    fetcher::{HttpOrderFetcher, OrderFetcher, OrderScope},
    models::Credential,
};
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use serde_json::{Value, json};

/// Minimal stand-in for the storefront backend: both order listings demand
/// `Bearer 123`.
async fn spawn_backend() -> String {
    async fn guarded(headers: HeaderMap, body: Value) -> Result<Json<Value>, StatusCode> {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if auth != Some("Bearer 123") {
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(Json(body))
    }

    let app = Router::new()
        .route(
            "/api/v1/auth/all-orders",
            get(|headers: HeaderMap| {
                guarded(
                    headers,
                    json!([
                        {
                            "products": [{"_id": "1", "name": "Jeans", "description": "Classic denim jeans", "price": 49.99}],
                            "payment": {"success": true},
                            "buyer": {"name": "Doe John"},
                            "status": "Processed",
                            "createdAt": "2024-09-14T08:26:06.070Z"
                        },
                        {
                            "products": [],
                            "payment": {"success": false},
                            "buyer": {"name": "John Doe"},
                            "status": "Not Process",
                            "createdAt": "2024-09-15T08:26:06.070Z"
                        }
                    ]),
                )
            }),
        )
        .route(
            "/api/v1/auth/orders",
            get(|headers: HeaderMap| guarded(headers, json!([]))),
        )
        .route("/broken/api/v1/auth/all-orders", get(|| async { "not json" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn fetcher(base: &str, scope: OrderScope) -> HttpOrderFetcher {
    HttpOrderFetcher::new(base, scope, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn admin_scope_returns_orders_in_server_order() {
    let base = spawn_backend().await;
    let orders = fetcher(&base, OrderScope::Admin)
        .fetch(&Credential::new("123").unwrap())
        .await
        .unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].buyer.name, "Doe John");
    assert_eq!(orders[0].created_at, "2024-09-14T08:26:06.070Z");
    assert_eq!(orders[1].status, "Not Process");
}

#[tokio::test]
async fn user_scope_hits_own_orders() {
    let base = spawn_backend().await;
    let orders = fetcher(&base, OrderScope::User)
        .fetch(&Credential::new("123").unwrap())
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn wrong_token_surfaces_status() {
    let base = spawn_backend().await;
    let err = fetcher(&base, OrderScope::Admin)
        .fetch(&Credential::new("nope").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UpstreamStatus(s) if s == StatusCode::UNAUTHORIZED));
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let base = spawn_backend().await;
    let err = fetcher(&format!("{base}/broken"), OrderScope::Admin)
        .fetch(&Credential::new("123").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn transport_failure_keeps_the_cause() {
    // Bind then drop a listener so the port refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher(&format!("http://{addr}"), OrderScope::Admin)
        .fetch(&Credential::new("123").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Upstream(_)));
    let message = err.to_string();
    assert!(message.starts_with("Upstream request failed: "), "{message}");
    assert!(message.len() > "Upstream request failed: ".len(), "{message}");
}
