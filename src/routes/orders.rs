use axum::{Json, Router, extract::State, response::Html, routing::get};

use crate::{
    middleware::credential::SessionCredential,
    render,
    response::{ApiResponse, Meta},
    state::AppState,
    view::{OrderListView, OrderTable},
};

pub fn page_router() -> Router<AppState> {
    Router::new().route("/orders", get(orders_page))
}

pub fn api_router() -> Router<AppState> {
    Router::new().route("/orders", get(orders_table))
}

/// One request is one mount of the view: build it, let it load for the
/// caller's credential, render.
async fn mounted_table(state: &AppState, credential: SessionCredential) -> OrderTable {
    let mut view = OrderListView::new(state.fetcher.clone(), state.formatter.clone(), credential.0);
    view.activate().await;
    view.render()
}

#[utoipa::path(
    get,
    path = "/admin/orders",
    responses(
        (status = 200, description = "All Orders page", content_type = "text/html", body = String),
        (status = 400, description = "Malformed Authorization header"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn orders_page(
    State(state): State<AppState>,
    credential: SessionCredential,
) -> Html<String> {
    let table = mounted_table(&state, credential).await;
    Html(render::html::page(&table))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    responses(
        (status = 200, description = "Order table view-model", body = ApiResponse<OrderTable>),
        (status = 400, description = "Malformed Authorization header"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn orders_table(
    State(state): State<AppState>,
    credential: SessionCredential,
) -> Json<ApiResponse<OrderTable>> {
    let table = mounted_table(&state, credential).await;
    let meta = Meta::with_total(table.rows.len());
    Json(ApiResponse::success("Orders", table, Some(meta)))
}
