//! The admin "All Orders" view.
//!
//! [`OrderListView`] owns a read-only snapshot of the orders fetched for one
//! credential and turns it into an [`OrderTable`], which the HTML page, the
//! JSON endpoint and the CLI all render from.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    fetcher::OrderFetcher,
    models::{Credential, Order, OrderProduct},
    time_format::TimeFormatter,
};

pub const TITLE: &str = "All Orders";
pub const HEADERS: [&str; 6] = ["#", "Status", "Buyer", "Date", "Payment", "Quantity"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Idle,
    Loading,
    Rendered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderRow {
    pub number: usize,
    pub status: String,
    pub buyer: String,
    pub date: String,
    pub payment: String,
    pub quantity: usize,
    pub products: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<OrderRow>,
}

pub struct OrderListView {
    fetcher: Arc<dyn OrderFetcher>,
    formatter: Arc<dyn TimeFormatter>,
    credential: Option<Credential>,
    loaded_for: Option<Credential>,
    orders: Vec<Order>,
    state: ViewState,
    last_error: Option<String>,
}

impl OrderListView {
    pub fn new(
        fetcher: Arc<dyn OrderFetcher>,
        formatter: Arc<dyn TimeFormatter>,
        credential: Option<Credential>,
    ) -> Self {
        Self {
            fetcher,
            formatter,
            credential,
            loaded_for: None,
            orders: Vec::new(),
            state: ViewState::Idle,
            last_error: None,
        }
    }

    /// Mount hook: loads once for the current credential, if there is one.
    pub async fn activate(&mut self) {
        if self.credential.is_some() && self.loaded_for != self.credential {
            self.load().await;
        }
    }

    /// Credential-change hook. Fetches only when the value actually changed
    /// to something present. Signing out drops the snapshot so the next
    /// sign-in loads again, even with the same token.
    pub async fn set_credential(&mut self, credential: Option<Credential>) {
        if self.credential == credential {
            return;
        }
        self.credential = credential;
        if self.credential.is_none() {
            self.orders.clear();
            self.loaded_for = None;
            self.last_error = None;
            self.state = ViewState::Idle;
            return;
        }
        self.activate().await;
    }

    /// Fetches orders for the current credential. A failure is logged and
    /// remembered in [`last_error`](Self::last_error); the previous snapshot
    /// stays on screen.
    pub async fn load(&mut self) {
        let Some(credential) = self.credential.clone() else {
            return;
        };

        self.state = ViewState::Loading;
        self.loaded_for = Some(credential.clone());

        match self.fetcher.fetch(&credential).await {
            Ok(orders) => {
                tracing::debug!(count = orders.len(), "order list loaded");
                self.orders = orders;
                self.last_error = None;
                self.state = ViewState::Rendered;
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load orders");
                self.last_error = Some(err.to_string());
                self.state = ViewState::Idle;
            }
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn render(&self) -> OrderTable {
        OrderTable {
            title: TITLE.to_string(),
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: self
                .orders
                .iter()
                .enumerate()
                .map(|(idx, order)| self.row(idx + 1, order))
                .collect(),
        }
    }

    fn row(&self, number: usize, order: &Order) -> OrderRow {
        OrderRow {
            number,
            status: order.status.clone(),
            buyer: order.buyer.name.clone(),
            date: self.formatter.format(&order.created_at),
            payment: order.payment_label().to_string(),
            quantity: order.quantity(),
            products: order.products.iter().map(product_card).collect(),
        }
    }
}

fn product_card(product: &OrderProduct) -> ProductCard {
    ProductCard {
        id: product.id.clone(),
        name: product.name.clone(),
        description: product.description.clone(),
        price_label: product.price_label(),
    }
}
