use std::sync::Arc;

use crate::{fetcher::OrderFetcher, time_format::TimeFormatter};

/// Collaborators shared by every request; each page view gets its own
/// `OrderListView` built from these.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn OrderFetcher>,
    pub formatter: Arc<dyn TimeFormatter>,
}
