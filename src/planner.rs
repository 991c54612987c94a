//! Route planner stand-in.
//!
//! Answers every query with the same two routes after a short delay, tagged
//! with the requested endpoints and transport mode.

use std::time::Duration;

use crate::domain::{mock, Route};
use crate::views::RouteQuery;

pub const SEARCH_DELAY: Duration = Duration::from_millis(1000);

pub async fn plan_routes(query: RouteQuery, delay: Duration) -> Vec<Route> {
    tracing::debug!(
        from = %query.from,
        to = %query.to,
        mode = query.mode.label(),
        "Planning routes"
    );
    tokio::time::sleep(delay).await;
    mock::routes(&query.from, &query.to, query.mode)
}
