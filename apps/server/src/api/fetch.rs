use std::future::Future;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Router};
use bond_recommender_core::errors::{Error as CoreError, Result as CoreResult};
use bond_recommender_core::utils::time_utils::exchange_today;

use crate::{error::ApiResult, main_lib::AppState};

/// Runs a fetch pass on its own task so a dropped request cannot roll it back.
async fn run_detached<T, F>(pass: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: Future<Output = CoreResult<T>> + Send + 'static,
{
    tokio::spawn(pass)
        .await
        .map_err(|e| CoreError::Unexpected(format!("fetch task failed: {}", e)))?
        .map_err(Into::into)
}

/// Runs a static data fetch now and waits for it.
async fn fetch_static(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    let service = state.fetch_service.clone();
    let stats = run_detached(async move { service.fetch_static_data(exchange_today()).await }).await?;
    tracing::info!(
        "Manual static fetch: {} new bond(s), {} new coupon(s)",
        stats.bonds.new_bonds,
        stats.payments.new_coupons
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Runs a market data fetch now. A fetch already in progress wins.
async fn fetch_market_data(State(state): State<Arc<AppState>>) -> ApiResult<StatusCode> {
    let service = state.fetch_service.clone();
    let stats = run_detached(async move { service.fetch_market_data(exchange_today()).await }).await?;
    if let Some(stats) = stats {
        tracing::info!("Manual market data fetch: {} snapshot(s)", stats.updated);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Fetch routes. They are mounted outside the request timeout.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/fetch/static", post(fetch_static))
        .route("/fetch/market-data", post(fetch_market_data))
}
