use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use bond_recommender_core::search::SearchResult;
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Debug, Deserialize)]
struct SearchQuery {
    q: Option<String>,
    limit: Option<i64>,
    skip: Option<i64>,
}

async fn search_bonds(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SearchResult>> {
    let text = query
        .q
        .ok_or_else(|| ApiError::BadRequest("query parameter \"q\" is required".into()))?;
    let result = state.search_service.search(&text, query.limit, query.skip)?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search_bonds))
}
