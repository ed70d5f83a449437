use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use bond_recommender_core::collections::{Collection, CollectionListing, Duration};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};

const DEFAULT_DURATION: Duration = Duration::ThreeYears;

#[derive(Debug, Default, Deserialize)]
struct CollectionQuery {
    duration: Option<String>,
}

async fn list_collections(State(state): State<Arc<AppState>>) -> Json<Vec<Collection>> {
    Json(state.recommender.list_collections())
}

async fn get_collection_bonds(
    Path(id): Path<String>,
    Query(query): Query<CollectionQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CollectionListing>> {
    let duration = match query.duration.as_deref() {
        Some(raw) => raw.parse::<Duration>()?,
        None => DEFAULT_DURATION,
    };
    let listing = state.recommender.list_collection_bonds(&id, duration)?;
    Ok(Json(listing))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/collections", get(list_collections))
        .route("/collections/{id}", get(get_collection_bonds))
}
