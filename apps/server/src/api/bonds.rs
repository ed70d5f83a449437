use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use bond_recommender_core::reports::BondReport;

use crate::{error::ApiResult, main_lib::AppState};

/// Report of a bond by numeric id, ISIN or security id.
async fn get_bond(
    Path(key): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BondReport>> {
    let report = state.recommender.get_bond_report(&key)?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/bonds/{key}", get(get_bond))
}
