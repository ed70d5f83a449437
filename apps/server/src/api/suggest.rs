use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use bond_recommender_core::suggest::{SuggestRequest, SuggestResult};
use bond_recommender_core::utils::time_utils::exchange_today;

use crate::{error::ApiResult, main_lib::AppState};

async fn suggest(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SuggestRequest>,
) -> ApiResult<Json<SuggestResult>> {
    let result = state.suggest_service.suggest(&request, exchange_today())?;
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/suggest", post(suggest))
}
