use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::recipe_dto::RecipeSearchQuery},
    error::AppError,
};

/// `GET /api/recipes`
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let params = RecipeSearchQuery::from(pairs).into_params();
    debug!("Recipe search: {:?}", params.ingredients);

    let start_time = std::time::Instant::now();

    let result = state.recipe_search_service.search(params).await;

    let took_ms = start_time.elapsed().as_millis() as u64;
    state.metrics.record_search(took_ms, result.is_ok());

    Ok(Json(result?.into_value()))
}
