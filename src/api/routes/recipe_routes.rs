//! Recipe Routes

use crate::api::handlers::recipe_handler::*;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建食谱搜索路由器
pub fn create_recipe_router() -> Router<AppState> {
    Router::new().route("/recipes", get(search_recipes))
}
