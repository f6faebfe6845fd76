//! 服务模块

pub mod recipe_search;

pub use recipe_search::{
    RecipeSearchService, RecipeSearchServiceImpl, SearchParams, create_recipe_search_service,
};
