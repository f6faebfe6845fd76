//! 数据模型模块
//!
//! Request-scoped types of the search pipeline. Nothing here is persisted.

pub mod recipe;
pub mod search;

pub use recipe::RecipeSearchResponse;
pub use search::{Language, ProviderQuery, SearchRequest};
