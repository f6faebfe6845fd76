//! Recetas - 食谱搜索网关
//!
//! Forwards recipe searches to the Edamam API, translating the ingredient
//! query into English on the way out and the recipe titles into Spanish on
//! the way back.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod providers;
pub mod services;
