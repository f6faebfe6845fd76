//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod recipe_handler;

pub use recipe_handler::*;
