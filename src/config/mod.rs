//! 配置管理模块
//!
//! Loads the process configuration once at startup from defaults, an optional
//! TOML file and environment variables.

pub mod config;
pub mod loader;

pub use config::{AppConfig, EdamamConfig, EdamamCredentials, LoggingConfig, TranslationConfig};
pub use loader::ConfigLoader;
