use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const CREDENTIAL_VARS: [(&str, &str); 3] = [
    ("APP_ID", "edamam.app_id"),
    ("APP_KEY", "edamam.app_key"),
    ("EDAMAM_ACCOUNT_USER", "edamam.account_user"),
];

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// Layers, lowest precedence first:
    /// 1. built-in defaults
    /// 2. ./recetas.toml
    /// 3. `RECETAS_` environment variables (`RECETAS_EDAMAM__APP_ID`)
    /// 4. `APP_ID`, `APP_KEY`, `EDAMAM_ACCOUNT_USER` and `PORT`
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("RECETAS_").split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()));

        // Credentials are read verbatim so that all-digit ids stay strings.
        for (var, key) in CREDENTIAL_VARS {
            if let Ok(value) = std::env::var(var) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }

        figment
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.server.request_timeout == 0 {
            return Err(ConfigValidationError::InvalidRequestTimeout);
        }

        if config.edamam.base_url.trim().is_empty() {
            return Err(ConfigValidationError::MissingUrl("edamam.base_url"));
        }

        if config.translation.base_url.trim().is_empty() {
            return Err(ConfigValidationError::MissingUrl("translation.base_url"));
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("server port must be greater than 0")]
    InvalidPort,

    #[error("server request_timeout must be greater than 0")]
    InvalidRequestTimeout,

    #[error("{0} is not configured")]
    MissingUrl(&'static str),
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("recetas.toml")
}
